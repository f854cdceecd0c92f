//! Application layer coordinating order processing.
//!
//! This module defines the `OrderProcessor`, which sequences one payment and
//! one notification per order through the domain ports, plus the canonical
//! demo scenarios run by the binary.

pub mod demo;
pub mod processor;
