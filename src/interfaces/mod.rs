//! Input adapters for feeding orders into the processor.

pub mod csv;
