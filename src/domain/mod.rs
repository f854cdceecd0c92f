//! Domain types: the order record and the ports its processing depends on.

pub mod order;
pub mod ports;
