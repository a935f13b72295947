//! Adapters for the domain ports.

pub mod ids;
pub mod in_memory;
