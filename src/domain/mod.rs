//! Domain model: receipts, points and the rules that connect them.

pub mod points;
pub mod ports;
pub mod receipt;
pub mod scoring;
