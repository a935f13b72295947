//! Application layer orchestrating the domain.
//!
//! `ReceiptProcessor` ties the scoring rules to the storage and identifier
//! ports. It holds no state of its own beyond shared handles to those ports.

pub mod processor;
