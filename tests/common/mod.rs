#![allow(dead_code)]

use receipt_points::application::processor::ReceiptProcessor;
use receipt_points::domain::ports::IdGenerator;
use receipt_points::domain::receipt::ReceiptId;
use receipt_points::infrastructure::in_memory::InMemoryReceiptStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub const TARGET: &str = include_str!("../fixtures/target.json");
pub const CORNER_MARKET: &str = include_str!("../fixtures/corner_market.json");

/// Hands out `receipt-0`, `receipt-1`, ... so tests can predict ids.
#[derive(Default)]
pub struct SequentialIds(AtomicU64);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> ReceiptId {
        ReceiptId::new(format!("receipt-{}", self.0.fetch_add(1, Ordering::Relaxed)))
    }
}

/// Always returns the same id, to exercise overwrite behaviour.
pub struct FixedId(pub &'static str);

impl IdGenerator for FixedId {
    fn next_id(&self) -> ReceiptId {
        ReceiptId::new(self.0)
    }
}

pub fn processor_with(ids: impl IdGenerator + 'static) -> ReceiptProcessor {
    ReceiptProcessor::new(Arc::new(InMemoryReceiptStore::new()), Arc::new(ids))
}

pub fn sequential_processor() -> ReceiptProcessor {
    processor_with(SequentialIds::default())
}
