use crate::domain::points::Points;
use crate::domain::ports::ReceiptStore;
use crate::domain::receipt::ReceiptId;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for receipt points.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, Points>>>` so clones share the same
/// table. Nothing is evicted and nothing survives a restart.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, Points>>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory receipt store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, id: ReceiptId, points: Points) -> Result<()> {
        let mut receipts = self.receipts.write().await;
        receipts.insert(id, points);
        Ok(())
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Points>> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(id).copied())
    }

    async fn len(&self) -> Result<usize> {
        let receipts = self.receipts.read().await;
        Ok(receipts.len())
    }
}
