use super::points::Points;
use super::receipt::ReceiptId;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Keeps the points computed for each processed receipt.
///
/// Implementations must be safe to share between concurrent requests. A `put`
/// that has returned is visible to every later `get` for the same id.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Inserts or overwrites the points stored under `id`.
    async fn put(&self, id: ReceiptId, points: Points) -> Result<()>;
    /// Returns the points stored under `id`, or `None` if there are none.
    async fn get(&self, id: &ReceiptId) -> Result<Option<Points>>;
    /// Number of stored receipts.
    async fn len(&self) -> Result<usize>;
}

/// Produces unique, opaque receipt identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ReceiptId;
}

pub type ReceiptStoreRef = Arc<dyn ReceiptStore>;
pub type IdGeneratorRef = Arc<dyn IdGenerator>;
