use crate::domain::points::Points;
use crate::domain::ports::{IdGeneratorRef, ReceiptStoreRef};
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::domain::scoring;
use crate::error::{ReceiptError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Scores receipts and answers points lookups.
///
/// `ReceiptProcessor` owns handles to the storage and id ports. Cloning is
/// cheap and every clone shares the same store, so one instance can be handed
/// to each request.
#[derive(Clone)]
pub struct ReceiptProcessor {
    store: ReceiptStoreRef,
    ids: IdGeneratorRef,
}

impl ReceiptProcessor {
    /// Creates a new `ReceiptProcessor`.
    ///
    /// # Arguments
    ///
    /// * `store` - Where computed points are kept.
    /// * `ids` - Source of fresh receipt identifiers.
    pub fn new(store: ReceiptStoreRef, ids: IdGeneratorRef) -> Self {
        Self { store, ids }
    }

    /// Scores `receipt`, stores the result under a new id and returns the id.
    pub async fn process(&self, receipt: &Receipt) -> Result<ReceiptId> {
        let breakdown = scoring::breakdown(receipt);
        for (rule, points) in &breakdown {
            debug!(rule = rule.name(), points = points.value(), "Rule evaluated");
        }
        let points: Points = breakdown.iter().map(|(_, points)| *points).sum();
        let id = self.ids.next_id();

        self.store.put(id.clone(), points).await?;
        info!(id = %id, points = points.value(), retailer = %receipt.retailer, "Receipt processed");
        Ok(id)
    }

    /// Returns the points stored for `id`.
    pub async fn points(&self, id: &ReceiptId) -> Result<Points> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ReceiptError::NotFound(id.clone()))
    }

    /// Number of receipts processed so far.
    pub async fn receipt_count(&self) -> Result<usize> {
        self.store.len().await
    }
}

impl std::fmt::Debug for ReceiptProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiptProcessor").finish_non_exhaustive()
    }
}

/// A processor backed by the in-memory store and random UUIDs.
pub fn in_memory_processor() -> ReceiptProcessor {
    use crate::infrastructure::ids::UuidGenerator;
    use crate::infrastructure::in_memory::InMemoryReceiptStore;

    ReceiptProcessor::new(Arc::new(InMemoryReceiptStore::new()), Arc::new(UuidGenerator))
}
