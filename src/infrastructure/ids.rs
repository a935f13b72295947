use crate::domain::ports::IdGenerator;
use crate::domain::receipt::ReceiptId;
use uuid::Uuid;

/// Generates random (v4) UUIDs in their hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> ReceiptId {
        ReceiptId::new(Uuid::new_v4().to_string())
    }
}
