use crate::domain::receipt::Receipt;
use crate::error::{ReceiptError, Result};
use std::io::{BufReader, Read};

/// Reads receipts from a JSON source.
///
/// The source may hold any number of receipt documents back to back, with
/// or without whitespace between them. Reading stops at the first document
/// that fails to decode.
pub struct ReceiptReader<R: Read> {
    source: BufReader<R>,
}

impl<R: Read> ReceiptReader<R> {
    /// Creates a new `ReceiptReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            source: BufReader::new(source),
        }
    }

    /// Returns an iterator that lazily decodes receipts.
    pub fn receipts(self) -> impl Iterator<Item = Result<Receipt>> {
        serde_json::Deserializer::from_reader(self.source)
            .into_iter::<Receipt>()
            .map(|result| result.map_err(ReceiptError::from))
    }
}
