use crate::domain::receipt::ReceiptId;
use thiserror::Error;

/// How a failure should be surfaced to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something that could not be decoded.
    BadRequest,
    /// The requested receipt does not exist.
    NotFound,
    /// Anything else. Details stay server-side.
    Internal,
}

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("The receipt is invalid")]
    InvalidReceipt(#[source] serde_json::Error),
    #[error("No receipt found for that id")]
    NotFound(ReceiptId),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ReceiptError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReceiptError::InvalidReceipt(_) => ErrorKind::BadRequest,
            ReceiptError::NotFound(_) => ErrorKind::NotFound,
            ReceiptError::Io(_) | ReceiptError::Csv(_) => ErrorKind::Internal,
        }
    }
}

impl From<serde_json::Error> for ReceiptError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            ReceiptError::Io(err.into())
        } else {
            ReceiptError::InvalidReceipt(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
