//! Wire shapes for the HTTP API

use crate::domain::points::Points;
use crate::domain::receipt::ReceiptId;
use serde::{Deserialize, Serialize};

/// Body returned by `POST /receipts/process`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Body returned by `GET /receipts/{id}/points`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}
