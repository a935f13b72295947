//! Request handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};

use super::dto::{HealthResponse, PointsResponse, ProcessResponse};
use super::error::ApiResult;
use crate::application::processor::ReceiptProcessor;
use crate::domain::receipt::{Receipt, ReceiptId};

/// Scores a submitted receipt and returns the id it was stored under.
///
/// The body is decoded as JSON whatever its declared content type.
pub async fn process_receipt(
    State(processor): State<ReceiptProcessor>,
    body: Bytes,
) -> ApiResult<Json<ProcessResponse>> {
    let receipt = Receipt::from_slice(&body)?;
    let id = processor.process(&receipt).await?;
    Ok(Json(ProcessResponse { id }))
}

/// Returns the points stored for a receipt id.
pub async fn get_points(
    State(processor): State<ReceiptProcessor>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = processor.points(&ReceiptId::from(id)).await?;
    Ok(Json(PointsResponse { points }))
}

pub async fn health_check(
    State(processor): State<ReceiptProcessor>,
) -> ApiResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        receipts: processor.receipt_count().await?,
    }))
}
