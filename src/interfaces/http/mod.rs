//! HTTP boundary: routes, handlers and error mapping

pub mod dto;
pub mod error;
pub mod handlers;
pub mod server;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::processor::ReceiptProcessor;

/// Create the API router
pub fn create_router(processor: ReceiptProcessor) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/:id/points", get(handlers::get_points))
        .fallback(error::route_not_found)
        .method_not_allowed_fallback(error::method_not_allowed)
        .with_state(processor)
}
