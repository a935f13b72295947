//! Mapping of crate errors onto HTTP responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use super::dto::ErrorResponse;
use crate::error::{ErrorKind, ReceiptError};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let message = match kind {
            ErrorKind::Internal => {
                error!(error = ?self, "Request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            ErrorKind::BadRequest | ErrorKind::NotFound => {
                debug!(error = ?self, "Request rejected");
                self.to_string()
            }
        };

        error_response(kind.status_code(), &message)
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = ErrorResponse {
        error: message.to_string(),
    };
    (status, Json(body)).into_response()
}

/// Answers requests for paths no route matches.
pub async fn route_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

/// Answers requests whose path matches but whose method does not.
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// API result type
pub type ApiResult<T> = Result<T, ReceiptError>;
