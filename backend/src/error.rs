//! Maps request and ledger failures onto the API's JSON error body.

use crate::ledger::LedgerError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The body was absent, not JSON, or not a non-empty JSON object.
    #[error("Invalid JSON")]
    InvalidJson,

    /// A field was present but held a JSON type it can never take.
    #[error("Invalid donation payload: {0}")]
    InvalidPayload(String),

    #[error("Missing required fields: donor, amount, category")]
    MissingFields,

    /// Any failure while recording; the message is returned to the caller.
    #[error("{0}")]
    Internal(String),
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::InvalidPayload(_) | ApiError::MissingFields => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}
