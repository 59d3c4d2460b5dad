//! # Donation Submission
//!
//! `POST /api/donate` accepts `{donor, amount, category}`.
//!
//! The body goes through two checks before it reaches the ledger:
//!
//! 1.  **Shape**: it must be a non-empty JSON object. Anything else,
//!     including a body that fails to parse, is `400 Invalid JSON`.
//! 2.  **Types**: each present field must deserialize into
//!     `DonationRequest`. A donor or category that is not a string is a
//!     `400`; the amount accepts any JSON value.
//!
//! Required-field and amount coercion rules are then applied by the
//! ledger's intake, shared with `/api/simulate`.

use super::created;
use crate::error::ApiError;
use crate::ledger::LedgerState;
use actix_web::{web, HttpResponse};
use common::requests::DonationRequest;
use serde_json::Value;

const MESSAGE: &str = "Donation added successfully";

/// Actix web handler for `POST /api/donate`.
///
/// # Returns
/// - `201 Created` with the stored donation and the updated running totals.
/// - `400 Bad Request` for an unusable body or missing fields.
/// - `500 Internal Server Error` if the ledger refuses the donation.
pub(crate) async fn process(
    state: web::Data<LedgerState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let request = parse_request(payload.into_inner())?;
    let receipt = state.ingest(request).await?;
    Ok(created(MESSAGE, receipt))
}

fn parse_request(body: Value) -> Result<DonationRequest, ApiError> {
    match &body {
        Value::Object(fields) if !fields.is_empty() => {}
        _ => return Err(ApiError::InvalidJson),
    }
    serde_json::from_value(body).map_err(|e| ApiError::InvalidPayload(e.to_string()))
}
