use super::created;
use crate::error::ApiError;
use crate::ledger::simulator::synthesize;
use crate::ledger::LedgerState;
use actix_web::{web, HttpResponse};

const MESSAGE: &str = "Simulated donation added";

/// Actix web handler for `POST /api/simulate`.
///
/// Records a randomized donation through the same intake as
/// `POST /api/donate` and answers `201 Created` with the same body shape.
pub(crate) async fn process(state: web::Data<LedgerState>) -> Result<HttpResponse, ApiError> {
    let request = synthesize(&mut rand::thread_rng());
    let receipt = state.ingest(request).await?;
    Ok(created(MESSAGE, receipt))
}
