use crate::ledger::LedgerState;
use actix_web::{web, HttpResponse, Responder};
use common::responses::DonationsResponse;

/// Actix web handler for `GET /api/donations`.
///
/// Returns every stored donation, most recent first, with their count.
pub(crate) async fn process(state: web::Data<LedgerState>) -> impl Responder {
    let ledger = state.read().await;
    HttpResponse::Ok().json(DonationsResponse {
        success: true,
        count: ledger.len(),
        donations: ledger.donations().cloned().collect(),
    })
}
