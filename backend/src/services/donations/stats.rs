use crate::ledger::LedgerState;
use actix_web::{web, HttpResponse, Responder};
use common::responses::StatsResponse;

/// Actix web handler for `GET /api/stats`.
pub(crate) async fn process(state: web::Data<LedgerState>) -> impl Responder {
    let stats = state.read().await.stats();
    HttpResponse::Ok().json(StatsResponse {
        success: true,
        stats,
    })
}
