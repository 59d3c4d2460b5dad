use crate::ledger::LedgerState;
use actix_web::{web, HttpResponse, Responder};
use common::responses::CategoriesResponse;

/// Actix web handler for `GET /api/categories`.
///
/// Categories appear in the order they were first credited, seeded ones
/// included even while still at zero.
pub(crate) async fn process(state: web::Data<LedgerState>) -> impl Responder {
    let categories = state.read().await.categories().clone();
    HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        categories,
    })
}
