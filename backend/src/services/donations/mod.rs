//! # Donation API
//!
//! Routes every request under `/api` to the handler modules below. All
//! handlers share the `LedgerState` registered as application data.
//!
//! ## Sub-modules:
//! - `list`: every stored donation, most recent first.
//! - `stats`: totals, unique donors, average per donor.
//! - `categories`: cumulative amount per category.
//! - `donate`: records a submitted donation.
//! - `simulate`: records a randomized donation.

mod categories;
mod donate;
mod list;
mod simulate;
mod stats;

use crate::error::ApiError;
use crate::ledger::Receipt;
use actix_web::web::{self, get, post, scope};
use actix_web::{HttpResponse, Scope};
use common::responses::DonationCreatedResponse;
use log::warn;

/// The base path for all donation API endpoints.
const API_PATH: &str = "/api";

/// Largest accepted JSON request body.
const JSON_LIMIT: usize = 1024 * 1024;

/// Configures and returns the Actix `Scope` for the donation API.
///
/// # Registered Routes:
///
/// *   **`GET /donations`** → `list::process`
/// *   **`GET /stats`** → `stats::process`
/// *   **`GET /categories`** → `categories::process`
/// *   **`POST /donate`** → `donate::process`, `201 Created` on success,
///     `400` for an invalid body or missing fields.
/// *   **`POST /simulate`** → `simulate::process`, always `201 Created`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .app_data(json_config())
        .route("/donations", get().to(list::process))
        .route("/stats", get().to(stats::process))
        .route("/categories", get().to(categories::process))
        .route("/donate", post().to(donate::process))
        .route("/simulate", post().to(simulate::process))
}

/// JSON extractor settings: bodies are size-capped, and any extraction
/// failure is reported as `ApiError::InvalidJson`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            warn!("Unreadable JSON body: {err}");
            ApiError::InvalidJson.into()
        })
}

/// `201 Created` body shared by `donate` and `simulate`.
fn created(message: &str, receipt: Receipt) -> HttpResponse {
    HttpResponse::Created().json(DonationCreatedResponse {
        success: true,
        message: message.to_string(),
        donation: receipt.donation,
        stats: receipt.totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerState;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::responses::{CategoriesResponse, DonationsResponse, ErrorResponse, StatsResponse};
    use serde_json::json;

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(LedgerState::new()))
                    .service(configure_routes()),
            )
            .await
        };
    }

    macro_rules! donate {
        ($app:expr, $body:expr $(,)?) => {{
            let req = test::TestRequest::post()
                .uri("/api/donate")
                .set_json($body)
                .to_request();
            test::call_service(&$app, req).await
        }};
    }

    macro_rules! stats {
        ($app:expr) => {{
            let req = test::TestRequest::get().uri("/api/stats").to_request();
            let body: StatsResponse = test::call_and_read_body_json(&$app, req).await;
            body
        }};
    }

    #[actix_web::test]
    async fn stats_on_empty_ledger_are_zero() {
        let app = test_app!();
        let body = stats!(app);

        assert!(body.success);
        assert_eq!(body.stats.total_amount, 0.0);
        assert_eq!(body.stats.donor_count, 0);
        assert_eq!(body.stats.average_donation, 0.0);
        assert_eq!(body.stats.total_donations, 0);
    }

    #[actix_web::test]
    async fn donate_records_and_echoes_totals() {
        let app = test_app!();
        let resp = donate!(
            app,
            json!({"donor": "Jane Doe", "amount": 100, "category": "Education"})
        );
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: DonationCreatedResponse = test::read_body_json(resp).await;
        assert!(body.success);
        assert_eq!(body.message, "Donation added successfully");
        assert_eq!(body.donation.id, 1);
        assert_eq!(body.donation.donor, "Jane Doe");
        assert_eq!(body.donation.amount, 100.0);
        assert_eq!(body.stats.total_amount, 100.0);
        assert_eq!(body.stats.donor_count, 1);
    }

    #[actix_web::test]
    async fn donation_shows_up_in_listing_newest_first() {
        let app = test_app!();
        donate!(app, json!({"donor": "A", "amount": 1, "category": "Community"}));
        donate!(app, json!({"donor": "B", "amount": 2, "category": "Community"}));

        let req = test::TestRequest::get().uri("/api/donations").to_request();
        let body: DonationsResponse = test::call_and_read_body_json(&app, req).await;

        assert!(body.success);
        assert_eq!(body.count, 2);
        let donors: Vec<&str> = body.donations.iter().map(|d| d.donor.as_str()).collect();
        assert_eq!(donors, ["B", "A"]);
        assert_eq!(body.donations[0].date.len(), 10);
        assert_eq!(body.donations[0].time.len(), 8);
        assert!(body.donations[0].timestamp.starts_with(&body.donations[0].date));
    }

    #[actix_web::test]
    async fn category_total_grows_by_donated_amount() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/api/categories").to_request();
        let before: CategoriesResponse = test::call_and_read_body_json(&app, req).await;
        let education = before.categories.get("Education").unwrap();

        donate!(app, json!({"donor": "Jane", "amount": 100, "category": "Education"}));
        donate!(app, json!({"donor": "Jane", "amount": 7, "category": "Arts"}));

        let req = test::TestRequest::get().uri("/api/categories").to_request();
        let after: CategoriesResponse = test::call_and_read_body_json(&app, req).await;
        assert!(after.success);
        assert_eq!(after.categories.get("Education"), Some(education + 100.0));
        assert_eq!(after.categories.get("Arts"), Some(7.0));

        let names: Vec<&str> = after.categories.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            ["Education", "Healthcare", "Environment", "Community", "Arts"]
        );
    }

    #[actix_web::test]
    async fn empty_donor_is_rejected() {
        let app = test_app!();
        let resp = donate!(app, json!({"donor": "", "amount": 50, "category": "Community"}));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(!body.success);
        assert_eq!(body.error, "Missing required fields: donor, amount, category");
        assert_eq!(stats!(app).stats.total_donations, 0);
    }

    #[actix_web::test]
    async fn unparsable_amount_is_recorded_as_zero() {
        let app = test_app!();
        let resp = donate!(
            app,
            json!({"donor": "Jane", "amount": "abc", "category": "Community"})
        );
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: DonationCreatedResponse = test::read_body_json(resp).await;
        assert_eq!(body.donation.amount, 0.0);
        assert_eq!(body.stats.donor_count, 1);
    }

    #[actix_web::test]
    async fn case_and_whitespace_variants_count_once() {
        let app = test_app!();
        donate!(app, json!({"donor": "Jane Doe", "amount": 10, "category": "Education"}));
        donate!(app, json!({"donor": " jane doe ", "amount": 30, "category": "Education"}));

        let body = stats!(app);
        assert_eq!(body.stats.donor_count, 1);
        assert_eq!(body.stats.total_donations, 2);
        assert_eq!(body.stats.total_amount, 40.0);
        assert_eq!(body.stats.average_donation, 40.0);
    }

    #[actix_web::test]
    async fn malformed_bodies_are_invalid_json() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/donate")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Invalid JSON");

        for empty in [json!({}), json!(null), json!([1, 2])] {
            let resp = donate!(app, empty);
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.error, "Invalid JSON");
        }
    }

    #[actix_web::test]
    async fn non_numeric_json_amounts_are_coerced() {
        let app = test_app!();
        let cases = [(json!(true), 1.0), (json!([5]), 0.0), (json!({"v": 5}), 0.0)];
        for (amount, expected) in cases {
            let resp = donate!(
                app,
                json!({"donor": "Jane", "amount": amount, "category": "Community"})
            );
            assert_eq!(resp.status(), StatusCode::CREATED);

            let body: DonationCreatedResponse = test::read_body_json(resp).await;
            assert_eq!(body.donation.amount, expected);
        }
        assert_eq!(stats!(app).stats.total_amount, 1.0);

        let resp = donate!(
            app,
            json!({"donor": "Jane", "amount": false, "category": "Community"})
        );
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn wrongly_typed_field_is_rejected() {
        let app = test_app!();
        let resp = donate!(app, json!({"donor": 42, "amount": 5, "category": "Arts"}));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.starts_with("Invalid donation payload"));
    }

    #[actix_web::test]
    async fn simulate_adds_exactly_one_donation_per_call() {
        let app = test_app!();
        for expected in 1..=5 {
            let req = test::TestRequest::post().uri("/api/simulate").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);

            let body: DonationCreatedResponse = test::read_body_json(resp).await;
            assert!(body.success);
            assert_eq!(body.message, "Simulated donation added");
            assert!((500.0..=5000.0).contains(&body.donation.amount));

            assert_eq!(stats!(app).stats.total_donations, expected);
        }
    }
}
