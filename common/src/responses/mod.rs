//! JSON envelopes returned by the donation API.
//!
//! Every success body carries `success: true`; every error body is an
//! `ErrorResponse` with `success: false`.

use crate::model::category::CategoryTotals;
use crate::model::donation::Donation;
use serde::{Deserialize, Serialize};

/// Aggregate figures reported by `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Sum of every donation, rounded to cents.
    pub total_amount: f64,
    /// Number of distinct non-blank donor names.
    pub donor_count: usize,
    /// `total_amount / donor_count` rounded to cents, or `0.0` with no donors.
    pub average_donation: f64,
    pub total_donations: usize,
}

/// The subset of `Stats` echoed back after a donation is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningTotals {
    pub total_amount: f64,
    pub donor_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationsResponse {
    pub success: bool,
    pub count: usize,
    pub donations: Vec<Donation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: Stats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryTotals,
}

/// Body of a `201 Created` from `POST /api/donate` or `POST /api/simulate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationCreatedResponse {
    pub success: bool,
    pub message: String,
    pub donation: Donation,
    pub stats: RunningTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
