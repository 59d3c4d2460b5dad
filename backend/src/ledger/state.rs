//! Shared, lock-guarded access to the ledger.
//!
//! `LedgerState` is created once in `main.rs` and handed to every Actix
//! worker as `web::Data`. Reads take the read lock; recording a donation
//! holds the write lock for the whole sequence of updates (append, running
//! total, category total, donor recount) so concurrent submissions can never
//! observe or produce a partially applied donation.

use super::intake::admit;
use super::Ledger;
use crate::error::ApiError;
use chrono::Local;
use common::model::donation::Donation;
use common::requests::DonationRequest;
use common::responses::RunningTotals;
use log::{error, info, warn};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};

/// A thread-safe, shareable handle to the process-wide `Ledger`.
#[derive(Clone, Default)]
pub struct LedgerState {
    ledger: Arc<RwLock<Ledger>>,
}

/// What the caller gets back after a donation is recorded: the stored
/// donation and the totals as they stood right after it.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub donation: Donation,
    pub totals: RunningTotals,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `request` and records it.
    ///
    /// This is the single ingestion path for both real and simulated
    /// donations.
    pub async fn ingest(&self, request: DonationRequest) -> Result<Receipt, ApiError> {
        let entry = admit(request).inspect_err(|e| warn!("Rejected donation: {e}"))?;

        let mut ledger = self.ledger.write().await;
        if ledger.is_empty() {
            info!("Recording the first donation");
        }
        let donation = ledger
            .record(entry, Local::now().naive_local())
            .inspect_err(|e| error!("Failed to record donation: {e}"))?;
        let totals = ledger.running_totals();

        info!(
            "Recorded donation #{} of {} to {}",
            donation.id, donation.amount, donation.category
        );
        Ok(Receipt { donation, totals })
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.ledger.read().await
    }
}
