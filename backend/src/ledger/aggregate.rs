use common::model::category::CategoryTotals;
use common::model::donation::Donation;
use common::responses::{RunningTotals, Stats};
use chrono::NaiveDateTime;
use std::collections::{HashSet, VecDeque};
use thiserror::Error;

/// Category recorded when a donation arrives without one.
pub const DEFAULT_CATEGORY: &str = "Unspecified";

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("donation identifiers exhausted")]
    IdExhausted,

    #[error("amount {amount} would make the {scope} total non-finite")]
    NonFiniteTotal { scope: String, amount: f64 },
}

/// A validated donation waiting to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    pub donor: String,
    pub amount: f64,
    pub category: String,
}

impl NewDonation {
    /// Trims the donor name and falls back to `DEFAULT_CATEGORY` for an
    /// empty category.
    pub fn new(donor: &str, amount: f64, category: &str) -> Self {
        let category = if category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            category
        };
        Self {
            donor: donor.trim().to_string(),
            amount,
            category: category.to_string(),
        }
    }
}

/// Every donation recorded by this process, newest first, plus the
/// aggregates derived from them.
///
/// `total_amount` is always the sum of all stored amounts, `donor_count`
/// the number of distinct non-blank lowercased donor names, and each
/// category total includes every amount recorded under that category.
#[derive(Debug)]
pub struct Ledger {
    donations: VecDeque<Donation>,
    total_amount: f64,
    donor_count: usize,
    categories: CategoryTotals,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            donations: VecDeque::new(),
            total_amount: 0.0,
            donor_count: 0,
            categories: CategoryTotals::seeded(),
        }
    }

    /// Records `entry` at time `at` and returns the stored donation.
    ///
    /// All checks run before the first mutation, so an error leaves the
    /// ledger untouched.
    pub fn record(&mut self, entry: NewDonation, at: NaiveDateTime) -> Result<Donation, LedgerError> {
        let id = u64::try_from(self.donations.len())
            .ok()
            .and_then(|count| count.checked_add(1))
            .ok_or(LedgerError::IdExhausted)?;

        let total = self.total_amount + entry.amount;
        if !total.is_finite() {
            return Err(LedgerError::NonFiniteTotal {
                scope: "overall".to_string(),
                amount: entry.amount,
            });
        }
        let category_total = self.categories.get(&entry.category).unwrap_or(0.0) + entry.amount;
        if !category_total.is_finite() {
            return Err(LedgerError::NonFiniteTotal {
                scope: entry.category,
                amount: entry.amount,
            });
        }

        let donation = Donation::new(id, entry.donor, entry.amount, entry.category, at);
        self.donations.push_front(donation.clone());
        self.total_amount = total;
        self.categories.credit(&donation.category, donation.amount);
        self.recompute_donor_count();

        Ok(donation)
    }

    fn recompute_donor_count(&mut self) {
        let names: HashSet<String> = self
            .donations
            .iter()
            .map(|d| d.donor.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        self.donor_count = names.len();
    }

    /// Stored donations, most recent first.
    pub fn donations(&self) -> impl Iterator<Item = &Donation> {
        self.donations.iter()
    }

    pub fn len(&self) -> usize {
        self.donations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donations.is_empty()
    }

    pub fn categories(&self) -> &CategoryTotals {
        &self.categories
    }

    pub fn stats(&self) -> Stats {
        let average = if self.donor_count > 0 {
            self.total_amount / self.donor_count as f64
        } else {
            0.0
        };
        Stats {
            total_amount: round_cents(self.total_amount),
            donor_count: self.donor_count,
            average_donation: round_cents(average),
            total_donations: self.donations.len(),
        }
    }

    pub fn running_totals(&self) -> RunningTotals {
        RunningTotals {
            total_amount: round_cents(self.total_amount),
            donor_count: self.donor_count,
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
