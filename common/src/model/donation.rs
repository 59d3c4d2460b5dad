use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A single recorded contribution.
///
/// Donations are immutable once created. The three time fields are all
/// derived from the same local clock reading taken when the donation was
/// recorded, so `date` and `time` always agree with `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    /// Position-derived identifier: the number of donations stored before
    /// this one, plus one.
    pub id: u64,
    /// Donor name, trimmed. May be empty when the submitted name was blank.
    pub donor: String,
    pub amount: f64,
    pub category: String,
    /// Local date, `YYYY-MM-DD`.
    pub date: String,
    /// Local time of day, `HH:MM:SS`.
    pub time: String,
    /// Local ISO-8601 timestamp without offset, microsecond precision.
    pub timestamp: String,
}

impl Donation {
    pub fn new(id: u64, donor: String, amount: f64, category: String, at: NaiveDateTime) -> Self {
        Self {
            id,
            donor,
            amount,
            category,
            date: at.format(DATE_FORMAT).to_string(),
            time: at.format(TIME_FORMAT).to_string(),
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
