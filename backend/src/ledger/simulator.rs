//! Randomized donations for exercising the service.
//!
//! Generated requests go through the same intake and ledger path as real
//! submissions; only their attributes are synthetic.

use common::model::category::SEEDED_CATEGORIES;
use common::requests::{AmountInput, DonationRequest};
use rand::seq::SliceRandom;
use rand::Rng;

const COMMON_NAMES: [&str; 6] = [
    "John Smith",
    "Alice Brown",
    "Tom White",
    "Jessica Green",
    "Mark Black",
    "Sophie Blue",
];

/// Chance of generating a fresh `Donor NNNN` name instead of a common one.
const GENERATED_NAME_PROBABILITY: f64 = 0.3;

/// Builds a synthetic donation request.
///
/// The amount is a whole number in `500..=5000` and the category is one of
/// the seeded categories, both chosen uniformly.
pub fn synthesize<R: Rng + ?Sized>(rng: &mut R) -> DonationRequest {
    let donor = if rng.gen_bool(GENERATED_NAME_PROBABILITY) {
        format!("Donor {}", rng.gen_range(1000..=9999))
    } else {
        pick(rng, &COMMON_NAMES).to_string()
    };
    let amount = rng.gen_range(500..=5000u32);
    let category = pick(rng, &SEEDED_CATEGORIES);

    DonationRequest {
        donor: Some(donor),
        amount: Some(AmountInput::Number(f64::from(amount))),
        category: Some(category.to_string()),
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, choices: &[&'a str]) -> &'a str {
    // Both pools are non-empty constants.
    choices.choose(rng).copied().unwrap_or_default()
}
