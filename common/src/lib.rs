//! Types shared between the donation tracker backend and its clients.
//!
//! - `model`: the stored entities (`Donation`, `CategoryTotals`).
//! - `requests`: payloads accepted by the API.
//! - `responses`: the JSON envelopes returned by every endpoint.

pub mod model;
pub mod requests;
pub mod responses;
