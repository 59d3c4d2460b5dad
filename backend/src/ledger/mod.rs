//! In-memory donation ledger.
//!
//! - `aggregate`: the `Ledger` itself, holding every donation together with
//!   the running total, the unique donor count and the per-category totals.
//! - `intake`: turns a submitted `DonationRequest` into a `NewDonation`,
//!   applying the required-field and amount coercion rules.
//! - `simulator`: builds randomized requests for `/api/simulate`.
//! - `state`: `LedgerState`, the lock-guarded handle shared with the Actix
//!   application through `web::Data`.

mod aggregate;
mod intake;
pub mod simulator;
pub mod state;

pub use aggregate::{Ledger, LedgerError, NewDonation};
pub use state::{LedgerState, Receipt};
