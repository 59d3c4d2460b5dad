use super::NewDonation;
use crate::error::ApiError;
use common::requests::DonationRequest;

/// Applies the submission rules to a request.
///
/// Donor, amount and category must all be present and non-empty, and a
/// zero amount counts as absent. An amount that is present but does not
/// parse as a number is recorded as `0.0` rather than rejected.
pub(crate) fn admit(request: DonationRequest) -> Result<NewDonation, ApiError> {
    if !request.is_complete() {
        return Err(ApiError::MissingFields);
    }

    let amount = request.amount.as_ref().map_or(0.0, |a| a.coerce());
    Ok(NewDonation::new(
        request.donor.as_deref().unwrap_or_default(),
        amount,
        request.category.as_deref().unwrap_or_default(),
    ))
}
