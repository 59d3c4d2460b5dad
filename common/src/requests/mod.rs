use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request payload for `POST /api/donate`.
///
/// Every field is optional at the type level so that absent and empty
/// values can be reported together as missing fields rather than as a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DonationRequest {
    #[serde(default)]
    pub donor: Option<String>,
    #[serde(default)]
    pub amount: Option<AmountInput>,
    #[serde(default)]
    pub category: Option<String>,
}

impl DonationRequest {
    /// True when donor, amount and category are all present and non-empty.
    /// A zero amount counts as absent.
    pub fn is_complete(&self) -> bool {
        let filled = |value: &Option<String>| value.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.donor)
            && filled(&self.category)
            && self.amount.as_ref().is_some_and(AmountInput::is_present)
    }
}

/// A donation amount as submitted: usually a JSON number or a string that
/// should hold one, but any JSON value is accepted and coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
    Flag(bool),
    /// Arrays and objects.
    Other(Value),
}

impl AmountInput {
    /// Empty strings, zero, `false` and empty arrays or objects are absent.
    fn is_present(&self) -> bool {
        match self {
            AmountInput::Number(value) => *value != 0.0,
            AmountInput::Text(text) => !text.is_empty(),
            AmountInput::Flag(flag) => *flag,
            AmountInput::Other(Value::Array(items)) => !items.is_empty(),
            AmountInput::Other(Value::Object(fields)) => !fields.is_empty(),
            AmountInput::Other(Value::Null) => false,
            AmountInput::Other(_) => true,
        }
    }

    /// The numeric amount. `true` is `1.0`; text that does not parse,
    /// arrays, objects and any non-finite value coerce to `0.0`.
    pub fn coerce(&self) -> f64 {
        let value = match self {
            AmountInput::Number(value) => *value,
            AmountInput::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
            AmountInput::Flag(true) => 1.0,
            AmountInput::Flag(false) | AmountInput::Other(_) => 0.0,
        };
        if value.is_finite() { value } else { 0.0 }
    }
}
