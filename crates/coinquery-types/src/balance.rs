//! Balance records and the JSON envelope printed by the CLI

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("invalid amount for {denom}:: {amount:?} is not a non-negative integer")]
    NotAnInteger { denom: String, amount: String },
}

/// A single denomination and the amount held of it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// Token denomination
    #[serde(rename = "Coin")]
    pub denom: String,
    /// Base-10 integer amount, kept as a string to avoid precision loss
    #[serde(rename = "Value")]
    pub amount: String,
}

impl BalanceRecord {
    /// Build a record from a wire amount, normalizing it to canonical decimal form.
    pub fn new(denom: impl Into<String>, amount: &str) -> Result<Self, AmountError> {
        let denom = denom.into();
        let amount = canonical_amount(amount).ok_or_else(|| AmountError::NotAnInteger {
            denom: denom.clone(),
            amount: amount.to_string(),
        })?;
        Ok(Self { denom, amount })
    }
}

/// Parses with arbitrary precision so amounts wider than any machine integer survive unchanged.
fn canonical_amount(raw: &str) -> Option<String> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::from_str(raw).ok().map(|n| n.to_string())
}

/// Envelope holding every balance returned for one account, in service order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balances: Vec<BalanceRecord>,
}

impl From<Vec<BalanceRecord>> for BalanceResponse {
    fn from(balances: Vec<BalanceRecord>) -> Self {
        Self { balances }
    }
}
