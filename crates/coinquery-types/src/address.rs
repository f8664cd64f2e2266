//! Account address types for coinquery

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Fe32, Hrp};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length in bytes of a decoded account address
pub const ADDRESS_LEN: usize = 20;

/// Prefix used when no other prefix is configured
pub const DEFAULT_ACCOUNT_PREFIX: &str = "cosmos";

/// Address decoding and encoding failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("empty address string is not allowed")]
    Empty,

    #[error("decoding bech32 failed: {0}")]
    Bech32(String),

    #[error("invalid bech32 prefix; expected {expected}, got {found}")]
    PrefixMismatch { expected: String, found: String },

    #[error("invalid address length; expected 20 bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid bech32 prefix: {0}")]
    InvalidPrefix(String),
}

/// Account address - 20 bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccAddress([u8; ADDRESS_LEN]);

impl AccAddress {
    /// Wrap raw address bytes
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Convert to Bech32 string with the given prefix
    pub fn to_bech32(&self, prefix: &str) -> Result<String, AddressError> {
        let hrp = parse_prefix(prefix)?;
        bech32::encode::<Bech32>(hrp, &self.0).map_err(|e| AddressError::Bech32(e.to_string()))
    }

    /// Parse from Bech32 string, returning the lowercased prefix alongside the address
    pub fn from_bech32(s: &str) -> Result<(String, Self), AddressError> {
        if s.trim().is_empty() {
            return Err(AddressError::Empty);
        }

        let checked = CheckedHrpstring::new::<Bech32>(s)
            .map_err(|e| AddressError::Bech32(e.to_string()))?;
        check_padding(checked.data_part_ascii_no_checksum())?;
        let data: Vec<u8> = checked.byte_iter().collect();
        let bytes: [u8; ADDRESS_LEN] = data
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::InvalidLength(data.len()))?;

        Ok((checked.hrp().to_lowercase(), Self(bytes)))
    }

    /// Parse from Bech32 string and require the given prefix
    pub fn from_bech32_with_prefix(s: &str, expected: &str) -> Result<Self, AddressError> {
        let (found, addr) = Self::from_bech32(s)?;
        if !found.eq_ignore_ascii_case(expected) {
            return Err(AddressError::PrefixMismatch {
                expected: expected.to_string(),
                found,
            });
        }
        Ok(addr)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

/// Check that a string is usable as a bech32 human-readable prefix
pub fn validate_prefix(prefix: &str) -> Result<(), AddressError> {
    parse_prefix(prefix).map(|_| ())
}

fn parse_prefix(prefix: &str) -> Result<Hrp, AddressError> {
    Hrp::parse(prefix).map_err(|e| AddressError::InvalidPrefix(format!("{prefix:?}: {e}")))
}

/// Reject data parts whose trailing bits do not come from 8-to-5 bit padding.
///
/// `byte_iter` silently drops leftover bits, so without this a 33-symbol
/// payload would decode to the same 20 bytes as its 32-symbol encoding.
fn check_padding(data: &[u8]) -> Result<(), AddressError> {
    let pad_bits = data.len() * 5 % 8;
    if pad_bits >= 5 {
        return Err(AddressError::Bech32(format!(
            "invalid padding: {} data symbols leave {pad_bits} spare bits",
            data.len()
        )));
    }

    let Some(&last) = data.last() else {
        return Ok(());
    };
    let last = Fe32::from_char(char::from(last))
        .map_err(|e| AddressError::Bech32(e.to_string()))?;
    if last.to_u8() & ((1u8 << pad_bits) - 1) != 0 {
        return Err(AddressError::Bech32("non-zero padding bits".to_string()));
    }
    Ok(())
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the default prefix is always a valid hrp
        match self.to_bech32(DEFAULT_ACCOUNT_PREFIX) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl FromStr for AccAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32_with_prefix(s, DEFAULT_ACCOUNT_PREFIX)
    }
}
