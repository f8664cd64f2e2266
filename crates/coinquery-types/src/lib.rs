//! Core types for coinquery
//!
//! This crate provides the account address codec and the balance data
//! model shared by the query client and the output formatter.

pub mod address;
pub mod balance;

pub use address::{AccAddress, AddressError, ADDRESS_LEN, DEFAULT_ACCOUNT_PREFIX};
pub use balance::{AmountError, BalanceRecord, BalanceResponse};
