//! Client library for querying account balances from a Cosmos node.
//!
//! The lookup runs in three stages: decode the bech32 address, issue one
//! bank `AllBalances` query over gRPC, and render the result as JSON.
//! [`query_balances`] wires the first two together and guarantees that no
//! connection is attempted for an address that fails to decode.

pub mod config;
pub mod format;
pub mod query;

pub use config::{ClientConfig, ConfigError, DEFAULT_ENDPOINT};
pub use format::{render, write_response};
pub use query::{BalanceSource, QueryClient};

use coinquery_errors::{Error, Result};
use coinquery_log::debug;
use coinquery_types::{AccAddress, BalanceResponse};

/// Parse `raw_address`, then open a source with `connect` and fetch its balances once.
///
/// The source is closed before returning, whether or not the fetch succeeded.
pub async fn query_balances<S, F>(
    raw_address: &str,
    prefix: &str,
    connect: F,
) -> Result<BalanceResponse>
where
    S: BalanceSource,
    F: FnOnce() -> Result<S>,
{
    let address = AccAddress::from_bech32_with_prefix(raw_address, prefix)
        .map_err(|e| Error::invalid_address(raw_address, e))?;
    debug!(address = raw_address, "address decoded");

    let mut source = connect()?;
    let fetched = source.fetch_balances(&address).await;
    source.close();

    Ok(BalanceResponse::from(fetched?))
}
