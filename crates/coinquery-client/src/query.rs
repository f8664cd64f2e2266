//! gRPC query client for the bank module

use crate::config::ClientConfig;
use async_trait::async_trait;
use coinquery_errors::{Error, Result};
use coinquery_log::{debug, warn};
use coinquery_proto::{BankQueryClient, Coin, QueryAllBalancesRequest, ALL_BALANCES_PATH};
use coinquery_types::{AccAddress, BalanceRecord};
use std::collections::HashSet;
use tonic::transport::{Channel, Endpoint};

/// Anything that can answer an all-balances query for one account
#[async_trait]
pub trait BalanceSource: Send {
    /// Fetch every balance held by `address`, in the order the source returns them
    async fn fetch_balances(&mut self, address: &AccAddress) -> Result<Vec<BalanceRecord>>;

    /// Release the underlying resources
    fn close(self)
    where
        Self: Sized,
    {
    }
}

/// Bank query client bound to a single node channel
pub struct QueryClient {
    endpoint: String,
    prefix: String,
    bank: BankQueryClient<Channel>,
}

impl QueryClient {
    /// Set up a channel to the configured endpoint.
    ///
    /// The channel connects lazily, so an unreachable node only surfaces as
    /// a query error on the first call. Must be called inside a tokio runtime.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let uri = config.endpoint_uri();
        let mut endpoint =
            Endpoint::from_shared(uri).map_err(|e| Error::connection(&config.endpoint, e))?;
        if let Some(timeout) = config.connect_timeout() {
            endpoint = endpoint.connect_timeout(timeout);
        }
        if let Some(timeout) = config.request_timeout() {
            endpoint = endpoint.timeout(timeout);
        }

        debug!(endpoint = %config.endpoint, "opening channel");
        let channel = endpoint.connect_lazy();

        Ok(Self {
            endpoint: config.endpoint.clone(),
            prefix: config.address_prefix.clone(),
            bank: BankQueryClient::new(channel),
        })
    }

    /// Endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BalanceSource for QueryClient {
    async fn fetch_balances(&mut self, address: &AccAddress) -> Result<Vec<BalanceRecord>> {
        let address = address
            .to_bech32(&self.prefix)
            .map_err(|e| Error::Config(e.to_string()))?;
        debug!(path = ALL_BALANCES_PATH, %address, "querying balances");

        // pagination left unset: the node's default page is accepted as-is
        let request = QueryAllBalancesRequest {
            address,
            pagination: None,
            resolve_denom: false,
        };
        let response = self.bank.all_balances(request).await?.into_inner();

        if let Some(page) = response.pagination.as_ref() {
            if !page.next_key.is_empty() {
                warn!(
                    returned = response.balances.len(),
                    total = page.total,
                    "balance list truncated by node pagination; remaining pages are not fetched"
                );
            }
        }

        let records = into_records(response.balances)?;
        debug!(count = records.len(), "received balances");
        Ok(records)
    }

    fn close(self) {
        debug!(endpoint = %self.endpoint, "closing channel");
    }
}

/// Convert wire coins into balance records, keeping the service order.
fn into_records(coins: Vec<Coin>) -> Result<Vec<BalanceRecord>> {
    let mut seen = HashSet::with_capacity(coins.len());
    coins
        .into_iter()
        .map(|coin| {
            if !seen.insert(coin.denom.clone()) {
                return Err(Error::MalformedResponse(format!(
                    "duplicate denomination:: {}",
                    coin.denom
                )));
            }
            BalanceRecord::new(coin.denom, &coin.amount)
                .map_err(|e| Error::MalformedResponse(e.to_string()))
        })
        .collect()
}
