//! Protocol Buffer definitions for coinquery
//!
//! Generated message types and the tonic client and server for the part of
//! the Cosmos SDK bank query service the balance lookup talks to.

/// Cosmos SDK types
pub mod cosmos {
    pub mod base {
        pub mod v1beta1 {
            tonic::include_proto!("cosmos.base.v1beta1");
        }
        pub mod query {
            pub mod v1beta1 {
                tonic::include_proto!("cosmos.base.query.v1beta1");
            }
        }
    }

    pub mod bank {
        pub mod v1beta1 {
            tonic::include_proto!("cosmos.bank.v1beta1");
        }
    }
}

// Re-export commonly used types at the crate root for convenience
pub use cosmos::bank::v1beta1::{
    query_client::QueryClient as BankQueryClient,
    query_server::{Query as BankQuery, QueryServer as BankQueryServer},
    QueryAllBalancesRequest, QueryAllBalancesResponse,
};
pub use cosmos::base::query::v1beta1::{PageRequest, PageResponse};
pub use cosmos::base::v1beta1::Coin;

/// Fully qualified gRPC path of the all-balances query
pub const ALL_BALANCES_PATH: &str = "/cosmos.bank.v1beta1.Query/AllBalances";
