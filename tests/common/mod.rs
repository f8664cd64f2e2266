#![allow(dead_code)]

//! In-process bank query server for exercising the real gRPC path.

use coinquery_proto::{
    BankQuery, BankQueryServer, Coin, PageResponse, QueryAllBalancesRequest,
    QueryAllBalancesResponse,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{transport::Server, Code, Request, Response, Status};

pub const VALID_ADDR: &str = "cosmos1qqqsyqcyq5rqwzqfpg9scrgwpugpzysnrk363e";
pub const MUTATED_ADDR: &str = "cosmos1qqqsyqcyq5rqwzqfpg9scrgwpugpzysnrk3q3e";
pub const OSMO_ADDR: &str = "osmo1qqqsyqcyq5rqwzqfpg9scrgwpugpzysntdz28t";

#[derive(Clone, Default)]
pub struct MockBank {
    balances: Vec<Coin>,
    next_key: Vec<u8>,
    failure: Option<(Code, String)>,
    requests: Arc<Mutex<Vec<QueryAllBalancesRequest>>>,
}

impl MockBank {
    pub fn with_balances(balances: &[(&str, &str)]) -> Self {
        Self {
            balances: balances
                .iter()
                .map(|(denom, amount)| Coin {
                    denom: denom.to_string(),
                    amount: amount.to_string(),
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing(code: Code, message: &str) -> Self {
        Self {
            failure: Some((code, message.to_string())),
            ..Self::default()
        }
    }

    pub fn truncated(mut self, next_key: &[u8]) -> Self {
        self.next_key = next_key.to_vec();
        self
    }

    /// Requests received so far, shared with the running server
    pub fn requests(&self) -> Vec<QueryAllBalancesRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[tonic::async_trait]
impl BankQuery for MockBank {
    async fn all_balances(
        &self,
        request: Request<QueryAllBalancesRequest>,
    ) -> Result<Response<QueryAllBalancesResponse>, Status> {
        self.requests.lock().unwrap().push(request.into_inner());

        if let Some((code, message)) = &self.failure {
            return Err(Status::new(*code, message.clone()));
        }

        Ok(Response::new(QueryAllBalancesResponse {
            balances: self.balances.clone(),
            pagination: Some(PageResponse {
                next_key: self.next_key.clone(),
                total: self.balances.len() as u64,
            }),
        }))
    }
}

/// Serve `bank` on an ephemeral localhost port and return its address
pub async fn spawn_bank(bank: MockBank) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(BankQueryServer::new(bank))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    addr
}
