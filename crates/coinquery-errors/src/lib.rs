//! Error handling types for coinquery.
//!
//! Every stage of a balance lookup reports failures through [`Error`]. None
//! of them are recovered locally: the binary prints the diagnostic and exits
//! with a failure status.

use thiserror::Error;

/// Core error type for coinquery
#[derive(Error, Debug)]
pub enum Error {
    /// The command line address could not be decoded
    #[error("invalid address {input:?}:: {reason}")]
    InvalidAddress { input: String, reason: String },

    /// The channel to the node could not be set up
    #[error("connection error for {endpoint}:: {reason}")]
    Connection { endpoint: String, reason: String },

    /// The remote call failed or returned an error status
    #[error("query failed:: {0}")]
    Query(#[from] tonic::Status),

    /// The node answered with data that does not fit the balance model
    #[error("query failed:: malformed response:: {0}")]
    MalformedResponse(String),

    /// The balance document could not be serialized or written
    #[error("format error:: {0}")]
    Format(String),

    /// Configuration could not be loaded or is invalid
    #[error("config error:: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_address(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidAddress {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub fn connection(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self::Connection {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }

    /// Short stable name of the failing stage, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidAddress { .. } => "invalid_address",
            Error::Connection { .. } => "connection",
            Error::Query(_) | Error::MalformedResponse(_) => "query",
            Error::Format(_) => "format",
            Error::Config(_) => "config",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Format(err.to_string())
    }
}

/// Result type alias for coinquery operations
pub type Result<T> = std::result::Result<T, Error>;
