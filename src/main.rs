use anyhow::{Context, Result};
use clap::Parser;
use coinquery_client::{query_balances, write_response, ClientConfig, QueryClient};
use coinquery_errors::Error;
use coinquery_log::{debug, error};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "coinquery",
    about = "Print every token balance of a Cosmos account as JSON",
    version
)]
struct Cli {
    #[arg(value_name = "ADDRESS", help = "Bech32 account address to query")]
    address: String,

    #[arg(
        long,
        value_name = "HOST:PORT",
        help = "gRPC endpoint of the node [default: 127.0.0.1:9090]"
    )]
    node: Option<String>,

    #[arg(
        long,
        value_name = "HRP",
        help = "Expected bech32 account prefix [default: cosmos]"
    )]
    prefix: Option<String>,

    #[arg(long, value_name = "FILE", help = "Configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(long, value_name = "LEVEL", help = "Log level (trace, debug, info, warn, error)")]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    coinquery_log::init_tracing(cli.log_level.as_deref(), cli.verbose)
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to initialize logging")?;

    let config = load_config(&cli)?;
    debug!(endpoint = %config.endpoint, prefix = %config.address_prefix, "configuration loaded");

    let response = query_balances(&cli.address, &config.address_prefix, || {
        QueryClient::connect(&config)
    })
    .await
    .map_err(|e| {
        error!(kind = e.kind(), "balance lookup failed");
        let stage = stage_message(&e);
        anyhow::Error::new(e).context(stage)
    })?;

    let stdout = std::io::stdout();
    write_response(&response, stdout.lock()).context("failed to marshal json")?;

    Ok(())
}

/// Leading line of the diagnostic, naming the stage that failed
fn stage_message(err: &Error) -> &'static str {
    match err {
        Error::InvalidAddress { .. } => "failed to parse address",
        Error::Connection { .. } => "failed to create client",
        Error::Query(_) | Error::MalformedResponse(_) => "failed to fetch balance",
        Error::Format(_) => "failed to marshal json",
        Error::Config(_) => "invalid configuration",
    }
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let base = match &cli.config {
        Some(path) => ClientConfig::load_from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => ClientConfig::default(),
    };

    let config = base.with_overrides(cli.node.clone(), cli.prefix.clone());
    config.validate().context("invalid configuration")?;
    Ok(config)
}
