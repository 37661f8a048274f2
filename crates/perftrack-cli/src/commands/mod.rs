mod history;
mod quote;
mod search;

use std::time::Instant;

use perftrack_core::{ClientConfig, MarketDataSource, YahooAdapter};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::{Envelope, Metadata};

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    let adapter = YahooAdapter::new(config)?;

    execute(&cli.command, &adapter)
}

fn execute(
    command: &Command,
    source: &dyn MarketDataSource,
) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let data = match command {
        Command::History(args) => history::run(args, source)?,
        Command::Quote(args) => quote::run(args, source)?,
        Command::Search(args) => search::run(args, source)?,
    };

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::debug!(latency_ms, "command completed");

    Ok(Envelope::new(Metadata::new(latency_ms)?, data))
}
