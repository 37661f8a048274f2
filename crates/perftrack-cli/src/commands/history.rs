use perftrack_core::{HistoricParams, MarketDataSource, Symbol};
use serde_json::Value;

use crate::cli::HistoryArgs;
use crate::error::CliError;

pub fn run(args: &HistoryArgs, source: &dyn MarketDataSource) -> Result<Value, CliError> {
    let symbols = Symbol::parse_all(&args.symbols)?;
    let params = HistoricParams::new(args.range, args.interval);

    let history = source.historic(&params, &symbols)?;
    tracing::debug!(series = history.len(), "history fetched");

    Ok(serde_json::to_value(history)?)
}
