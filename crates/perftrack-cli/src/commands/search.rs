use perftrack_core::MarketDataSource;
use serde_json::Value;

use crate::cli::SearchArgs;
use crate::error::CliError;

pub fn run(args: &SearchArgs, source: &dyn MarketDataSource) -> Result<Value, CliError> {
    let result = source.search(&args.term)?;

    Ok(serde_json::to_value(&result.items)?)
}
