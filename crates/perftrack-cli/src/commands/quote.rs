use perftrack_core::{MarketDataSource, Symbol};
use serde_json::Value;

use crate::cli::QuoteArgs;
use crate::error::CliError;

pub fn run(args: &QuoteArgs, source: &dyn MarketDataSource) -> Result<Value, CliError> {
    let symbols = Symbol::parse_all(&args.symbols)?;
    let values = source.values(&symbols)?;

    let data = match &args.find {
        Some(symbol) => serde_json::to_value(values.find_by_symbol(symbol)?)?,
        None => serde_json::to_value(&values.items)?,
    };

    Ok(data)
}
