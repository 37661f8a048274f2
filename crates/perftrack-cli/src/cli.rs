//! CLI argument definitions for perftrack.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `history` | Fetch gap-filled adjusted-close history |
//! | `quote` | Fetch current prices for symbols |
//! | `search` | Search instruments by free text |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | env or `10000` | Request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! perftrack history AAPL SAP.DE --range 5y --interval 1mo --pretty
//! perftrack quote AAPL MSFT --find MSFT
//! perftrack search "sap se" --format table
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use perftrack_core::{IntervalSpec, RangeSpec};

/// Portfolio performance data from Yahoo Finance.
#[derive(Debug, Parser)]
#[command(
    name = "perftrack",
    author,
    version,
    about = "Yahoo Finance history, quotes and search with gap-filled series"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout in milliseconds, overrides PERFTRACK_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text table for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch adjusted-close history with missing intervals filled.
    ///
    /// # Examples
    ///
    ///   perftrack history AAPL
    ///   perftrack history AAPL MSFT --range 5y --interval 1mo
    History(HistoryArgs),

    /// Fetch current market prices for one or more symbols.
    ///
    /// # Examples
    ///
    ///   perftrack quote AAPL MSFT
    ///   perftrack quote AAPL MSFT --find MSFT
    Quote(QuoteArgs),

    /// Search for instruments by name or symbol.
    ///
    /// # Examples
    ///
    ///   perftrack search "sap se"
    Search(SearchArgs),
}

/// Arguments for the `history` command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// One or more provider symbols (e.g., AAPL, SAP.DE, ^GDAXI).
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,

    /// Total span to fetch, as <amount><unit> with unit d, mo or y.
    #[arg(long, default_value = "1y")]
    pub range: RangeSpec,

    /// Expected spacing between points, as <amount><unit>.
    #[arg(long, default_value = "1d", allow_hyphen_values = true)]
    pub interval: IntervalSpec,
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// One or more provider symbols.
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,

    /// Print only the item whose symbol matches exactly.
    #[arg(long)]
    pub find: Option<String>,
}

/// Arguments for the `search` command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-form search term.
    pub term: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use perftrack_core::TimeUnit;

    use super::*;

    #[test]
    fn history_defaults_to_one_year_of_daily_points() {
        let cli = Cli::try_parse_from(["perftrack", "history", "AAPL"]).expect("parses");

        let Command::History(args) = cli.command else {
            panic!("expected history command");
        };
        assert_eq!(args.symbols, vec!["AAPL"]);
        assert_eq!(args.range, RangeSpec::new(1, TimeUnit::Year));
        assert_eq!(args.interval, IntervalSpec::new(1, TimeUnit::Day));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.timeout_ms, None);
    }

    #[test]
    fn history_accepts_monthly_spans_and_global_flags() {
        let cli = Cli::try_parse_from([
            "perftrack",
            "history",
            "SAP.DE",
            "^GDAXI",
            "--range",
            "5y",
            "--interval",
            "3mo",
            "--format",
            "table",
            "--timeout-ms",
            "2500",
        ])
        .expect("parses");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.timeout_ms, Some(2_500));
        let Command::History(args) = cli.command else {
            panic!("expected history command");
        };
        assert_eq!(args.symbols, vec!["SAP.DE", "^GDAXI"]);
        assert_eq!(args.range, RangeSpec::new(5, TimeUnit::Year));
        assert_eq!(args.interval, IntervalSpec::new(3, TimeUnit::Month));
    }

    #[test]
    fn rejects_unknown_interval_unit() {
        let result = Cli::try_parse_from(["perftrack", "history", "AAPL", "--interval", "1w"]);
        assert!(result.is_err());
    }

    #[test]
    fn quote_requires_a_symbol_and_accepts_find() {
        assert!(Cli::try_parse_from(["perftrack", "quote"]).is_err());

        let cli = Cli::try_parse_from(["perftrack", "quote", "AAPL", "MSFT", "--find", "MSFT"])
            .expect("parses");
        let Command::Quote(args) = cli.command else {
            panic!("expected quote command");
        };
        assert_eq!(args.symbols, vec!["AAPL", "MSFT"]);
        assert_eq!(args.find.as_deref(), Some("MSFT"));
    }
}
