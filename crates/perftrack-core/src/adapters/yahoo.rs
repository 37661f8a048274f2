use std::sync::Arc;

use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::config::ClientConfig;
use crate::data_source::{MarketDataSource, SourceError};
use crate::fetch::fetch_json;
use crate::gap_fill::GapFiller;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{
    HistoricData, HistoricParams, HistoricPoint, SearchItem, SearchResult, Symbol,
    ValidationError, ValueItem, ValueResult,
};

const REFERER: &str = "https://finance.yahoo.com/";

/// Yahoo Finance adapter for spark history, quotes and search.
#[derive(Clone)]
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
    config: ClientConfig,
}

impl YahooAdapter {
    /// Adapter backed by a blocking reqwest client.
    pub fn new(config: ClientConfig) -> Result<Self, SourceError> {
        let client = ReqwestHttpClient::new(&config.user_agent)
            .map_err(|e| SourceError::transport(e.message()))?;
        Ok(Self::with_http_client(Arc::new(client), config))
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn historic_url(&self, params: &HistoricParams, symbols: &[Symbol]) -> String {
        format!(
            "{}?symbols={}&range={}&interval={}",
            self.config.spark_url,
            join_symbols(symbols),
            params.range,
            params.interval
        )
    }

    pub fn quote_url(&self, symbols: &[Symbol]) -> String {
        format!("{}?symbols={}", self.config.quote_url, join_symbols(symbols))
    }

    pub fn search_url(&self, term: &str) -> String {
        format!(
            "{};searchTerm={}",
            self.config.search_url,
            urlencoding::encode(term)
        )
    }

    fn request(&self, url: String) -> HttpRequest {
        HttpRequest::get(url)
            .with_header("referer", REFERER)
            .with_timeout_ms(self.config.timeout_ms)
    }
}

impl MarketDataSource for YahooAdapter {
    fn historic(
        &self,
        params: &HistoricParams,
        symbols: &[Symbol],
    ) -> Result<Vec<HistoricData>, SourceError> {
        params.validate()?;
        if symbols.is_empty() {
            return Err(ValidationError::EmptySymbolList.into());
        }

        let url = self.historic_url(params, symbols);
        let response: YahooSparkResponse =
            fetch_json(self.http_client.as_ref(), self.request(url))?;

        map_spark_response(response, &GapFiller::new(params.interval))
    }

    fn values(&self, symbols: &[Symbol]) -> Result<ValueResult, SourceError> {
        if symbols.is_empty() {
            return Err(ValidationError::EmptySymbolList.into());
        }

        let url = self.quote_url(symbols);
        let response: YahooQuoteResponse =
            fetch_json(self.http_client.as_ref(), self.request(url))?;

        Ok(map_quote_response(response))
    }

    fn search(&self, term: &str) -> Result<SearchResult, SourceError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(ValidationError::EmptySearchTerm.into());
        }

        let url = self.search_url(term);
        let response: YahooSearchResponse =
            fetch_json(self.http_client.as_ref(), self.request(url))?;

        Ok(map_search_response(response))
    }
}

fn join_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|symbol| urlencoding::encode(symbol.as_str()))
        .collect::<Vec<_>>()
        .join(",")
}

fn map_spark_response(
    response: YahooSparkResponse,
    filler: &GapFiller,
) -> Result<Vec<HistoricData>, SourceError> {
    response
        .spark
        .result
        .into_iter()
        .map(|result| map_spark_result(result, filler))
        .collect()
}

fn map_spark_result(
    result: YahooSparkResult,
    filler: &GapFiller,
) -> Result<HistoricData, SourceError> {
    let symbol = Symbol::from_provider(result.symbol);

    let series = result.response.into_iter().next().ok_or_else(|| {
        SourceError::decode(format!("spark result for '{symbol}' has no response"))
    })?;
    let prices = series
        .indicators
        .adjclose
        .into_iter()
        .next()
        .ok_or_else(|| {
            SourceError::decode(format!("spark result for '{symbol}' has no adjclose series"))
        })?
        .adjclose
        .into_iter()
        .map(|price| price.unwrap_or(0.0))
        .collect::<Vec<_>>();

    let raw = historic_points(&series.timestamp, &prices).map_err(|message| {
        SourceError::decode(format!("spark result for '{symbol}': {message}"))
    })?;
    let current_price = prices.last().copied().unwrap_or_default();

    let points = filler.fill(&raw);
    tracing::debug!(
        %symbol,
        raw = raw.len(),
        synthesized = points.len() - raw.len(),
        "mapped spark series"
    );

    Ok(HistoricData {
        symbol,
        current_price,
        points,
    })
}

/// Pairs epoch seconds with prices as UTC calendar dates.
fn historic_points(timestamps: &[i64], prices: &[f64]) -> Result<Vec<HistoricPoint>, String> {
    if prices.is_empty() {
        return Err(String::from("series is empty"));
    }
    if timestamps.len() != prices.len() {
        return Err(format!(
            "{} timestamps do not match {} prices",
            timestamps.len(),
            prices.len()
        ));
    }

    timestamps
        .iter()
        .zip(prices)
        .map(|(&timestamp, &price)| {
            utc_date(timestamp).map(|date| HistoricPoint::new(date, price))
        })
        .collect()
}

fn utc_date(timestamp: i64) -> Result<Date, String> {
    OffsetDateTime::from_unix_timestamp(timestamp)
        .map(OffsetDateTime::date)
        .map_err(|e| format!("invalid timestamp {timestamp}: {e}"))
}

/// Provider records pass through unchecked, including blank symbols.
fn map_quote_response(response: YahooQuoteResponse) -> ValueResult {
    let items = response
        .quote_response
        .result
        .into_iter()
        .map(|quote| ValueItem {
            symbol: Symbol::from_provider(quote.symbol),
            current_price: quote.regular_market_price.unwrap_or(0.0),
        })
        .collect();

    ValueResult::new(items)
}

fn map_search_response(response: YahooSearchResponse) -> SearchResult {
    let items = response
        .items
        .into_iter()
        .map(|item| SearchItem {
            symbol: item.symbol,
            name: item.name,
            exchange: item.exch,
            exchange_display: item.exch_disp,
            asset_type: item.kind,
            type_display: item.type_disp,
        })
        .collect();

    SearchResult { items }
}

#[derive(Debug, Clone, Deserialize)]
struct YahooSparkResponse {
    spark: YahooSparkData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooSparkData {
    #[serde(default)]
    result: Vec<YahooSparkResult>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooSparkResult {
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    response: Vec<YahooSparkSeries>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooSparkSeries {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: YahooSparkIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooSparkIndicators {
    #[serde(default)]
    adjclose: Vec<YahooAdjClose>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooAdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: YahooQuoteResponseData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteResponseData {
    #[serde(default)]
    result: Vec<YahooQuoteData>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteData {
    #[serde(default)]
    symbol: String,
    #[serde(rename = "regularMarketPrice", default)]
    regular_market_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooSearchResponse {
    #[serde(default)]
    items: Vec<YahooSearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooSearchItem {
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    exch: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(rename = "exchDisp", default)]
    exch_disp: String,
    #[serde(rename = "typeDisp", default)]
    type_disp: String,
}
