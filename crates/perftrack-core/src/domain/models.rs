use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use time::format_description;
use time::Date;

use crate::{CoreError, Symbol};

/// One dated price of a historic series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoricPoint {
    #[serde(serialize_with = "serialize_date")]
    pub date: Date,
    pub price: f64,
}

impl HistoricPoint {
    pub const fn new(date: Date, price: f64) -> Self {
        Self { date, price }
    }
}

/// Gap-filled price history of one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricData {
    pub symbol: Symbol,
    /// Last raw provider price, never a synthesized one.
    pub current_price: f64,
    pub points: Vec<HistoricPoint>,
}

/// Current price of one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueItem {
    pub symbol: Symbol,
    pub current_price: f64,
}

/// Current prices in provider response order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueResult {
    pub items: Vec<ValueItem>,
}

impl ValueResult {
    pub fn new(items: Vec<ValueItem>) -> Self {
        Self { items }
    }

    /// Exact, case-sensitive lookup.
    pub fn find_by_symbol(&self, symbol: &str) -> Result<&ValueItem, CoreError> {
        self.items
            .iter()
            .find(|item| item.symbol.as_str() == symbol)
            .ok_or_else(|| CoreError::NotFound {
                symbol: symbol.to_owned(),
            })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Instrument suggestion returned by the provider search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    pub exchange_display: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub type_display: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub items: Vec<SearchItem>,
}

fn serialize_date<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let format = format_description::parse("[year]-[month]-[day]").map_err(S::Error::custom)?;
    let formatted = date.format(&format).map_err(S::Error::custom)?;
    serializer.serialize_str(&formatted)
}

#[cfg(test)]
mod tests {
    use time::Month;

    use super::*;

    fn item(symbol: &str, price: f64) -> ValueItem {
        ValueItem {
            symbol: Symbol::parse(symbol).expect("valid symbol"),
            current_price: price,
        }
    }

    #[test]
    fn find_by_symbol_returns_exact_match() {
        let result = ValueResult::new(vec![item("AAPL", 190.5), item("MSFT", 410.0)]);
        let found = result.find_by_symbol("MSFT").expect("must exist");
        assert_eq!(found, &item("MSFT", 410.0));
    }

    #[test]
    fn find_by_symbol_is_case_sensitive() {
        let result = ValueResult::new(vec![item("AAPL", 190.5)]);
        let err = result.find_by_symbol("aapl").expect_err("must miss");
        assert!(matches!(err, CoreError::NotFound { ref symbol } if symbol == "aapl"));
    }

    #[test]
    fn find_by_symbol_on_empty_result_is_not_found() {
        let err = ValueResult::default()
            .find_by_symbol("AAPL")
            .expect_err("must miss");
        assert_eq!(err.to_string(), "no item found for symbol 'AAPL'");
    }

    #[test]
    fn historic_point_serializes_calendar_date() {
        let date = Date::from_calendar_date(2023, Month::March, 7).expect("valid date");
        let json = serde_json::to_value(HistoricPoint::new(date, 12.5)).expect("serializable");
        assert_eq!(json, serde_json::json!({ "date": "2023-03-07", "price": 12.5 }));
    }

    #[test]
    fn historic_point_date_is_zero_padded() {
        let date = Date::from_calendar_date(987, Month::January, 5).expect("valid date");
        let json = serde_json::to_value(HistoricPoint::new(date, 1.0)).expect("serializable");
        assert_eq!(json["date"], "0987-01-05");
    }
}
