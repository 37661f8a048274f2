use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Provider-defined ticker identifier.
///
/// Symbols are opaque and case-sensitive: `"sap.de"` and `"SAP.DE"` are
/// different symbols. [`Symbol::parse`] trims caller input and rejects blanks;
/// symbols echoed back by the provider are kept verbatim via
/// [`Symbol::from_provider`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Symbol exactly as the provider returned it, empty or padded included.
    pub fn from_provider(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Parse a list of raw symbols, failing on the first invalid entry.
    pub fn parse_all<I, S>(inputs: I) -> Result<Vec<Self>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|raw| Self::parse(raw.as_ref()))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_but_preserves_case() {
        let parsed = Symbol::parse(" sap.De ").expect("symbol should parse");
        assert_eq!(parsed.as_str(), "sap.De");
    }

    #[test]
    fn rejects_blank_symbol() {
        let err = Symbol::parse("   ").expect_err("must fail");
        assert_eq!(err, ValidationError::EmptySymbol);
    }

    #[test]
    fn provider_symbols_are_kept_verbatim() {
        assert_eq!(Symbol::from_provider("AAPL ").as_str(), "AAPL ");
        assert_eq!(Symbol::from_provider("").as_str(), "");
    }

    #[test]
    fn parse_all_stops_on_first_invalid() {
        let err = Symbol::parse_all(["AAPL", "", "MSFT"]).expect_err("must fail");
        assert_eq!(err, ValidationError::EmptySymbol);

        let parsed = Symbol::parse_all(["^GDAXI", "EURUSD=X"]).expect("must parse");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].as_str(), "^GDAXI");
    }
}
