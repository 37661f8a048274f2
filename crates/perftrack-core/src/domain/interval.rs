use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Granularity used by both the requested range and the point interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "mo")]
    Month,
    #[serde(rename = "y")]
    Year,
}

impl TimeUnit {
    pub const ALL: [Self; 3] = [Self::Day, Self::Month, Self::Year];

    /// Wire code understood by the provider (`range=1y&interval=1d`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "d",
            Self::Month => "mo",
            Self::Year => "y",
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "d" => Ok(Self::Day),
            "mo" => Ok(Self::Month),
            "y" => Ok(Self::Year),
            other => Err(ValidationError::InvalidTimeUnit {
                value: other.to_owned(),
            }),
        }
    }
}

/// Expected spacing between two consecutive points of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalSpec {
    pub amount: i32,
    pub unit: TimeUnit,
}

impl IntervalSpec {
    pub const fn new(amount: i32, unit: TimeUnit) -> Self {
        Self { amount, unit }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount("interval", self.amount)
    }
}

impl Display for IntervalSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.unit)
    }
}

impl FromStr for IntervalSpec {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (amount, unit) = parse_span("interval", value)?;
        Ok(Self { amount, unit })
    }
}

/// Total span of a requested series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeSpec {
    pub amount: i32,
    pub unit: TimeUnit,
}

impl RangeSpec {
    pub const fn new(amount: i32, unit: TimeUnit) -> Self {
        Self { amount, unit }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount("range", self.amount)
    }
}

impl Display for RangeSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.unit)
    }
}

impl FromStr for RangeSpec {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (amount, unit) = parse_span("range", value)?;
        Ok(Self { amount, unit })
    }
}

/// Range and interval of a historic-data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoricParams {
    pub range: RangeSpec,
    pub interval: IntervalSpec,
}

impl HistoricParams {
    pub const fn new(range: RangeSpec, interval: IntervalSpec) -> Self {
        Self { range, interval }
    }

    /// Both amounts must be strictly positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.range.validate()?;
        self.interval.validate()
    }
}

impl Default for HistoricParams {
    /// One year of daily points.
    fn default() -> Self {
        Self {
            range: RangeSpec::new(1, TimeUnit::Year),
            interval: IntervalSpec::new(1, TimeUnit::Day),
        }
    }
}

fn validate_amount(field: &'static str, amount: i32) -> Result<(), ValidationError> {
    if amount <= 0 {
        return Err(ValidationError::NonPositiveAmount { field, amount });
    }
    Ok(())
}

fn parse_span(field: &'static str, value: &str) -> Result<(i32, TimeUnit), ValidationError> {
    let trimmed = value.trim();
    let invalid = || ValidationError::InvalidSpan {
        field,
        value: trimmed.to_owned(),
    };

    let split = trimmed
        .find(|ch: char| ch.is_ascii_alphabetic())
        .ok_or_else(invalid)?;
    let (amount, unit) = trimmed.split_at(split);

    let amount = amount.parse::<i32>().map_err(|_| invalid())?;
    let unit = TimeUnit::from_str(unit)?;

    Ok((amount, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compact_spans() {
        let interval = IntervalSpec::from_str("3mo").expect("must parse");
        assert_eq!(interval, IntervalSpec::new(3, TimeUnit::Month));

        let range = RangeSpec::from_str(" 1Y ").expect("must parse");
        assert_eq!(range, RangeSpec::new(1, TimeUnit::Year));
        assert_eq!(range.to_string(), "1y");
    }

    #[test]
    fn parse_keeps_non_positive_amounts_for_validation() {
        let interval = IntervalSpec::from_str("-1d").expect("must parse");
        assert_eq!(interval.amount, -1);
        assert!(matches!(
            interval.validate(),
            Err(ValidationError::NonPositiveAmount {
                field: "interval",
                amount: -1
            })
        ));
    }

    #[test]
    fn rejects_unknown_unit_and_missing_amount() {
        let err = IntervalSpec::from_str("2w").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTimeUnit { .. }));

        let err = RangeSpec::from_str("mo").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidSpan { field: "range", .. }));

        let err = RangeSpec::from_str("12").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidSpan { .. }));
    }

    #[test]
    fn default_params_are_one_year_of_days() {
        let params = HistoricParams::default();
        assert_eq!(params.range.to_string(), "1y");
        assert_eq!(params.interval.to_string(), "1d");
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_range_is_invalid() {
        let params = HistoricParams::new(
            RangeSpec::new(0, TimeUnit::Year),
            IntervalSpec::new(1, TimeUnit::Day),
        );
        assert!(matches!(
            params.validate(),
            Err(ValidationError::NonPositiveAmount { field: "range", amount: 0 })
        ));
    }
}
