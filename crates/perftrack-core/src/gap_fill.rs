//! Repairs price series where the provider skipped expected points.
//!
//! For every adjacent pair of input points the engine computes the date the
//! second point was expected at. When the real point arrives later, a single
//! synthetic point is inserted at the expected date, priced at the midpoint
//! between the last emitted price and the late point.
//!
//! | Interval unit | Expected date after `prev` |
//! |---------------|----------------------------|
//! | `Month` | last day of the month `amount` months after `prev`'s month |
//! | `Day` | `prev + 1 day`, `amount` is not applied |
//! | `Year` | today's date, captured once per [`GapFiller`] |
//!
//! With the year fallback results depend on the evaluation date, which is
//! fixed for the lifetime of one engine.
//!
//! Gaps are detected against the previous *input* point, so a stretch of
//! several missing periods still yields exactly one synthetic point.

use time::{Date, Month, OffsetDateTime};

use crate::{HistoricPoint, IntervalSpec, TimeUnit};

/// Gap-filling engine bound to the interval of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapFiller {
    interval: IntervalSpec,
    today: Date,
}

impl GapFiller {
    pub fn new(interval: IntervalSpec) -> Self {
        Self::with_today(interval, OffsetDateTime::now_utc().date())
    }

    /// Engine with a fixed evaluation date for the year fallback.
    pub const fn with_today(interval: IntervalSpec, today: Date) -> Self {
        Self { interval, today }
    }

    pub const fn interval(&self) -> IntervalSpec {
        self.interval
    }

    pub const fn today(&self) -> Date {
        self.today
    }

    /// Date at which the point following `previous` is expected.
    ///
    /// `None` when the date falls outside the representable calendar; the
    /// pair is then left untouched.
    pub fn next_expected_date(&self, previous: Date) -> Option<Date> {
        match self.interval.unit {
            TimeUnit::Month => last_day_of_month_after(previous, self.interval.amount),
            TimeUnit::Day => previous.next_day(),
            TimeUnit::Year => Some(self.today),
        }
    }

    /// Returns `points` with one synthetic point inserted per detected gap.
    pub fn fill(&self, points: &[HistoricPoint]) -> Vec<HistoricPoint> {
        let Some((first, _)) = points.split_first() else {
            return Vec::new();
        };

        let mut filled = Vec::with_capacity(points.len());
        filled.push(*first);

        for pair in points.windows(2) {
            let (previous, current) = (pair[0], pair[1]);

            if let Some(expected) = self.next_expected_date(previous.date) {
                if expected < current.date {
                    let last_price = filled.last().map_or(previous.price, |point| point.price);
                    let price = (last_price + current.price) / 2.0;
                    tracing::trace!(
                        %expected,
                        actual = %current.date,
                        price,
                        "inserting synthetic point"
                    );
                    filled.push(HistoricPoint::new(expected, price));
                }
            }

            filled.push(current);
        }

        filled
    }
}

/// Fill gaps in `points` using the current date for the year fallback.
pub fn fill_missing_points(points: &[HistoricPoint], interval: IntervalSpec) -> Vec<HistoricPoint> {
    GapFiller::new(interval).fill(points)
}

fn last_day_of_month_after(date: Date, months: i32) -> Option<Date> {
    let index = month_index(date) + i64::from(months);
    first_day_of_month(index + 1)?.previous_day()
}

/// Months since year 0, January being 0.
fn month_index(date: Date) -> i64 {
    i64::from(date.year()) * 12 + i64::from(u8::from(date.month())) - 1
}

fn first_day_of_month(index: i64) -> Option<Date> {
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u8::try_from(index.rem_euclid(12) + 1).ok()?;
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, 1).ok()
}
