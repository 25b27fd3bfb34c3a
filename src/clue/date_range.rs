//! Expansion of an anchor date into a `[min_date, max_date]` search window

use super::model::{DateCriteria, Granularity};
use crate::error::{Result, SearchError};
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// Inclusive date window sent to the by-date endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateRange {
    pub fn min_date(&self) -> String {
        format_date(self.min)
    }

    pub fn max_date(&self) -> String {
        format_date(self.max)
    }

    /// A December month window ends on January 1 of the same year, so its
    /// upper bound lies before its lower bound.
    pub fn is_inverted(&self) -> bool {
        self.max < self.min
    }

    /// Whether a `YYYY-MM-DD` string falls inside the window (inclusive).
    /// Strings that are not a valid date are outside every window.
    pub fn contains(&self, date: &str) -> bool {
        match date.trim().parse::<NaiveDate>() {
            Ok(day) => self.min <= day && day <= self.max,
            Err(_) => false,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.min_date(), self.max_date())
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Resolve date criteria into a concrete window.
///
/// The anchor's year is replaced by `override_year` first; a month/day pair
/// that does not exist in that year is an error, never clamped.
pub fn resolve(criteria: &DateCriteria) -> Result<DateRange> {
    let anchor = criteria.anchor_date;
    let effective = anchor
        .with_year(criteria.override_year)
        .ok_or(SearchError::InvalidDate {
            year: criteria.override_year,
            month: anchor.month(),
            day: anchor.day(),
        })?;

    let range = match criteria.granularity {
        Granularity::Day => DateRange {
            min: effective,
            max: effective,
        },
        Granularity::Week => {
            // Sunday before (or a full week before, when the anchor is a
            // Sunday) through the following Saturday.
            let weekday = u64::from(effective.weekday().number_from_monday());
            let out_of_range = SearchError::InvalidDate {
                year: criteria.override_year,
                month: anchor.month(),
                day: anchor.day(),
            };
            let min = effective
                .checked_sub_days(Days::new(weekday))
                .ok_or(out_of_range.clone())?;
            let max = min
                .checked_add_days(Days::new(6))
                .ok_or(out_of_range)?;
            DateRange { min, max }
        }
        Granularity::Month => {
            let first = effective.with_day(1).ok_or(SearchError::InvalidDate {
                year: effective.year(),
                month: effective.month(),
                day: 1,
            })?;
            // December wraps to January of the same year.
            let next_month = if first.month() == 12 {
                1
            } else {
                first.month() + 1
            };
            let max = first.with_month(next_month).ok_or(SearchError::InvalidDate {
                year: first.year(),
                month: next_month,
                day: 1,
            })?;
            DateRange { min: first, max }
        }
    };

    Ok(range)
}
