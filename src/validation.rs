//! Validation of raw user input
//!
//! Front-ends collect the four search inputs as strings; these helpers turn
//! them into typed criteria or an `InvalidInput` error.

use crate::clue::{ANY, DateCriteria, Granularity, SearchCriteria};
use crate::error::{Result, SearchError};
use chrono::{Datelike, NaiveDate};

fn is_any(input: Option<&str>) -> bool {
    match input.map(str::trim) {
        None | Some("") => true,
        Some(value) => value.eq_ignore_ascii_case(ANY),
    }
}

/// Parse a category choice; "Any" or nothing means no category filter
pub fn parse_category(input: Option<&str>) -> Option<String> {
    if is_any(input) {
        None
    } else {
        input.map(|s| s.trim().to_string())
    }
}

/// Parse a difficulty choice: "Any", or 0–1000 in steps of 100
pub fn parse_difficulty(input: Option<&str>) -> Result<Option<u32>> {
    if is_any(input) {
        return Ok(None);
    }
    let raw = input.unwrap_or_default().trim();
    match raw.parse::<u32>() {
        Ok(value) if value <= 1000 && value % 100 == 0 => Ok(Some(value)),
        _ => Err(SearchError::InvalidInput(format!(
            "Invalid difficulty '{}'. Use Any or a multiple of 100 from 0 to 1000",
            raw
        ))),
    }
}

/// Parse a date in YYYY-MM-DD format
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        SearchError::InvalidInput(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2014-03-15')",
            input
        ))
    })
}

/// Parse the free-form year override
pub fn parse_year(input: &str) -> Result<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| SearchError::InvalidInput(format!("Invalid year '{}'", input)))
}

/// Parse a granularity choice, defaulting to day
pub fn parse_granularity(input: Option<&str>) -> Result<Granularity> {
    match input.map(str::trim) {
        None | Some("") => Ok(Granularity::default()),
        Some(value) => value.parse().map_err(SearchError::InvalidInput),
    }
}

pub fn search_criteria(category: Option<&str>, difficulty: Option<&str>) -> Result<SearchCriteria> {
    Ok(SearchCriteria::new(
        parse_category(category),
        parse_difficulty(difficulty)?,
    ))
}

/// Build date criteria; the override year defaults to the anchor's own year.
pub fn date_criteria(
    date: &str,
    year: Option<&str>,
    granularity: Option<&str>,
) -> Result<DateCriteria> {
    let anchor_date = parse_date(date)?;
    let override_year = match year.map(str::trim) {
        None | Some("") => anchor_date.year(),
        Some(value) => parse_year(value)?,
    };
    Ok(DateCriteria {
        anchor_date,
        override_year,
        granularity: parse_granularity(granularity)?,
    })
}
