use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel shown in category and difficulty pickers meaning "no filter".
pub const ANY: &str = "Any";

/// A single trivia clue, normalized from every remote endpoint.
///
/// `category` is the human-readable label. Endpoints that only know the
/// category id leave it empty; the planner fills it in from the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub category: Option<String>,
    pub category_id: Option<i64>,
    pub question: String,
    pub answer: String,
    /// Dollar value of the clue; absent values never match a difficulty filter
    pub value: Option<i64>,
    /// ISO-8601 date-time string, e.g. "2014-03-15T12:00:00.000Z"
    pub airdate: String,
}

impl Clue {
    /// Date-only prefix of the air date (`YYYY-MM-DD`).
    pub fn air_date(&self) -> &str {
        self.airdate.get(..10).unwrap_or(&self.airdate)
    }

    pub fn has_value(&self, difficulty: u32) -> bool {
        self.value == Some(i64::from(difficulty))
    }
}

/// Unit of date-range expansion around the anchor date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Day,
    Week,
    Month,
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            _ => Err(format!(
                "Invalid granularity '{}'. Valid options are: day, week, month",
                s
            )),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        };
        f.write_str(name)
    }
}

/// Inputs of a search by air date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCriteria {
    pub anchor_date: NaiveDate,
    pub override_year: i32,
    pub granularity: Granularity,
}

/// Inputs of a search by category and/or difficulty
///
/// `None` stands for the "Any" choice of the corresponding picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub category: Option<String>,
    pub difficulty: Option<u32>,
}

impl SearchCriteria {
    pub fn new(category: Option<String>, difficulty: Option<u32>) -> Self {
        Self {
            category,
            difficulty,
        }
    }

    /// True when both pickers are left on "Any"
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.difficulty.is_none()
    }
}

/// Difficulty choices offered to the user, "Any" first.
pub fn difficulty_choices() -> Vec<String> {
    std::iter::once(ANY.to_string())
        .chain((1..=10).map(|step| (step * 100).to_string()))
        .collect()
}
