//! Error types for clue searches
//!
//! Every search operation returns `Result<T, SearchError>`. Front-ends decide
//! how to show the failure; nothing in the library discards an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The anchor date does not exist once the override year is applied
    /// (e.g. February 29 moved to a non-leap year).
    #[error("Invalid date: {month:02}-{day:02} does not exist in year {year}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The category name is not part of the sampled category index.
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    /// Network failure, non-success status or undecodable body.
    #[error("Remote query to {endpoint} failed: {message}")]
    RemoteQuery { endpoint: String, message: String },

    /// Malformed user input (year, difficulty, granularity, date).
    #[error("{0}")]
    InvalidInput(String),
}

impl SearchError {
    pub fn remote(endpoint: impl Into<String>, message: impl ToString) -> Self {
        SearchError::RemoteQuery {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
