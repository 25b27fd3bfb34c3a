//! Formatting helpers for displaying search results
//!
//! `format_clues` is the pure record transformation; the report types turn
//! records into the text shown by the CLI and the MCP tools.

use crate::clue::Clue;
use crate::planner::CategoryFailure;
use serde::Serialize;

const SEPARATOR: &str = "-------------------------------------------------------";

/// One clue ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub question: String,
    pub answer: String,
    /// Clue value, or "unknown" when the service has none
    pub difficulty: String,
    /// Date-only prefix of the air date
    pub air_date: String,
}

/// Convert clues into display records
///
/// # Arguments
/// * `clues` - Clues in the order they should be shown
/// * `show_category` - Whether each record carries its category label
pub fn format_clues(clues: &[Clue], show_category: bool) -> Vec<DisplayRecord> {
    clues
        .iter()
        .map(|clue| DisplayRecord {
            category: if show_category {
                clue.category.clone()
            } else {
                None
            },
            question: clue.question.clone(),
            answer: clue.answer.clone(),
            difficulty: clue
                .value
                .map(|v| v.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            air_date: clue.air_date().to_string(),
        })
        .collect()
}

/// Render display records as a text block
pub fn render_records(records: &[DisplayRecord]) -> String {
    if records.is_empty() {
        return "No clues found".to_string();
    }

    let mut result = format!("Found {} clue(s):\n\n", records.len());
    for record in records {
        if let Some(ref category) = record.category {
            result.push_str(&format!("Category: {}\n", category));
        }
        result.push_str(&format!("Question: {}\n", record.question));
        result.push_str(&format!("Answer: {}\n", record.answer));
        result.push_str(&format!("Difficulty: {}\n", record.difficulty));
        result.push_str(&format!("Air Date: {}\n", record.air_date));
        result.push_str(SEPARATOR);
        result.push('\n');
    }
    result
}

/// One notice per category a fan-out could not search
pub fn failure_notices(failures: &[CategoryFailure]) -> Vec<String> {
    failures
        .iter()
        .map(|failure| {
            format!(
                "Partial results: category '{}' could not be searched ({})",
                failure.category, failure.error
            )
        })
        .collect()
}

/// Output of one search action, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub title: String,
    pub records: Vec<DisplayRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

impl SearchReport {
    pub fn new(title: impl Into<String>, records: Vec<DisplayRecord>) -> Self {
        Self {
            title: title.into(),
            records,
            notices: Vec::new(),
        }
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notices.push(notice.into());
        self
    }

    pub fn to_text(&self) -> String {
        let mut result = format!("{}\n\n{}", self.title, render_records(&self.records));
        for notice in &self.notices {
            result.push_str(&format!("\nNote: {}", notice));
        }
        result
    }
}

/// Selectable search inputs for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListing {
    pub categories: Vec<String>,
    pub difficulties: Vec<String>,
    pub sample_size: usize,
}

impl CategoryListing {
    pub fn to_text(&self) -> String {
        let mut result = format!(
            "Categories ({} found in a sample of {} clue(s)):\n",
            self.categories.len().saturating_sub(1),
            self.sample_size
        );
        for name in &self.categories {
            result.push_str(&format!("- {}\n", name));
        }
        result.push_str(&format!("\nDifficulties: {}\n", self.difficulties.join(", ")));
        result.push_str(
            "\nNote: categories come from a random sample; more categories exist but are not shown.\n",
        );
        result
    }
}
