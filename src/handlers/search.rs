//! Category/difficulty search handler

use crate::error::Result;
use crate::formatting::{self, SearchReport};
use crate::remote::ClueSource;
use crate::session::Session;
use crate::validation;

pub const NO_CRITERIA_NOTICE: &str =
    "No search criteria selected. Choose a category, a difficulty, or both.";

impl<S: ClueSource> Session<S> {
    /// Handles a search by category and/or difficulty ("Any" or empty = no filter).
    pub async fn handle_search(
        &self,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> Result<SearchReport> {
        let criteria = validation::search_criteria(category, difficulty)?;

        if criteria.is_empty() {
            return Ok(SearchReport::new("Search: any category, any difficulty", Vec::new())
                .with_notice(NO_CRITERIA_NOTICE));
        }

        let outcome = self
            .planner
            .search_by_category_and_difficulty(&criteria, &self.index)
            .await?;

        // Every difficulty search labels its clues; a category-only search
        // already names its one category in the title.
        let show_category = criteria.difficulty.is_some();
        let title = format!(
            "Search: category {}, difficulty {}",
            criteria.category.as_deref().unwrap_or("Any"),
            criteria
                .difficulty
                .map(|d| d.to_string())
                .unwrap_or_else(|| "Any".to_string())
        );

        let mut report = SearchReport::new(
            title,
            formatting::format_clues(&outcome.clues, show_category),
        );
        for notice in formatting::failure_notices(&outcome.failures) {
            report = report.with_notice(notice);
        }
        Ok(report)
    }
}
