//! Air date search handler

use crate::error::Result;
use crate::formatting::{self, SearchReport};
use crate::remote::ClueSource;
use crate::session::Session;
use crate::validation;

impl<S: ClueSource> Session<S> {
    /// Handles a search by air date.
    ///
    /// # Arguments
    /// * `date` - Anchor date, YYYY-MM-DD
    /// * `year` - Year override; the anchor's year when absent
    /// * `granularity` - day, week or month; day when absent
    pub async fn handle_search_by_date(
        &self,
        date: &str,
        year: Option<&str>,
        granularity: Option<&str>,
    ) -> Result<SearchReport> {
        let criteria = validation::date_criteria(date, year, granularity)?;
        let search = self.planner.search_by_date(&criteria).await?;

        let title = format!(
            "Search: aired {} ({} of {})",
            search.range,
            criteria.granularity,
            criteria.anchor_date.format("%m-%d")
        );
        let mut report = SearchReport::new(title, formatting::format_clues(&search.clues, false));
        if search.range.is_inverted() {
            report = report.with_notice(format!(
                "The month window {} ends before it starts: December rolls over to January of the same year.",
                search.range
            ));
        }
        Ok(report)
    }
}
