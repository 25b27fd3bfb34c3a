//! Translation of user criteria into remote queries
//!
//! The planner decides which endpoint shape answers a search, runs the calls
//! (fanning out across categories when needed) and post-filters the results.

use crate::clue::{CategoryIndex, Clue, DateCriteria, DateRange, SearchCriteria, resolve_date_range};
use crate::config::Settings;
use crate::error::{Result, SearchError};
use crate::remote::{CATEGORY_PATH, CLUES_PATH, ClueSource, RANDOM_PATH};
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};
use std::time::Duration;

/// Label given to by-date results the service returned without a category.
///
/// The by-date endpoint normally omits category names, so results end up
/// with this fixed label. A title the service does send is kept instead of
/// being overwritten; date results are displayed without a category line
/// either way.
pub const DATE_CATEGORY_PLACEHOLDER: &str = "Category";

/// A category whose fetch failed during a fan-out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFailure {
    pub category: String,
    pub error: SearchError,
}

/// Result of a category/difficulty search
///
/// `failures` is only populated by the difficulty fan-out, where one failed
/// category does not abort the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub clues: Vec<Clue>,
    pub failures: Vec<CategoryFailure>,
}

impl SearchOutcome {
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Result of a date search together with the window that was queried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSearch {
    pub range: DateRange,
    pub clues: Vec<Clue>,
}

pub struct QueryPlanner<S> {
    source: S,
    call_timeout: Duration,
    concurrency: usize,
}

impl<S: ClueSource> QueryPlanner<S> {
    pub fn new(source: S, settings: &Settings) -> Self {
        Self::with_limits(source, settings.request_timeout(), settings.concurrency())
    }

    pub fn with_limits(source: S, call_timeout: Duration, concurrency: usize) -> Self {
        Self {
            source,
            call_timeout,
            concurrency: concurrency.max(1),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run one remote call under the per-call timeout
    async fn timed<T>(&self, endpoint: &str, call: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(SearchError::remote(
                endpoint,
                format!("timed out after {}s", self.call_timeout.as_secs_f32()),
            )),
        }
    }

    /// Pull `count` random clues for building the category index.
    ///
    /// Failed calls are skipped; the last error is returned only when every
    /// call failed.
    pub async fn sample(&self, count: usize) -> Result<Vec<Clue>> {
        let results: Vec<Result<Vec<Clue>>> = stream::iter(0..count)
            .map(|_| self.timed(RANDOM_PATH, self.source.random_clues()))
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut clues = Vec::new();
        let mut last_error = None;
        let mut succeeded = 0;
        for result in results {
            match result {
                Ok(batch) => {
                    succeeded += 1;
                    clues.extend(batch);
                }
                Err(e) => {
                    warn!("Skipping failed sample call: {}", e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if succeeded == 0 => Err(e),
            _ => {
                info!("Sampled {} clue(s) from {} call(s)", clues.len(), count);
                Ok(clues)
            }
        }
    }

    /// Search by category and/or difficulty.
    ///
    /// - difficulty only: one call per indexed category, clues with a
    ///   matching value, labeled with their category
    /// - category only: one call, every clue of that category
    /// - both: one call for the chosen category, filtered by value
    /// - neither: empty outcome, no remote call
    pub async fn search_by_category_and_difficulty(
        &self,
        criteria: &SearchCriteria,
        index: &CategoryIndex,
    ) -> Result<SearchOutcome> {
        let outcome = match (criteria.category.as_deref(), criteria.difficulty) {
            (None, None) => {
                debug!("No search criteria selected, skipping remote calls");
                SearchOutcome::default()
            }
            (Some(category), None) => {
                let id = index.resolve(category)?;
                let clues = self
                    .timed(CATEGORY_PATH, self.source.category_clues(id))
                    .await?;
                SearchOutcome {
                    clues: label(clues, category),
                    failures: Vec::new(),
                }
            }
            (Some(category), Some(difficulty)) => {
                let id = index.resolve(category)?;
                let clues = self
                    .timed(CATEGORY_PATH, self.source.category_clues(id))
                    .await?;
                SearchOutcome {
                    clues: label(with_value(clues, difficulty), category),
                    failures: Vec::new(),
                }
            }
            (None, Some(difficulty)) => self.fan_out(difficulty, index).await,
        };

        info!(
            "Category/difficulty search returned {} clue(s), {} category fetch(es) failed",
            outcome.clues.len(),
            outcome.failures.len()
        );
        Ok(outcome)
    }

    /// Fetch every indexed category and keep clues worth `difficulty`.
    ///
    /// Calls run with bounded concurrency; results are concatenated in index
    /// order once all calls have completed.
    async fn fan_out(&self, difficulty: u32, index: &CategoryIndex) -> SearchOutcome {
        let categories: Vec<(String, i64)> = index
            .iter()
            .map(|(name, id)| (name.to_string(), id))
            .collect();

        let fetched: Vec<(String, Result<Vec<Clue>>)> = stream::iter(categories)
            .map(|(name, id)| async move {
                debug!("Fetching category '{}' (id {})", name, id);
                let result = self
                    .timed(CATEGORY_PATH, self.source.category_clues(id))
                    .await;
                (name, result)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut outcome = SearchOutcome::default();
        for (name, result) in fetched {
            match result {
                Ok(clues) => outcome
                    .clues
                    .extend(label(with_value(clues, difficulty), &name)),
                Err(error) => {
                    warn!("Skipping category '{}': {}", name, error);
                    outcome.failures.push(CategoryFailure {
                        category: name,
                        error,
                    });
                }
            }
        }
        outcome
    }

    /// Search by air date around an anchor day, week or month.
    pub async fn search_by_date(&self, criteria: &DateCriteria) -> Result<DateSearch> {
        let range = resolve_date_range(criteria)?;
        let (min_date, max_date) = (range.min_date(), range.max_date());

        let mut clues = self
            .timed(CLUES_PATH, self.source.clues_between(&min_date, &max_date))
            .await?;

        if range.is_inverted() {
            warn!(
                "Date window {} ends before it starts (December wraps to January of the same year)",
                range
            );
        } else {
            clues.retain(|clue| range.contains(clue.air_date()));
        }

        for clue in &mut clues {
            clue.category
                .get_or_insert_with(|| DATE_CATEGORY_PLACEHOLDER.to_string());
        }

        info!("Date search {} returned {} clue(s)", range, clues.len());
        Ok(DateSearch { range, clues })
    }
}

fn with_value(clues: Vec<Clue>, difficulty: u32) -> Vec<Clue> {
    clues
        .into_iter()
        .filter(|clue| clue.has_value(difficulty))
        .collect()
}

fn label(clues: Vec<Clue>, category: &str) -> Vec<Clue> {
    clues
        .into_iter()
        .map(|mut clue| {
            clue.category = Some(category.to_string());
            clue
        })
        .collect()
}
