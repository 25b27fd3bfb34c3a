//! Per-process search session
//!
//! A session owns the planner and the category index built at startup. It is
//! created once and passed to whichever front-end collects user input.

use crate::clue::CategoryIndex;
use crate::config::Settings;
use crate::error::Result;
use crate::planner::QueryPlanner;
use crate::remote::ClueSource;
use log::info;

pub struct Session<S> {
    pub(crate) planner: QueryPlanner<S>,
    pub(crate) index: CategoryIndex,
}

impl<S: ClueSource> Session<S> {
    /// Sample random clues and build the category index.
    ///
    /// # Arguments
    /// * `source` - Remote clue source
    /// * `settings` - Sample size, timeout and fan-out width
    pub async fn start(source: S, settings: &Settings) -> Result<Self> {
        let planner = QueryPlanner::new(source, settings);
        let sample = planner.sample(settings.sample_size).await?;
        let index = CategoryIndex::build(&sample);
        info!(
            "Session ready with {} categor(ies) from {} sampled clue(s)",
            index.len(),
            index.sample_size()
        );
        Ok(Self { planner, index })
    }

    pub fn new(planner: QueryPlanner<S>, index: CategoryIndex) -> Self {
        Self { planner, index }
    }

    pub fn planner(&self) -> &QueryPlanner<S> {
        &self.planner
    }

    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }
}
