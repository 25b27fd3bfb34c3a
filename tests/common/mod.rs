//! Common test utilities for integration tests
#![allow(dead_code)]

use jeopardy_search::{Clue, ClueSource, QueryPlanner, SearchError};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// A remote call seen by the fake source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Random,
    Category(i64),
    Between(String, String),
}

/// In-memory clue source that records every call
#[derive(Default)]
pub struct FakeClueSource {
    /// Served one per `/api/random` call, cycling; empty = every call fails
    pub random: Vec<Clue>,
    /// Clues per category id; unknown ids fail like a 404
    pub categories: HashMap<i64, Vec<Clue>>,
    /// Category ids whose fetch never completes in time
    pub slow: HashSet<i64>,
    /// Returned for every date window, unfiltered
    pub dated: Vec<Clue>,
    calls: Mutex<Vec<Call>>,
}

impl FakeClueSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, id: i64, clues: Vec<Clue>) -> Self {
        self.categories.insert(id, clues);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        calls.len()
    }
}

impl ClueSource for FakeClueSource {
    async fn random_clues(&self) -> Result<Vec<Clue>, SearchError> {
        let seen = self.record(Call::Random);
        if self.random.is_empty() {
            return Err(SearchError::remote("/api/random", "status 503"));
        }
        Ok(vec![self.random[(seen - 1) % self.random.len()].clone()])
    }

    async fn category_clues(&self, category_id: i64) -> Result<Vec<Clue>, SearchError> {
        self.record(Call::Category(category_id));
        if self.slow.contains(&category_id) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        self.categories
            .get(&category_id)
            .cloned()
            .ok_or_else(|| SearchError::remote("/api/category", "status 404"))
    }

    async fn clues_between(
        &self,
        min_date: &str,
        max_date: &str,
    ) -> Result<Vec<Clue>, SearchError> {
        self.record(Call::Between(min_date.to_string(), max_date.to_string()));
        Ok(self.dated.clone())
    }
}

/// Clue as returned by the by-id and by-date endpoints (no category title)
pub fn clue(category_id: i64, question: &str, value: Option<i64>, airdate: &str) -> Clue {
    Clue {
        category: None,
        category_id: Some(category_id),
        question: question.to_string(),
        answer: format!("answer to {}", question),
        value,
        airdate: format!("{}T12:00:00.000Z", airdate),
    }
}

/// Clue as returned by `/api/random` (category title attached)
pub fn sampled(title: &str, category_id: i64) -> Clue {
    Clue {
        category: Some(title.to_string()),
        ..clue(category_id, "sampled", Some(200), "2010-01-01")
    }
}

pub fn test_planner(source: FakeClueSource) -> QueryPlanner<FakeClueSource> {
    QueryPlanner::with_limits(source, Duration::from_millis(200), 3)
}

/// Source with three categories: History (11), Science (25), Opera (40)
pub fn three_category_source() -> FakeClueSource {
    FakeClueSource::new()
        .with_category(
            11,
            vec![
                clue(11, "h-200", Some(200), "2014-03-10"),
                clue(11, "h-500", Some(500), "2014-03-11"),
                clue(11, "h-none", None, "2014-03-12"),
            ],
        )
        .with_category(
            25,
            vec![
                clue(25, "s-500", Some(500), "2012-05-01"),
                clue(25, "s-1000", Some(1000), "2012-05-01"),
            ],
        )
        .with_category(40, vec![clue(40, "o-500", Some(500), "2001-09-01")])
}

pub fn three_category_sample() -> Vec<Clue> {
    vec![
        sampled("History", 11),
        sampled("Science", 25),
        sampled("Opera", 40),
    ]
}
