//! Remote question bank access
//!
//! The three endpoints return slightly different clue shapes; they are all
//! normalized into [`Clue`] here so the planner never deals with missing
//! fields per endpoint.

use crate::clue::Clue;
use crate::error::{Result, SearchError};
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://jservice.io";

pub const RANDOM_PATH: &str = "/api/random";
pub const CATEGORY_PATH: &str = "/api/category";
pub const CLUES_PATH: &str = "/api/clues";

/// Source of clues. Implemented over HTTP by [`HttpClueSource`].
///
/// Calls have no ordering dependency on each other and may run concurrently.
pub trait ClueSource: Send + Sync {
    /// `GET /api/random`: one random clue with its category attached
    fn random_clues(&self) -> impl Future<Output = Result<Vec<Clue>>> + Send;

    /// `GET /api/category?id=`: every clue of one category
    fn category_clues(&self, category_id: i64) -> impl Future<Output = Result<Vec<Clue>>> + Send;

    /// `GET /api/clues?min_date=&max_date=`: clues aired inside a window
    fn clues_between(
        &self,
        min_date: &str,
        max_date: &str,
    ) -> impl Future<Output = Result<Vec<Clue>>> + Send;
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCategory {
    pub id: Option<i64>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawClue {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub value: Option<i64>,
    pub airdate: Option<String>,
    pub category_id: Option<i64>,
    pub category: Option<RawCategory>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCategoryResponse {
    #[serde(default)]
    pub clues: Vec<RawClue>,
}

impl From<RawClue> for Clue {
    fn from(raw: RawClue) -> Self {
        let (title, nested_id) = match raw.category {
            Some(category) => (category.title, category.id),
            None => (None, None),
        };
        Clue {
            category: title,
            category_id: raw.category_id.or(nested_id),
            question: raw.question.unwrap_or_default(),
            answer: raw.answer.unwrap_or_default(),
            value: raw.value,
            airdate: raw.airdate.unwrap_or_default(),
        }
    }
}

fn normalize(raw: Vec<RawClue>) -> Vec<Clue> {
    raw.into_iter().map(Clue::from).collect()
}

/// HTTP/JSON client for the jService API
#[derive(Clone)]
pub struct HttpClueSource {
    client: Client,
    base_url: String,
}

impl HttpClueSource {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| SearchError::remote(path, e))?
            .error_for_status()
            .map_err(|e| SearchError::remote(path, e))?;

        response
            .json::<T>()
            .await
            .map_err(|e| SearchError::remote(path, format!("invalid JSON: {}", e)))
    }
}

impl ClueSource for HttpClueSource {
    async fn random_clues(&self) -> Result<Vec<Clue>> {
        let raw: Vec<RawClue> = self.get_json(RANDOM_PATH, &[]).await?;
        Ok(normalize(raw))
    }

    async fn category_clues(&self, category_id: i64) -> Result<Vec<Clue>> {
        let raw: RawCategoryResponse = self
            .get_json(CATEGORY_PATH, &[("id", category_id.to_string())])
            .await?;
        Ok(normalize(raw.clues))
    }

    async fn clues_between(&self, min_date: &str, max_date: &str) -> Result<Vec<Clue>> {
        let raw: Vec<RawClue> = self
            .get_json(
                CLUES_PATH,
                &[
                    ("min_date", min_date.to_string()),
                    ("max_date", max_date.to_string()),
                ],
            )
            .await?;
        Ok(normalize(raw))
    }
}
