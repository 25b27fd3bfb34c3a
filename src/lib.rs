//! Jeopardy! Clue Search Library
//!
//! This library searches a remote Jeopardy! question bank (the jService
//! HTTP/JSON API) in two independent ways:
//! - by category and/or difficulty (clue value 0–1000 in steps of 100)
//! - by air date, expanded to the day, week or month around a chosen date
//!
//! # Architecture
//!
//! - **MCP Layer**: `JeopardyServerHandler` - exposes the searches as MCP tools
//! - **Session Layer**: `Session` + `handlers` - validates user input, formats reports
//! - **Planning Layer**: `planner` - turns criteria into remote calls and post-filters
//! - **Domain Layer**: `clue` - clue model, category index, date windows
//! - **Remote Layer**: `remote` - `ClueSource` trait and its reqwest client
//!
//! # Example
//!
//! ```no_run
//! use jeopardy_search::{JeopardyServerHandler, Settings};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = JeopardyServerHandler::start(&Settings::default()).await?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod clue;
pub mod config;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod planner;
pub mod remote;
pub mod session;
pub mod validation;

use anyhow::Result;
use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail};

// Re-export commonly used types
pub use clue::{CategoryIndex, Clue, DateCriteria, DateRange, Granularity, SearchCriteria};
pub use config::Settings;
pub use error::SearchError;
pub use formatting::{CategoryListing, DisplayRecord, SearchReport};
pub use planner::{CategoryFailure, DateSearch, QueryPlanner, SearchOutcome};
pub use remote::{ClueSource, HttpClueSource};
pub use session::Session;

/// MCP Server handler for Jeopardy! clue searches
///
/// Holds one session: the category index is sampled once at startup and
/// shared by every tool call.
pub struct JeopardyServerHandler {
    pub(crate) session: Session<HttpClueSource>,
}

impl JeopardyServerHandler {
    /// Connect to the question bank and sample the category index
    ///
    /// # Arguments
    /// * `settings` - Base URL, sample size, timeout and fan-out width
    pub async fn start(settings: &Settings) -> Result<Self> {
        let source = HttpClueSource::new(&settings.base_url, settings.request_timeout())?;
        let session = Session::start(source, settings).await?;
        Ok(Self { session })
    }

    pub fn new(session: Session<HttpClueSource>) -> Self {
        Self { session }
    }
}

/// Jeopardy! clue search over the jService question bank.
///
/// Two independent searches are available:
/// - **search_clues**: by category and/or difficulty. Difficulty only searches every
///   known category; category only returns all of its clues.
/// - **search_by_date**: clues aired on a day, or in the week or month containing a date.
///
/// Categories are discovered from a random sample at startup; call list_categories first
/// to see which ones can be searched.
#[mcp_server]
impl McpServer for JeopardyServerHandler {
    /// **List categories**: Category and difficulty choices available for search_clues.
    /// The list comes from a random sample, so it is not exhaustive.
    #[tool]
    async fn list_categories(&self) -> McpResult<String> {
        Ok(self.session.handle_list_categories().to_text())
    }

    /// **Search by category/difficulty**: At least one of category or difficulty is needed.
    /// **Tip**: difficulty alone queries every known category and can be slow.
    #[tool]
    async fn search_clues(
        &self,
        /// Category name from list_categories, or "Any" (optional)
        category: Option<String>,
        /// Difficulty: "Any" or 100/200/.../1000 (optional)
        difficulty: Option<String>,
    ) -> McpResult<String> {
        match self
            .session
            .handle_search(category.as_deref(), difficulty.as_deref())
            .await
        {
            Ok(report) => Ok(report.to_text()),
            Err(e) => bail!("{}", e),
        }
    }

    /// **Search by air date**: Clues aired on the day, week (Sunday–Saturday) or month of a date.
    #[tool]
    async fn search_by_date(
        &self,
        /// Date: YYYY-MM-DD
        date: String,
        /// Year override, replaces the year of date (optional)
        year: Option<String>,
        /// Granularity: day/week/month, default day (optional)
        granularity: Option<String>,
    ) -> McpResult<String> {
        match self
            .session
            .handle_search_by_date(&date, year.as_deref(), granularity.as_deref())
            .await
        {
            Ok(report) => Ok(report.to_text()),
            Err(e) => bail!("{}", e),
        }
    }
}
