//! Jeopardy! Clue Search - Main Entry Point
//!
//! Runs either as an MCP server over stdio or as a one-shot CLI.
//! The actual implementation is in the `jeopardy_search` library.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use jeopardy_search::{HttpClueSource, JeopardyServerHandler, Session, Settings};
use mcp_attr::server::serve_stdio;
use serde::Serialize;
use std::path::PathBuf;

/// Jeopardy! clue search by category, difficulty or air date
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the question bank
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Number of random clues sampled to discover categories
    #[arg(long, global = true)]
    sample_size: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Maximum concurrent requests when searching every category
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    /// Log remote calls to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the searches as MCP tools over stdio
    Serve,
    /// List the sampled categories and the difficulty choices
    Categories {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Search by category and/or difficulty
    Search {
        /// Category name, or "Any"
        #[arg(long)]
        category: Option<String>,
        /// Difficulty: "Any" or 100..1000 in steps of 100
        #[arg(long)]
        difficulty: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Search by air date
    ByDate {
        /// Anchor date, YYYY-MM-DD
        date: String,
        /// Year override
        #[arg(long)]
        year: Option<String>,
        /// day, week or month
        #[arg(long)]
        granularity: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match self.config {
            Some(ref path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(ref url) = self.base_url {
            settings.base_url = url.clone();
        }
        if let Some(size) = self.sample_size {
            settings.sample_size = size;
        }
        if let Some(secs) = self.timeout {
            settings.request_timeout_secs = secs;
        }
        if let Some(limit) = self.concurrency {
            settings.max_concurrency = limit;
        }
        Ok(settings)
    }
}

fn print_output<T: Serialize>(value: &T, text: String, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

/// Build a session, run one search and print its result
async fn run_once(command: Command, settings: &Settings) -> Result<()> {
    let source = HttpClueSource::new(&settings.base_url, settings.request_timeout())?;
    let session = Session::start(source, settings).await?;

    match command {
        Command::Serve => {}
        Command::Categories { json } => {
            let listing = session.handle_list_categories();
            print_output(&listing, listing.to_text(), json)?;
        }
        Command::Search {
            category,
            difficulty,
            json,
        } => {
            let report = session
                .handle_search(category.as_deref(), difficulty.as_deref())
                .await?;
            print_output(&report, report.to_text(), json)?;
        }
        Command::ByDate {
            date,
            year,
            granularity,
            json,
        } => {
            let report = session
                .handle_search_by_date(&date, year.as_deref(), granularity.as_deref())
                .await?;
            print_output(&report, report.to_text(), json)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();

    // Logs go to stderr; stdout carries the MCP protocol or the results.
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let settings = args.settings()?;

    match args.command {
        Command::Serve => {
            let handler = JeopardyServerHandler::start(&settings).await?;
            serve_stdio(handler).await?;
        }
        command => run_once(command, &settings).await?,
    }

    Ok(())
}
