//! Session and handler tests: startup sampling, input validation, reports
mod common;

use chrono::Datelike;
use common::*;
use jeopardy_search::handlers::search::NO_CRITERIA_NOTICE;
use jeopardy_search::*;
use std::time::Duration;

fn test_settings(sample_size: usize) -> Settings {
    Settings {
        sample_size,
        request_timeout_secs: 1,
        // Sequential sampling keeps the index order deterministic
        max_concurrency: 1,
        ..Settings::default()
    }
}

async fn started_session() -> Session<FakeClueSource> {
    let mut source = three_category_source();
    source.random = three_category_sample();
    Session::start(source, &test_settings(3)).await.unwrap()
}

#[tokio::test]
async fn test_start_builds_index_from_sample() {
    let session = started_session().await;
    assert_eq!(session.index().names(), vec!["Any", "History", "Science", "Opera"]);
    assert_eq!(session.index().sample_size(), 3);
    assert_eq!(session.planner().source().calls(), vec![Call::Random; 3]);
}

#[tokio::test]
async fn test_start_duplicate_title_keeps_later_id() {
    let mut source = FakeClueSource::new();
    source.random = vec![sampled("History", 11), sampled("History", 99)];
    let session = Session::start(source, &test_settings(2)).await.unwrap();

    assert_eq!(session.index().len(), 1);
    assert_eq!(session.index().resolve("History"), Ok(99));
}

#[tokio::test]
async fn test_start_fails_when_service_is_down() {
    let result = Session::start(FakeClueSource::new(), &test_settings(4)).await;
    assert!(matches!(result, Err(SearchError::RemoteQuery { .. })));
}

#[tokio::test]
async fn test_list_categories_report() {
    let session = started_session().await;
    let listing = session.handle_list_categories();

    assert_eq!(listing.categories[0], "Any");
    assert_eq!(listing.difficulties.len(), 11);
    assert!(listing.to_text().contains("more categories exist but are not shown"));
}

#[tokio::test]
async fn test_handle_search_without_criteria() {
    let session = started_session().await;
    let calls_before = session.planner().source().calls().len();

    let report = session.handle_search(Some("Any"), Some("Any")).await.unwrap();
    assert!(report.records.is_empty());
    assert_eq!(report.notices, vec![NO_CRITERIA_NOTICE.to_string()]);
    assert_eq!(session.planner().source().calls().len(), calls_before);
}

#[tokio::test]
async fn test_handle_search_difficulty_shows_categories() {
    let session = started_session().await;
    let report = session.handle_search(None, Some("500")).await.unwrap();

    assert_eq!(report.records.len(), 3);
    assert_eq!(report.records[0].category.as_deref(), Some("History"));
    assert!(report.records.iter().all(|r| r.difficulty == "500"));

    let text = report.to_text();
    assert!(text.contains("Category: Science"));
    assert!(text.contains("Air Date: 2001-09-01"));
}

#[tokio::test]
async fn test_handle_search_category_hides_category() {
    let session = started_session().await;
    let report = session.handle_search(Some("History"), None).await.unwrap();

    assert_eq!(report.records.len(), 3);
    assert!(report.records.iter().all(|r| r.category.is_none()));
    assert_eq!(report.records[2].difficulty, "unknown");
    assert!(!report.to_text().contains("Category:"));
}

#[tokio::test]
async fn test_handle_search_category_and_difficulty_shows_category() {
    let session = started_session().await;
    let report = session
        .handle_search(Some("Science"), Some("1000"))
        .await
        .unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].category.as_deref(), Some("Science"));
    assert!(report.to_text().contains("Category: Science"));
}

#[tokio::test]
async fn test_handle_search_reports_partial_failure() {
    let mut source = three_category_source();
    source.random = three_category_sample();
    source.categories.remove(&40);
    let session = Session::start(source, &test_settings(3)).await.unwrap();

    let report = session.handle_search(Some("Any"), Some("500")).await.unwrap();
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.notices.len(), 1);
    assert!(report.notices[0].contains("'Opera'"));
    assert!(report.to_text().contains("Note: Partial results"));
}

#[tokio::test]
async fn test_handle_search_rejects_bad_input() {
    let session = started_session().await;

    let result = session.handle_search(None, Some("750")).await;
    assert!(matches!(result, Err(SearchError::InvalidInput(_))));

    let result = session.handle_search(Some("Knitting"), None).await;
    assert_eq!(
        result,
        Err(SearchError::UnknownCategory("Knitting".to_string()))
    );
}

#[tokio::test]
async fn test_handle_search_by_date() {
    let mut source = three_category_source();
    source.random = three_category_sample();
    source.dated = vec![
        clue(11, "h-500", Some(500), "2014-03-11"),
        clue(11, "late", Some(500), "2014-04-02"),
    ];
    let session = Session::start(source, &test_settings(3)).await.unwrap();

    let report = session
        .handle_search_by_date("2019-03-15", Some("2014"), Some("month"))
        .await
        .unwrap();

    assert!(report.title.contains("2014-03-01 .. 2014-04-01"));
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].air_date, "2014-03-11");
    assert!(report.records[0].category.is_none());
    assert!(report.notices.is_empty());
}

#[tokio::test]
async fn test_handle_search_by_date_december_notice() {
    let session = started_session().await;
    let report = session
        .handle_search_by_date("2014-12-05", None, Some("month"))
        .await
        .unwrap();
    assert_eq!(report.notices.len(), 1);
    assert!(report.notices[0].contains("December rolls over"));
}

#[tokio::test]
async fn test_handle_search_by_date_invalid_year() {
    let session = started_session().await;

    let result = session
        .handle_search_by_date("2016-02-29", Some("2015"), None)
        .await;
    assert_eq!(
        result,
        Err(SearchError::InvalidDate {
            year: 2015,
            month: 2,
            day: 29
        })
    );
}

#[tokio::test]
async fn test_handle_search_by_date_week_at_earliest_year() {
    let session = started_session().await;
    let calls_before = session.planner().source().calls().len();
    let earliest = chrono::NaiveDate::MIN.year().to_string();

    let result = session
        .handle_search_by_date("2014-01-01", Some(earliest.as_str()), Some("week"))
        .await;
    assert!(matches!(result, Err(SearchError::InvalidDate { month: 1, day: 1, .. })));
    assert_eq!(session.planner().source().calls().len(), calls_before);
}

#[test]
fn test_settings_limits() {
    let settings = test_settings(1);
    assert_eq!(settings.request_timeout(), Duration::from_secs(1));
    assert_eq!(settings.concurrency(), 1);
}
