//! Integration tests for the harvester
//!
//! These tests use wiremock to stand in for Project Gutenberg and run the
//! download, strip, tokenize and count cycle end-to-end.

use gutenberg_freq::config::{Config, FilterConfig, OutputConfig, SourceConfig};
use gutenberg_freq::{
    build_word_frequency, harvest, DocumentSource, GutenbergClient, Tokenizer,
};
use gutenberg_freq::{AttemptError, FetchError};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wraps `body` in a Gutenberg-style license header and footer
fn gutenberg_text(title: &str, body: &str) -> String {
    format!(
        "The Project Gutenberg eBook of {title}\n\
         This eBook is for the use of anyone anywhere.\n\
         *** START OF THE PROJECT GUTENBERG EBOOK {title} ***\n\
         {body}\n\
         *** END OF THE PROJECT GUTENBERG EBOOK {title} ***\n\
         Updated editions will replace the previous one.\n"
    )
}

fn source_config(base_url: &str, books: Vec<u32>) -> SourceConfig {
    SourceConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        books,
        ..SourceConfig::default()
    }
}

async fn mount_text(server: &MockServer, url_path: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_primary_url_used_when_available() {
    let mock_server = MockServer::start().await;
    let text = gutenberg_text("FRANKENSTEIN", "You will rejoice to hear");
    mount_text(&mock_server, "/files/84/84-0.txt", 200, &text).await;

    let client = GutenbergClient::new(&source_config(&mock_server.uri(), vec![84])).unwrap();
    let body = client.fetch(84).await.expect("primary fetch failed");

    assert_eq!(body, text);
}

#[tokio::test]
async fn test_fallback_url_used_after_primary_404() {
    let mock_server = MockServer::start().await;
    mount_text(&mock_server, "/files/11/11-0.txt", 404, "Not Found").await;
    mount_text(
        &mock_server,
        "/cache/epub/11/pg11.txt",
        200,
        &gutenberg_text("ALICE", "Down the rabbit hole"),
    )
    .await;

    let client = GutenbergClient::new(&source_config(&mock_server.uri(), vec![11])).unwrap();
    let tokenizer = Tokenizer::new().unwrap();

    let report = build_word_frequency(&client, &[11], &tokenizer).await;

    assert_eq!(report.table.get("rabbit"), Some(1));
    assert_eq!(report.table.get("hole"), Some(1));
    assert_eq!(report.summary.processed, vec![(11, 2)]);
    assert!(report.summary.failed.is_empty());
}

#[tokio::test]
async fn test_fallback_url_used_after_primary_server_error() {
    let mock_server = MockServer::start().await;
    mount_text(&mock_server, "/files/36/36-0.txt", 503, "unavailable").await;
    mount_text(&mock_server, "/cache/epub/36/pg36.txt", 200, "martians").await;

    let client = GutenbergClient::new(&source_config(&mock_server.uri(), vec![36])).unwrap();

    assert_eq!(client.fetch(36).await.unwrap(), "martians");
}

#[tokio::test]
async fn test_both_urls_failing_reports_both_attempts() {
    let mock_server = MockServer::start().await;
    mount_text(&mock_server, "/files/5/5-0.txt", 500, "boom").await;
    // Fallback is not mounted: wiremock answers 404

    let client = GutenbergClient::new(&source_config(&mock_server.uri(), vec![5])).unwrap();
    let error = client.fetch(5).await.unwrap_err();

    assert_eq!(error.book_id(), 5);
    match error {
        FetchError::Exhausted {
            primary, fallback, ..
        } => {
            assert!(matches!(primary, AttemptError::Status { status: 500, .. }));
            assert!(matches!(fallback, AttemptError::Status { status: 404, .. }));
        }
    }
}

#[tokio::test]
async fn test_fallback_url_used_after_primary_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/98/98-0.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("too late")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;
    mount_text(&mock_server, "/cache/epub/98/pg98.txt", 200, "two cities").await;

    let config = SourceConfig {
        timeout_secs: 1,
        ..source_config(&mock_server.uri(), vec![98])
    };
    let client = GutenbergClient::new(&config).unwrap();

    assert_eq!(client.fetch(98).await.unwrap(), "two cities");
}

#[tokio::test]
async fn test_both_urls_timing_out_reports_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let config = SourceConfig {
        timeout_secs: 1,
        ..source_config(&mock_server.uri(), vec![74])
    };
    let client = GutenbergClient::new(&config).unwrap();
    let error = client.fetch(74).await.unwrap_err();

    match error {
        FetchError::Exhausted {
            id,
            primary,
            fallback,
        } => {
            assert_eq!(id, 74);
            assert!(matches!(primary, AttemptError::Timeout { .. }), "{:?}", primary);
            assert!(matches!(fallback, AttemptError::Timeout { .. }), "{:?}", fallback);
        }
    }
}

#[tokio::test]
async fn test_failed_book_does_not_stop_the_run() {
    let mock_server = MockServer::start().await;
    mount_text(
        &mock_server,
        "/files/1/1-0.txt",
        200,
        &gutenberg_text("FIRST", "lighthouse keeper"),
    )
    .await;
    mount_text(
        &mock_server,
        "/files/3/3-0.txt",
        200,
        &gutenberg_text("THIRD", "lighthouse storm"),
    )
    .await;
    // Book 2 is missing from both locations; its words must never be counted
    mount_text(&mock_server, "/files/2/2-0.txt", 404, "phantom phantom").await;
    mount_text(&mock_server, "/cache/epub/2/pg2.txt", 404, "phantom").await;

    let client = GutenbergClient::new(&source_config(&mock_server.uri(), vec![1, 2, 3])).unwrap();
    let tokenizer = Tokenizer::new().unwrap();

    let report = build_word_frequency(&client, &[1, 2, 3], &tokenizer).await;

    assert_eq!(report.table.get("lighthouse"), Some(2));
    assert_eq!(report.table.get("keeper"), Some(1));
    assert_eq!(report.table.get("storm"), Some(1));
    assert_eq!(report.table.get("phantom"), None);
    assert_eq!(report.summary.processed.len(), 2);
    assert_eq!(report.summary.failed.len(), 1);
    assert_eq!(report.summary.failed[0].0, 2);
}

#[tokio::test]
async fn test_full_harvest_writes_both_files() {
    let mock_server = MockServer::start().await;
    mount_text(
        &mock_server,
        "/files/2701/2701-0.txt",
        200,
        &gutenberg_text("MOBY DICK", "Call me Ishmael. The whale, the whale! The sea."),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        source: source_config(&mock_server.uri(), vec![2701]),
        filter: FilterConfig::default(),
        output: OutputConfig {
            full_path: dir.path().join("word_frequencies.txt").display().to_string(),
            top_path: dir.path().join("top_words.txt").display().to_string(),
            top_n: 1,
            summary_top: 50,
        },
    };

    let (report, written) = harvest(&config).await.expect("harvest failed");

    assert_eq!(report.table.total_occurrences(), 5);
    assert_eq!(written.full, 4);
    assert_eq!(written.top, 1);

    let full = std::fs::read_to_string(&config.output.full_path).unwrap();
    assert_eq!(full, "whale\t2\ncall\t1\nishmael\t1\nsea\t1\n");

    let top = std::fs::read_to_string(&config.output.top_path).unwrap();
    assert_eq!(top, "whale\t2\n");
}

#[tokio::test]
async fn test_harvest_rejects_invalid_config() {
    let mut config = Config::default();
    config.source.books.clear();

    assert!(harvest(&config).await.is_err());
}
