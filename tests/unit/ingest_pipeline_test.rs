//! Unit tests for the ingest pipeline.
//!
//! Drives full drop/paste passes through extract, preview, categorize, and
//! save against an in-memory database, checking the saved records and the
//! notifications emitted for the (external) toast layer.

use std::sync::Arc;

use linkstash::database::Database;
use linkstash::services::ingest::{IngestPipeline, IngestPipelineTrait};
use linkstash::stores::link_store::{LinkStore, LinkStoreTrait};
use linkstash::types::notification::NotificationKind;

/// Helper: create a pipeline over a fresh in-memory database.
fn setup() -> IngestPipeline {
    let db = Arc::new(Database::open_in_memory().expect("Failed to open in-memory database"));
    IngestPipeline::new(LinkStore::new(db))
}

#[test]
fn test_process_content_saves_each_link() {
    let mut pipeline = setup();

    let report = pipeline.process_content(
        "Read https://blog.rust-lang.org/inside-rust and https://docs.rs today",
    );

    assert_eq!(report.saved.len(), 2);
    assert_eq!(pipeline.store().get_all().unwrap().len(), 2);

    // One success notification per saved link, in processing order
    assert_eq!(report.notifications.len(), 2);
    for notification in &report.notifications {
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.title, "Link saved");
    }
}

#[test]
fn test_process_content_without_links_warns() {
    let mut pipeline = setup();

    let report = pipeline.process_content("just some words, nothing clickable");

    assert!(report.saved.is_empty());
    assert_eq!(report.notifications.len(), 1);
    assert_eq!(report.notifications[0].kind, NotificationKind::Warning);
    assert_eq!(report.notifications[0].title, "No links found");
    assert!(pipeline.store().get_all().unwrap().is_empty());
}

#[test]
fn test_processed_links_carry_preview_metadata() {
    let mut pipeline = setup();

    let report = pipeline.process_content("see https://example.com/rust-release-notes");

    assert_eq!(report.saved.len(), 1);
    let link = &report.saved[0];
    assert_eq!(link.title, "Rust Release Notes — example.com");
    assert_eq!(link.description, "Content from example.com");
    assert!(!link.categories.is_empty());
}

#[test]
fn test_processed_links_are_categorized() {
    let mut pipeline = setup();

    // Preview derives "Programming Tech Course" from the path, which the
    // categorizer scores for Technology
    let report = pipeline.process_content("https://example.com/programming-tech-course");

    assert_eq!(report.saved.len(), 1);
    assert!(report.saved[0]
        .categories
        .contains(&"Technology".to_string()));
}

#[test]
fn test_links_without_topic_signal_are_uncategorized() {
    let mut pipeline = setup();

    let report = pipeline.process_content("https://qwzx.example");

    assert_eq!(report.saved.len(), 1);
    assert_eq!(report.saved[0].categories, vec!["Uncategorized"]);
}

#[test]
fn test_duplicate_url_in_one_drop_is_processed_once() {
    let mut pipeline = setup();

    let report =
        pipeline.process_content("both https://a.com/page and https://a.com/page again");

    assert_eq!(report.saved.len(), 1);
    assert_eq!(pipeline.store().get_all().unwrap().len(), 1);
}

#[test]
fn test_second_drop_of_same_url_merges() {
    let mut pipeline = setup();

    let first = pipeline.process_content("https://a.com/page");
    let second = pipeline.process_content("more context https://a.com/page here");

    assert_eq!(first.saved.len(), 1);
    assert_eq!(second.saved.len(), 1);
    assert_eq!(second.saved[0].id, first.saved[0].id);
    assert_eq!(pipeline.store().get_all().unwrap().len(), 1);
}

#[test]
fn test_success_message_names_the_link_title() {
    let mut pipeline = setup();

    let report = pipeline.process_content("https://example.com/weekly-digest");

    assert_eq!(report.notifications.len(), 1);
    assert_eq!(
        report.notifications[0].message,
        "\"Weekly Digest — example.com\" has been added to your collection."
    );
}

#[test]
fn test_report_preserves_processing_order() {
    let mut pipeline = setup();

    let report = pipeline.process_content(
        "first https://b.org/one then https://a.org/two then https://c.net/three",
    );

    let urls: Vec<&str> = report.saved.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["https://b.org/one", "https://a.org/two", "https://c.net/three"]
    );
}

#[test]
fn test_empty_content_warns_and_saves_nothing() {
    let mut pipeline = setup();

    let report = pipeline.process_content("");

    assert!(report.saved.is_empty());
    assert_eq!(report.notifications.len(), 1);
    assert_eq!(report.notifications[0].kind, NotificationKind::Warning);
}
