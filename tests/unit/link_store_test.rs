//! Unit tests for the LinkStore public API.
//!
//! These tests exercise save/merge, lookup, delete, search, and clustering
//! through the `LinkStoreTrait` interface, using an in-memory SQLite database.

use std::sync::Arc;

use linkstash::database::Database;
use linkstash::stores::link_store::{LinkStore, LinkStoreTrait};
use linkstash::types::link::LinkInput;

/// Helper: create a LinkStore backed by a fresh in-memory database.
fn setup() -> LinkStore {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    LinkStore::new(Arc::new(db))
}

fn input(url: &str, title: &str) -> LinkInput {
    LinkInput {
        url: url.to_string(),
        title: title.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_save_inserts_new_link() {
    let mut store = setup();

    let link = store
        .save(input("https://example.com", "Example"))
        .unwrap();

    assert!(!link.id.is_empty());
    assert_eq!(link.url, "https://example.com");
    assert_eq!(link.title, "Example");
    assert_eq!(link.created_at, link.updated_at);
    assert_eq!(store.get_all().unwrap().len(), 1);
}

#[test]
fn test_save_defaults_categories_to_uncategorized() {
    let mut store = setup();

    let link = store.save(input("https://example.com", "Example")).unwrap();
    assert_eq!(link.categories, vec!["Uncategorized"]);

    // An explicitly empty list is also "no signal"
    let link = store
        .save(LinkInput {
            url: "https://other.com".to_string(),
            title: "Other".to_string(),
            categories: Some(vec![]),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(link.categories, vec!["Uncategorized"]);
}

#[test]
fn test_save_duplicate_url_merges_instead_of_inserting() {
    let mut store = setup();

    let first = store.save(input("https://a.com", "A")).unwrap();
    let second = store.save(input("https://a.com", "B")).unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.title, "B");
    assert_eq!(store.get_all().unwrap().len(), 1);

    let stored = store.get_by_id(&first.id).unwrap().unwrap();
    assert_eq!(stored.title, "B");
}

#[test]
fn test_save_merge_keeps_existing_fields_when_input_empty() {
    let mut store = setup();

    store
        .save(LinkInput {
            url: "https://a.com".to_string(),
            title: "Original".to_string(),
            description: Some("Original description".to_string()),
            image_url: Some("https://a.com/thumb.png".to_string()),
            categories: Some(vec!["Technology".to_string()]),
        })
        .unwrap();

    // Empty title, no description/image/categories: everything kept
    let merged = store.save(input("https://a.com", "")).unwrap();

    assert_eq!(merged.title, "Original");
    assert_eq!(merged.description, "Original description");
    assert_eq!(merged.image_url.as_deref(), Some("https://a.com/thumb.png"));
    assert_eq!(merged.categories, vec!["Technology"]);
}

#[test]
fn test_save_merge_preserves_id_and_created_at() {
    let mut store = setup();

    let first = store.save(input("https://a.com", "A")).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let merged = store.save(input("https://a.com", "A")).unwrap();

    assert_eq!(merged.id, first.id);
    assert_eq!(merged.created_at, first.created_at);
    assert!(merged.updated_at > first.updated_at);
}

#[test]
fn test_save_merge_replaces_categories_when_provided() {
    let mut store = setup();

    store
        .save(LinkInput {
            url: "https://a.com".to_string(),
            title: "A".to_string(),
            categories: Some(vec!["Technology".to_string()]),
            ..Default::default()
        })
        .unwrap();

    let merged = store
        .save(LinkInput {
            url: "https://a.com".to_string(),
            title: String::new(),
            categories: Some(vec!["Science".to_string(), "Education".to_string()]),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(merged.categories, vec!["Science", "Education"]);
}

#[test]
fn test_get_by_id_unknown_returns_none() {
    let store = setup();
    assert!(store.get_by_id("no-such-id").unwrap().is_none());
}

#[test]
fn test_categories_round_trip_in_order() {
    let mut store = setup();

    let categories = vec![
        "Travel".to_string(),
        "Food".to_string(),
        "Art".to_string(),
    ];
    let link = store
        .save(LinkInput {
            url: "https://a.com".to_string(),
            title: "A".to_string(),
            categories: Some(categories.clone()),
            ..Default::default()
        })
        .unwrap();

    let stored = store.get_by_id(&link.id).unwrap().unwrap();
    assert_eq!(stored.categories, categories);
}

#[test]
fn test_delete_removes_link() {
    let mut store = setup();

    let link = store.save(input("https://a.com", "A")).unwrap();
    store.delete(&link.id).unwrap();

    assert!(store.get_by_id(&link.id).unwrap().is_none());
    assert!(store.get_all().unwrap().is_empty());
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut store = setup();

    store.save(input("https://a.com", "A")).unwrap();
    store.delete("no-such-id").unwrap();
    // Deleting the same unknown id twice is equally fine
    store.delete("no-such-id").unwrap();

    assert_eq!(store.get_all().unwrap().len(), 1);
}

#[test]
fn test_delete_removes_category_rows() {
    let mut store = setup();

    let link = store
        .save(LinkInput {
            url: "https://a.com".to_string(),
            title: "A".to_string(),
            categories: Some(vec!["Technology".to_string()]),
            ..Default::default()
        })
        .unwrap();
    store.delete(&link.id).unwrap();

    let clusters = store.cluster_by_category().unwrap();
    assert!(clusters.is_empty());
}

#[test]
fn test_search_matches_title_description_url_and_category() {
    let mut store = setup();

    store
        .save(LinkInput {
            url: "https://rust-lang.org".to_string(),
            title: "Rust".to_string(),
            description: Some("systems programming".to_string()),
            categories: Some(vec!["Technology".to_string()]),
            ..Default::default()
        })
        .unwrap();
    store
        .save(LinkInput {
            url: "https://espn.com".to_string(),
            title: "Scores".to_string(),
            description: Some("match results".to_string()),
            categories: Some(vec!["Sports".to_string()]),
            ..Default::default()
        })
        .unwrap();

    // Title hit
    assert_eq!(store.search("Rust").unwrap().len(), 1);
    // Description hit
    assert_eq!(store.search("programming").unwrap().len(), 1);
    // URL hit
    assert_eq!(store.search("espn").unwrap().len(), 1);
    // Category hit
    assert_eq!(store.search("Sports").unwrap().len(), 1);
    // No hit
    assert!(store.search("nonexistent").unwrap().is_empty());
}

#[test]
fn test_search_is_case_insensitive() {
    let mut store = setup();

    store.save(input("https://rust-lang.org", "Rust Language")).unwrap();

    assert_eq!(store.search("rust").unwrap().len(), 1);
    assert_eq!(store.search("RUST").unwrap().len(), 1);
}

#[test]
fn test_search_empty_query_returns_all() {
    let mut store = setup();

    store.save(input("https://a.com", "A")).unwrap();
    store.save(input("https://b.com", "B")).unwrap();

    let all = store.get_all().unwrap();
    let searched = store.search("").unwrap();
    assert_eq!(searched.len(), all.len());

    let mut all_ids: Vec<String> = all.into_iter().map(|l| l.id).collect();
    let mut searched_ids: Vec<String> = searched.into_iter().map(|l| l.id).collect();
    all_ids.sort();
    searched_ids.sort();
    assert_eq!(searched_ids, all_ids);
}

#[test]
fn test_cluster_by_category_groups_links() {
    let mut store = setup();

    store
        .save(LinkInput {
            url: "https://a.com".to_string(),
            title: "A".to_string(),
            categories: Some(vec!["Technology".to_string(), "Science".to_string()]),
            ..Default::default()
        })
        .unwrap();
    store
        .save(LinkInput {
            url: "https://b.com".to_string(),
            title: "B".to_string(),
            categories: Some(vec!["Technology".to_string()]),
            ..Default::default()
        })
        .unwrap();

    let clusters = store.cluster_by_category().unwrap();
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters["Technology"].len(), 2);
    assert_eq!(clusters["Science"].len(), 1);
}

#[test]
fn test_cluster_link_appears_once_per_category() {
    let mut store = setup();

    let link = store
        .save(LinkInput {
            url: "https://a.com".to_string(),
            title: "A".to_string(),
            categories: Some(vec![
                "Travel".to_string(),
                "Food".to_string(),
                "Art".to_string(),
            ]),
            ..Default::default()
        })
        .unwrap();

    let clusters = store.cluster_by_category().unwrap();
    let appearances: usize = clusters
        .values()
        .map(|links| links.iter().filter(|l| l.id == link.id).count())
        .sum();
    assert_eq!(appearances, 3);
}

#[test]
fn test_cluster_uncategorized_default_forms_its_own_group() {
    let mut store = setup();

    store.save(input("https://a.com", "A")).unwrap();

    let clusters = store.cluster_by_category().unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters["Uncategorized"].len(), 1);
}
