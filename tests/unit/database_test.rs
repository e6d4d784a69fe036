//! Unit tests for the database layer (connection + migrations).

use linkstash::database::Database;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_all_tables() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    let expected_tables = ["links", "link_categories", "api_configs"];

    for table in &expected_tables {
        let exists: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .unwrap_or(false);
        assert!(exists, "Table '{}' should exist after migrations", table);
    }
}

#[test]
fn test_migrations_create_indexes() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    let expected_indexes = [
        "idx_links_url",
        "idx_links_created_at",
        "idx_links_updated_at",
        "idx_link_categories_category",
        "idx_api_configs_provider",
        "idx_api_configs_name",
        "idx_api_configs_is_default",
        "idx_api_configs_created_at",
        "idx_api_configs_updated_at",
    ];

    for index in &expected_indexes {
        let exists: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='index' AND name=?1",
                [index],
                |row| row.get(0),
            )
            .unwrap_or(false);
        assert!(exists, "Index '{}' should exist after migrations", index);
    }
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    // Running migrations a second time should not fail
    let result = linkstash::database::migrations::run_all(db.connection());
    assert!(result.is_ok(), "Running migrations twice should succeed (idempotent)");
}

#[test]
fn test_schema_version_reaches_current() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let version = linkstash::database::migrations::get_schema_version(db.connection());
    assert_eq!(version, linkstash::database::migrations::CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_open_file_database() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let db_path = dir.path().join("test.db");

    let db = Database::open(&db_path);
    assert!(db.is_ok(), "open with file path should succeed");

    // Verify the file was created
    assert!(db_path.exists(), "Database file should exist on disk");
}

#[test]
fn test_links_table_schema() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    conn.execute(
        "INSERT INTO links (id, url, title, description, image_url, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, NULL, 1700000000000, 1700000000000)",
        ["ln-1", "https://example.com", "Example", "A site"],
    )
    .expect("Should be able to insert into links table");

    let (url, title): (String, String) = conn
        .query_row(
            "SELECT url, title FROM links WHERE id = ?1",
            ["ln-1"],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("Should be able to query links");

    assert_eq!(url, "https://example.com");
    assert_eq!(title, "Example");
}

#[test]
fn test_links_url_unique_constraint() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    conn.execute(
        "INSERT INTO links (id, url, title, description, created_at, updated_at)
         VALUES ('ln-1', 'https://example.com', 'First', '', 1700000000000, 1700000000000)",
        [],
    )
    .expect("Should insert first link");

    let result = conn.execute(
        "INSERT INTO links (id, url, title, description, created_at, updated_at)
         VALUES ('ln-2', 'https://example.com', 'Second', '', 1700000000000, 1700000000000)",
        [],
    );
    assert!(result.is_err(), "Duplicate URL should violate UNIQUE constraint");
}

#[test]
fn test_link_categories_cascade_on_delete() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    conn.execute(
        "INSERT INTO links (id, url, title, description, created_at, updated_at)
         VALUES ('ln-1', 'https://example.com', 'Example', '', 1700000000000, 1700000000000)",
        [],
    )
    .expect("Should insert link");
    conn.execute(
        "INSERT INTO link_categories (link_id, position, category) VALUES ('ln-1', 0, 'Technology')",
        [],
    )
    .expect("Should insert category row");

    conn.execute("DELETE FROM links WHERE id = 'ln-1'", [])
        .expect("Should delete link");

    let remaining: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM link_categories WHERE link_id = 'ln-1'",
            [],
            |row| row.get(0),
        )
        .expect("Should count category rows");
    assert_eq!(remaining, 0, "Category rows should cascade with the link");
}

#[test]
fn test_api_configs_table_schema() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    conn.execute(
        "INSERT INTO api_configs (id, provider, name, encrypted_api_key, iv, auth_tag,
                                  model, endpoint, additional_params, is_default, created_at, updated_at)
         VALUES ('cfg-1', 'openai', 'Work', X'DEADBEEF', X'AABB', X'CCDD',
                 'gpt-4', NULL, NULL, 1, 1700000000000, 1700000000000)",
        [],
    )
    .expect("Should insert into api_configs");

    let (provider, is_default): (String, i64) = conn
        .query_row(
            "SELECT provider, is_default FROM api_configs WHERE id = 'cfg-1'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("Should query api_configs");

    assert_eq!(provider, "openai");
    assert_eq!(is_default, 1);
}
