//! linkstash — local-first link organizer core.
//!
//! Entry point: runs an interactive console demo exercising every component
//! against an in-memory database.

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              linkstash v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║     Drop links in, get them previewed, labeled, stored     ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_extractor();
    demo_preview();
    demo_categorizer();
    demo_link_store();
    demo_api_configs();
    demo_ingest();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 8 components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database() {
    use linkstash::database::Database;
    section("Database Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_extractor() {
    use linkstash::services::link_extractor::{LinkExtractor, LinkExtractorTrait};
    section("Link Extractor");

    let extractor = LinkExtractor::new();

    let text = "Read https://blog.rust-lang.org/2024/05/02/announcement.html and \
                https://docs.rs (also https://blog.rust-lang.org/2024/05/02/announcement.html again), \
                or just www.rust-lang.org.";
    let urls = extractor.extract(text);
    println!("  Found {} unique URL(s) in plain text:", urls.len());
    for url in &urls {
        println!("    {}", url);
    }

    let html = r#"<p>See <a href="https://example.com/guide">the guide</a>.</p>"#;
    let html_urls = extractor.extract(html);
    println!("  Found in HTML: {:?}", html_urls);

    println!("  No-link input: {:?}", extractor.extract("nothing to see here"));
    println!("  ✓ LinkExtractor OK");
    println!();
}

fn demo_preview() {
    use linkstash::services::preview_generator::{PreviewGenerator, PreviewGeneratorTrait};
    section("Preview Generator");

    let previews = PreviewGenerator::new();

    let good = previews.preview("https://www.example.com/rust-release-notes");
    println!("  Title: {}", good.title);
    println!("  Description: {}", good.description);

    let bare = previews.preview("https://news.ycombinator.com");
    println!("  Host-only title: {}", bare.title);

    let bad = previews.preview("not a url at all");
    println!("  Malformed URL falls back to: \"{}\"", bad.title);
    println!("  ✓ PreviewGenerator OK");
    println!();
}

fn demo_categorizer() {
    use linkstash::services::categorizer::{Categorizer, CategorizerTrait};
    section("Categorizer");

    let categorizer = Categorizer::new();
    println!("  Catalog: {} categories", categorizer.category_names().len());

    let labels = categorizer.categorize(
        "https://learnrust.dev/course",
        "Learn programming",
        "A tech course about software and code",
    );
    println!("  'Learn programming' -> {:?}", labels);

    let sports = categorizer.categorize(
        "https://espn.com",
        "Championship game tonight",
        "The team faces its rival in the tournament final",
    );
    println!("  'Championship game' -> {:?}", sports);

    let none = categorizer.categorize("https://x.com", "", "");
    println!("  No signal -> {:?}", none);
    println!("  ✓ Categorizer OK");
    println!();
}

fn demo_link_store() {
    use std::sync::Arc;
    use linkstash::database::Database;
    use linkstash::stores::link_store::{LinkStore, LinkStoreTrait};
    use linkstash::types::link::LinkInput;
    section("Link Store");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut store = LinkStore::new(db);

    let first = store
        .save(LinkInput {
            url: "https://rust-lang.org".to_string(),
            title: "Rust".to_string(),
            description: Some("A language empowering everyone".to_string()),
            categories: Some(vec!["Technology".to_string()]),
            ..Default::default()
        })
        .unwrap();
    println!("  Saved link {} ({})", first.title, &first.id[..8]);

    let merged = store
        .save(LinkInput {
            url: "https://rust-lang.org".to_string(),
            title: "Rust Programming Language".to_string(),
            ..Default::default()
        })
        .unwrap();
    println!("  Duplicate save merged: title = {}, still {} record(s)",
        merged.title, store.get_all().unwrap().len());

    store
        .save(LinkInput {
            url: "https://espn.com/scores".to_string(),
            title: "Scores".to_string(),
            categories: Some(vec!["Sports".to_string(), "Entertainment".to_string()]),
            ..Default::default()
        })
        .unwrap();

    let results = store.search("rust").unwrap();
    println!("  Search 'rust': {} result(s)", results.len());

    let clusters = store.cluster_by_category().unwrap();
    println!("  Clusters: {} categories", clusters.len());
    for (category, links) in &clusters {
        println!("    {} -> {} link(s)", category, links.len());
    }

    store.delete(&first.id).unwrap();
    println!("  Deleted 1 link, remaining: {}", store.get_all().unwrap().len());
    println!("  ✓ LinkStore OK");
    println!();
}

fn demo_api_configs() {
    use std::sync::Arc;
    use linkstash::database::Database;
    use linkstash::services::api_providers;
    use linkstash::stores::api_config_store::{ApiConfigStore, ApiConfigStoreTrait};
    use linkstash::types::api_config::{ApiConfigInput, ProviderKind};
    section("API Config Store");

    let catalog = api_providers::providers();
    println!("  Provider catalog:");
    for provider in &catalog {
        println!("    {} — {} model(s)", provider.display_name, provider.models.len());
    }

    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut store = ApiConfigStore::new(db).unwrap();

    let id = store
        .add(ApiConfigInput {
            provider: ProviderKind::OpenAi,
            name: "Work account".to_string(),
            api_key: "sk-test-key-12345".to_string(),
            model: "gpt-4".to_string(),
            endpoint: None,
            additional_params: None,
            is_default: None,
        })
        .unwrap();
    println!("  Added config ({}) — first one becomes default", &id[..8]);

    let config = store.get_default().unwrap().unwrap();
    println!("  Default: {} / {} (key stored encrypted, decrypts to {} chars)",
        config.name, config.model, config.api_key.len());

    let test = store.test_connection(&ApiConfigInput {
        provider: ProviderKind::Custom,
        name: "Local".to_string(),
        api_key: "key".to_string(),
        model: "custom".to_string(),
        endpoint: None,
        additional_params: None,
        is_default: None,
    });
    println!("  Custom provider without endpoint: success={} ({})", test.success, test.message);
    println!("  ✓ ApiConfigStore OK");
    println!();
}

fn demo_ingest() {
    use std::sync::Arc;
    use linkstash::database::Database;
    use linkstash::services::ingest::{IngestPipeline, IngestPipelineTrait};
    use linkstash::stores::link_store::{LinkStore, LinkStoreTrait};
    section("Ingest Pipeline");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut pipeline = IngestPipeline::new(LinkStore::new(db));

    let report = pipeline.process_content(
        "Two finds today: https://www.nasa.gov/missions/artemis-program and \
         https://www.themoviedb.org/movie/popular — enjoy!",
    );
    println!("  Processed drop: {} link(s) saved", report.saved.len());
    for notification in &report.notifications {
        println!("    [{:?}] {}: {}", notification.kind, notification.title, notification.message);
    }
    for link in &report.saved {
        println!("    {} -> {:?}", link.url, link.categories);
    }

    let empty = pipeline.process_content("just some words");
    println!("  Linkless drop: {} notification(s), first = \"{}\"",
        empty.notifications.len(), empty.notifications[0].title);

    println!("  Store now holds {} link(s)", pipeline.store().get_all().unwrap().len());
    println!("  ✓ IngestPipeline OK");
    println!();
}

fn demo_app_core() {
    use linkstash::app::App;
    use linkstash::services::ingest::IngestPipelineTrait;
    use linkstash::stores::link_store::LinkStoreTrait;
    section("App Core (full lifecycle)");

    let mut app = App::new(":memory:").unwrap();
    println!("  Initialized App over one shared database handle");

    let report = app.ingest.process_content("Bookmark https://crates.io for later");
    println!("  Ingested {} link(s) through the app", report.saved.len());

    let store = app.link_store();
    println!("  Links visible through a second store: {}", store.get_all().unwrap().len());
    println!("  ✓ App Core OK");
}
