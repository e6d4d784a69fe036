//! App core.
//!
//! Central struct wiring the shared database handle into the stores and the
//! ingest pipeline. Components receive the handle explicitly; there is no
//! process-wide database singleton.

use std::sync::Arc;

use crate::database::Database;
use crate::services::ingest::IngestPipeline;
use crate::stores::api_config_store::ApiConfigStore;
use crate::stores::link_store::LinkStore;

/// Central application struct holding the stores and the ingest pipeline.
pub struct App {
    pub db: Arc<Database>,
    pub api_configs: ApiConfigStore,
    pub ingest: IngestPipeline,
}

impl App {
    /// Creates a new App, opening the database (and running migrations) at
    /// the given path. Use ":memory:" for a throwaway instance.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);

        let api_configs = ApiConfigStore::new(db.clone())
            .map_err(|e| format!("ApiConfigStore init failed: {}", e))?;
        let ingest = IngestPipeline::new(LinkStore::new(db.clone()));

        Ok(Self {
            db,
            api_configs,
            ingest,
        })
    }

    /// A link store over the same database, for callers that query links
    /// outside an ingest pass.
    pub fn link_store(&self) -> LinkStore {
        LinkStore::new(self.db.clone())
    }
}
