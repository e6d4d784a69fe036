//! Ingest pipeline for dropped or pasted content.
//!
//! Drives extract → preview → categorize → save for each URL found in one
//! drop/paste pass. Links are processed strictly one at a time; a failure in
//! one link is logged, turned into a notification, and never aborts the rest
//! of the batch.

use crate::services::categorizer::{Categorizer, CategorizerTrait};
use crate::services::link_extractor::{LinkExtractor, LinkExtractorTrait};
use crate::services::preview_generator::{PreviewGenerator, PreviewGeneratorTrait};
use crate::stores::link_store::{LinkStore, LinkStoreTrait};
use crate::types::link::{Link, LinkInput};
use crate::types::notification::{Notification, NotificationKind};

/// Outcome of one drop/paste pass.
#[derive(Debug)]
pub struct IngestReport {
    /// Links persisted during the pass, in processing order.
    pub saved: Vec<Link>,
    /// Messages for the (external) toast layer, in emission order.
    pub notifications: Vec<Notification>,
}

/// Trait defining ingest operations.
pub trait IngestPipelineTrait {
    fn process_content(&mut self, content: &str) -> IngestReport;
}

/// The extract → preview → categorize → save pipeline.
pub struct IngestPipeline {
    extractor: LinkExtractor,
    previews: PreviewGenerator,
    categorizer: Categorizer,
    store: LinkStore,
}

impl IngestPipeline {
    pub fn new(store: LinkStore) -> Self {
        Self {
            extractor: LinkExtractor::new(),
            previews: PreviewGenerator::new(),
            categorizer: Categorizer::new(),
            store,
        }
    }

    /// Read access to the underlying link store.
    pub fn store(&self) -> &LinkStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut LinkStore {
        &mut self.store
    }
}

impl IngestPipelineTrait for IngestPipeline {
    fn process_content(&mut self, content: &str) -> IngestReport {
        let urls = self.extractor.extract(content);

        if urls.is_empty() {
            return IngestReport {
                saved: Vec::new(),
                notifications: vec![Notification::new(
                    "No links found",
                    "The dropped content does not contain any valid links.".to_string(),
                    NotificationKind::Warning,
                )],
            };
        }

        let mut saved = Vec::new();
        let mut notifications = Vec::new();

        for url in urls {
            let preview = self.previews.preview(&url);
            let categories =
                self.categorizer
                    .categorize(&url, &preview.title, &preview.description);

            let title = if preview.title.is_empty() {
                "Untitled".to_string()
            } else {
                preview.title
            };

            let input = LinkInput {
                url: url.clone(),
                title,
                description: Some(preview.description),
                image_url: preview.image_url,
                categories: Some(categories),
            };

            match self.store.save(input) {
                Ok(link) => {
                    notifications.push(Notification::new(
                        "Link saved",
                        format!("\"{}\" has been added to your collection.", link.title),
                        NotificationKind::Success,
                    ));
                    saved.push(link);
                }
                Err(err) => {
                    tracing::warn!(url = %url, error = %err, "failed to process link");
                    notifications.push(Notification::new(
                        "Error",
                        format!("Failed to process link: {}", url),
                        NotificationKind::Error,
                    ));
                }
            }
        }

        IngestReport {
            saved,
            notifications,
        }
    }
}
