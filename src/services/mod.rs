// Services: the processing stages between raw dropped content and the store,
// plus crypto and the static provider catalog.

pub mod api_providers;
pub mod categorizer;
pub mod crypto_service;
pub mod ingest;
pub mod link_extractor;
pub mod preview_generator;
