//! linkstash — local-first link organizer core.
//!
//! Dropped or pasted content is scanned for URLs; each URL gets simulated
//! preview metadata, keyword-scored topic labels, and a dedup-by-URL save
//! into a local SQLite database. This library is the backend consumed by a
//! UI layer and by the integration tests.

pub mod app;
pub mod database;
pub mod services;
pub mod stores;
pub mod types;
