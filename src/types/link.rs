use serde::{Deserialize, Serialize};

/// A saved link record.
///
/// `url` is the natural dedup key: the store keeps at most one record per
/// distinct URL. `categories` is never empty — records without a topic signal
/// carry `["Uncategorized"]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub categories: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Payload for saving a link.
///
/// Optional fields left out (or empty) keep the stored values when the URL
/// already exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkInput {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub categories: Option<Vec<String>>,
}

/// Category label applied when no topic signal is found.
pub const UNCATEGORIZED: &str = "Uncategorized";
