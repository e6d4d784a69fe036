use serde::{Deserialize, Serialize};

/// Display metadata derived for a URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkPreview {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl LinkPreview {
    /// Fallback preview for URLs that cannot be resolved to anything useful.
    pub fn unknown() -> Self {
        Self {
            title: "Unknown Content".to_string(),
            description: String::new(),
            image_url: None,
        }
    }
}
