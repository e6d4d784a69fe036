//! Preview metadata generation for links.
//!
//! Derives a display title and description from the URL itself. A production
//! deployment would call an external metadata service here; the derivation
//! below stands in for that call, so the rest of the pipeline is exercised
//! with realistic values.

use url::Url;

use crate::types::errors::PreviewError;
use crate::types::preview::LinkPreview;

/// Trait defining preview generation operations.
pub trait PreviewGeneratorTrait {
    fn preview(&self, url: &str) -> LinkPreview;
}

/// Preview generator deriving metadata from URL structure.
pub struct PreviewGenerator;

impl PreviewGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Turns a path segment like "rust-release-notes" into "Rust Release Notes".
    fn humanize_segment(segment: &str) -> String {
        segment
            .split(|c| c == '-' || c == '_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Strips a file extension from the last path segment.
    fn strip_extension(segment: &str) -> &str {
        match segment.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => segment,
        }
    }

    fn derive(&self, raw: &str) -> Result<LinkPreview, PreviewError> {
        let url = Url::parse(raw).map_err(|_| PreviewError::InvalidUrl(raw.to_string()))?;
        let host = url
            .host_str()
            .ok_or_else(|| PreviewError::InvalidUrl(raw.to_string()))?;
        let host = host.strip_prefix("www.").unwrap_or(host);

        let last_segment = url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(Self::strip_extension)
            .map(Self::humanize_segment)
            .filter(|s| !s.is_empty());

        let title = match last_segment {
            Some(segment) => format!("{} — {}", segment, host),
            None => host.to_string(),
        };

        Ok(LinkPreview {
            title,
            description: format!("Content from {}", host),
            image_url: None,
        })
    }
}

impl Default for PreviewGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewGeneratorTrait for PreviewGenerator {
    /// Produces preview metadata for a URL.
    ///
    /// Never fails: malformed URLs yield the "Unknown Content" fallback.
    fn preview(&self, url: &str) -> LinkPreview {
        self.derive(url).unwrap_or_else(|_| LinkPreview::unknown())
    }
}
