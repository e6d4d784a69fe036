//! Link extraction from freeform dropped or pasted content.
//!
//! Scans plain text or HTML markup for URL-like substrings and returns the
//! unique, validated URLs in first-seen order.

use regex::Regex;
use url::Url;

/// Trait defining link extraction operations.
pub trait LinkExtractorTrait {
    fn extract(&self, content: &str) -> Vec<String>;
}

/// Regex-backed URL scanner.
pub struct LinkExtractor {
    finder: Regex,
}

/// Characters that end a sentence rather than a URL when trailing.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '\'', '"'];

impl LinkExtractor {
    pub fn new() -> Self {
        // Candidates stop at whitespace, quotes, and angle brackets so URLs
        // embedded in HTML attributes or tags terminate cleanly.
        let finder = Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"']+"#)
            .expect("URL pattern is valid");
        Self { finder }
    }

    /// Trims sentence punctuation from the end of a candidate.
    fn trim_candidate(candidate: &str) -> &str {
        candidate.trim_end_matches(TRAILING_PUNCTUATION)
    }

    /// Normalizes a candidate to a parseable URL string.
    ///
    /// Bare `www.` hosts get an `http://` scheme, matching how the dropped
    /// text would resolve in a browser address bar.
    fn normalize(candidate: &str) -> String {
        if candidate.len() >= 4 && candidate[..4].eq_ignore_ascii_case("www.") {
            format!("http://{}", candidate)
        } else {
            candidate.to_string()
        }
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkExtractorTrait for LinkExtractor {
    /// Extracts unique URLs from the content, in first-seen order.
    ///
    /// Empty or linkless input yields an empty vec, never an error.
    fn extract(&self, content: &str) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut urls = Vec::new();

        for m in self.finder.find_iter(content) {
            let candidate = Self::trim_candidate(m.as_str());
            if candidate.is_empty() {
                continue;
            }

            let normalized = Self::normalize(candidate);
            if Url::parse(&normalized).is_err() {
                continue;
            }

            if seen.insert(normalized.clone()) {
                urls.push(normalized);
            }
        }

        urls
    }
}
