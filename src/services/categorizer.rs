//! Keyword-scoring topic categorization.
//!
//! Scores a closed set of topic categories against a link's title,
//! description, and URL. This simulates what a hosted model would return;
//! swapping in a real provider happens behind the same trait.

use crate::types::link::UNCATEGORIZED;

/// Maximum number of labels returned for a single link.
const MAX_CATEGORIES: usize = 3;

/// The candidate categories and their keywords, in definition order.
///
/// Definition order is the tie-break when scores are equal, so reordering
/// entries changes observable output.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Technology",
        &[
            "tech", "software", "hardware", "programming", "code", "developer", "app", "digital",
            "computer", "internet", "web", "mobile", "ai", "artificial intelligence",
            "machine learning",
        ],
    ),
    (
        "Science",
        &[
            "science", "research", "study", "experiment", "discovery", "physics", "chemistry",
            "biology", "astronomy", "space", "laboratory", "scientist",
        ],
    ),
    (
        "Health",
        &[
            "health", "medical", "medicine", "doctor", "hospital", "wellness", "fitness", "diet",
            "exercise", "nutrition", "disease", "treatment", "therapy",
        ],
    ),
    (
        "Business",
        &[
            "business", "company", "corporate", "startup", "entrepreneur", "market", "industry",
            "economy", "finance", "investment", "stock", "trade", "commerce",
        ],
    ),
    (
        "Entertainment",
        &[
            "entertainment", "movie", "film", "tv", "television", "show", "celebrity", "actor",
            "actress", "music", "concert", "festival", "performance",
        ],
    ),
    (
        "Sports",
        &[
            "sports", "game", "player", "team", "coach", "athlete", "championship", "tournament",
            "match", "competition", "football", "basketball", "soccer", "baseball", "tennis",
        ],
    ),
    (
        "Politics",
        &[
            "politics", "government", "policy", "election", "president", "minister", "parliament",
            "congress", "senate", "democrat", "republican", "law", "legislation",
        ],
    ),
    (
        "Education",
        &[
            "education", "school", "university", "college", "student", "teacher", "professor",
            "academic", "learning", "course", "degree", "study", "classroom",
        ],
    ),
    (
        "Travel",
        &[
            "travel", "tourism", "vacation", "holiday", "destination", "hotel", "resort",
            "flight", "airline", "tour", "trip", "adventure", "explore", "journey",
        ],
    ),
    (
        "Food",
        &[
            "food", "recipe", "cooking", "chef", "restaurant", "cuisine", "meal", "dish",
            "ingredient", "baking", "dessert", "drink", "beverage", "taste", "flavor",
        ],
    ),
    (
        "Art",
        &[
            "art", "artist", "painting", "sculpture", "gallery", "museum", "exhibition",
            "creative", "design", "drawing", "photography", "illustration", "visual",
        ],
    ),
    (
        "Fashion",
        &[
            "fashion", "style", "clothing", "dress", "outfit", "designer", "model", "trend",
            "collection", "runway", "brand", "accessory", "textile", "wear",
        ],
    ),
    (
        "Environment",
        &[
            "environment", "climate", "green", "sustainable", "eco", "nature", "conservation",
            "renewable", "pollution", "recycle", "biodiversity", "earth", "planet",
        ],
    ),
    (
        "Finance",
        &[
            "finance", "money", "banking", "investment", "stock", "market", "fund", "asset",
            "wealth", "budget", "tax", "loan", "credit", "debt", "currency",
        ],
    ),
    (
        "Gaming",
        &[
            "gaming", "game", "player", "console", "pc", "video game", "esports", "multiplayer",
            "strategy", "rpg", "fps", "mmorpg", "developer", "studio",
        ],
    ),
];

/// Trait defining categorization operations.
pub trait CategorizerTrait {
    fn categorize(&self, url: &str, title: &str, description: &str) -> Vec<String>;
}

/// Keyword-overlap categorizer over the fixed catalog.
pub struct Categorizer;

impl Categorizer {
    pub fn new() -> Self {
        Self
    }

    /// Names of the candidate categories, in definition order.
    pub fn category_names(&self) -> Vec<&'static str> {
        CATEGORY_KEYWORDS.iter().map(|(name, _)| *name).collect()
    }

    /// Lowercases, strips punctuation, and splits on whitespace.
    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c
                } else {
                    ' '
                }
            })
            .collect::<String>()
            .split_whitespace()
            .map(|word| word.to_string())
            .collect()
    }

    fn score_category(keywords: &[&str], tokens: &[String], content: &str, url: &str) -> f64 {
        let mut score = 0.0;

        for keyword in keywords {
            if keyword.contains(' ') {
                // Multi-word phrases match as substrings of the raw content
                if content.contains(keyword) {
                    score += 2.0;
                }
            } else if tokens.iter().any(|token| token == keyword) {
                score += 1.0;
            }
        }

        // URL hits are a weaker signal than body text
        for keyword in keywords {
            if url.contains(keyword) {
                score += 0.5;
            }
        }

        score
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorizerTrait for Categorizer {
    /// Returns 1–3 topic labels for the link, best match first.
    ///
    /// Ties keep catalog definition order. Links with no keyword signal get
    /// `["Uncategorized"]`; this function never fails and never returns an
    /// empty vec.
    fn categorize(&self, url: &str, title: &str, description: &str) -> Vec<String> {
        let content = format!("{} {}", title, description).to_lowercase();
        let url_lower = url.to_lowercase();
        let tokens = Self::tokenize(&content);

        let mut scored: Vec<(&str, f64)> = CATEGORY_KEYWORDS
            .iter()
            .map(|(name, keywords)| {
                (
                    *name,
                    Self::score_category(keywords, &tokens, &content, &url_lower),
                )
            })
            .collect();

        // Stable sort: equal scores keep catalog order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let top: Vec<String> = scored
            .into_iter()
            .filter(|(_, score)| *score > 0.0)
            .take(MAX_CATEGORIES)
            .map(|(name, _)| name.to_string())
            .collect();

        if top.is_empty() {
            vec![UNCATEGORIZED.to_string()]
        } else {
            top
        }
    }
}
