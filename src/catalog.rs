//! Static article catalog.
//!
//! The catalog is an ordered, immutable list of articles loaded once at
//! startup from a TOML resource (embedded by default, or a user-supplied
//! file). The article title is the lookup key for both bookmarking and
//! detail content, so duplicate titles are rejected at load time.
//!
//! Lookup is a total function: a missing title resolves to a named fallback
//! (`Resolved::Fallback`) instead of an error, keeping the detail screen
//! always renderable.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Fallback Policy
// ============================================================================

/// Body text shown when a requested title has no catalog entry.
pub const FALLBACK_BODY: &str = "default content";

/// Publish date shown when a requested title has no catalog entry.
pub const FALLBACK_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 3, 1) {
    Some(d) => d,
    None => panic!("fallback date is not a valid calendar date"),
};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Titles act as identifiers; a duplicate would make lookup ambiguous.
    #[error("Duplicate article title in catalog: \"{0}\"")]
    DuplicateTitle(String),
}

// ============================================================================
// Article
// ============================================================================

/// A single news article. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    /// Unique title — acts as the article's identifier.
    pub title: String,
    /// Full body text.
    pub body: String,
    /// Publish date (ISO date in the TOML source).
    pub published: NaiveDate,
}

/// On-disk shape of the catalog resource.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    article: Vec<Article>,
    /// UI label table (e.g. "news_feed" → "News Feed").
    #[serde(default)]
    labels: HashMap<String, String>,
}

// ============================================================================
// Lookup Result
// ============================================================================

/// Result of resolving a title against the catalog.
///
/// This is a total lookup: a miss yields `Fallback` rather than an error,
/// with the placeholder body and date from the fallback policy constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// The title matched a catalog entry.
    Found(&'a Article),
    /// No catalog entry — placeholder content applies.
    Fallback,
}

impl Resolved<'_> {
    /// Body text to display.
    pub fn body(&self) -> &str {
        match self {
            Self::Found(article) => &article.body,
            Self::Fallback => FALLBACK_BODY,
        }
    }

    /// Publish date to display.
    pub fn published(&self) -> NaiveDate {
        match self {
            Self::Found(article) => article.published,
            Self::Fallback => FALLBACK_DATE,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Ordered, read-only set of articles plus the UI label table.
#[derive(Debug, Clone)]
pub struct Catalog {
    articles: Vec<Article>,
    /// Title → position in `articles`, for O(1) lookup.
    index: HashMap<String, usize>,
    labels: HashMap<String, String>,
}

impl Catalog {
    /// Build the catalog from the embedded resource.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(include_str!("../assets/articles.toml"))
    }

    /// Load a catalog from a user-supplied TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            articles = catalog.len(),
            "Loaded article catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from TOML text, rejecting duplicate titles.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;

        let mut index = HashMap::with_capacity(file.article.len());
        for (i, article) in file.article.iter().enumerate() {
            if index.insert(article.title.clone(), i).is_some() {
                return Err(CatalogError::DuplicateTitle(article.title.clone()));
            }
        }

        Ok(Self {
            articles: file.article,
            index,
            labels: file.labels,
        })
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Articles in catalog order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Exact lookup by title.
    pub fn get(&self, title: &str) -> Option<&Article> {
        self.index.get(title).map(|&i| &self.articles[i])
    }

    /// Total lookup by title — a miss yields the fallback, never an error.
    pub fn resolve(&self, title: &str) -> Resolved<'_> {
        match self.get(title) {
            Some(article) => Resolved::Found(article),
            None => Resolved::Fallback,
        }
    }

    /// Look up a UI label, falling back to the key itself on a miss.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }
}

/// Format a date the way the detail screen shows it, e.g. "March 14, 2025".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_article_toml() -> &'static str {
        r#"
[labels]
news_feed = "News Feed"

[[article]]
title = "First"
published = "2025-03-14"
body = "first body"

[[article]]
title = "Second"
published = "2025-03-12"
body = "second body"
"#
    }

    #[test]
    fn parses_articles_in_order() {
        let catalog = Catalog::from_toml_str(two_article_toml()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.articles()[0].title, "First");
        assert_eq!(catalog.articles()[1].title, "Second");
    }

    #[test]
    fn get_returns_paired_body_and_date() {
        let catalog = Catalog::from_toml_str(two_article_toml()).unwrap();
        let article = catalog.get("Second").unwrap();
        assert_eq!(article.body, "second body");
        assert_eq!(
            article.published,
            NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
        );
    }

    #[test]
    fn resolve_hit_is_found() {
        let catalog = Catalog::from_toml_str(two_article_toml()).unwrap();
        let resolved = catalog.resolve("First");
        assert!(!resolved.is_fallback());
        assert_eq!(resolved.body(), "first body");
    }

    #[test]
    fn resolve_miss_yields_exact_fallback() {
        let catalog = Catalog::from_toml_str(two_article_toml()).unwrap();
        let resolved = catalog.resolve("No Such Headline");
        assert!(resolved.is_fallback());
        assert_eq!(resolved.body(), "default content");
        assert_eq!(format_long_date(resolved.published()), "March 1, 2025");
    }

    #[test]
    fn duplicate_titles_rejected() {
        let toml = r#"
[[article]]
title = "Same"
published = "2025-03-14"
body = "a"

[[article]]
title = "Same"
published = "2025-03-12"
body = "b"
"#;
        let err = Catalog::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTitle(t) if t == "Same"));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.resolve("anything").is_fallback());
    }

    #[test]
    fn invalid_date_is_parse_error() {
        let toml = r#"
[[article]]
title = "Bad"
published = "not a date"
body = "x"
"#;
        assert!(matches!(
            Catalog::from_toml_str(toml),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn label_hit_and_miss() {
        let catalog = Catalog::from_toml_str(two_article_toml()).unwrap();
        assert_eq!(catalog.label("news_feed"), "News Feed");
        // Miss falls back to the key itself, consistent with the app's
        // silent-fallback policy.
        assert_eq!(catalog.label("unknown_label"), "unknown_label");
    }

    #[test]
    fn builtin_catalog_loads_with_ten_unique_titles() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 10);
        for article in catalog.articles() {
            assert_eq!(
                catalog.get(&article.title).map(|a| a.published),
                Some(article.published)
            );
        }
        assert_eq!(catalog.label("news_feed"), "News Feed");
        assert_eq!(catalog.label("published_on"), "Published on");
    }

    #[test]
    fn long_date_format_matches_detail_screen() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(format_long_date(date), "March 14, 2025");
    }
}
