//! Core types for seedkit-core.
//!
//! This module defines the canonical [`Article`] shared across all layers, its
//! [`ArticleKind`] discriminant, and the validation errors raised when an
//! article is built by hand.
//!
//! # Invariants
//! - `id` is strictly positive (enforced by [`ArticleId`]).
//! - `title` is non-empty after trimming.
//! - `slug` is always `slugify_for(kind, title)`; there is no setter for it.

use crate::slug::slugify_for;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

/// Stable article identifier. Zero is unrepresentable.
pub type ArticleId = NonZeroU64;

/// Title used by the normaliser when a row has none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Author used by the normaliser when a row has none.
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// Which slug rules apply to an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleKind {
    #[default]
    Standard,
    /// Slug carries the `featured-` prefix.
    Featured,
}

impl std::fmt::Display for ArticleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleKind::Standard => write!(f, "standard"),
            ArticleKind::Featured => write!(f, "featured"),
        }
    }
}

/// Rejected hand-built article data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArticleError {
    #[error("article title is required")]
    EmptyTitle,
    #[error("article tag cannot be empty")]
    EmptyTag,
}

/// Canonical article record.
///
/// Fields are private so the title/slug pair can never drift apart. Build one
/// with [`Article::new`] (or [`Article::featured`]) and adjust it with the
/// setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleRecord", into = "ArticleRecord")]
pub struct Article {
    id: ArticleId,
    kind: ArticleKind,
    title: String,
    slug: String,
    excerpt: String,
    views: u64,
    published: bool,
    author: String,
    tags: Vec<String>,
}

impl Article {
    /// Creates a standard article. Fails when `title` is blank.
    pub fn new(id: ArticleId, title: impl AsRef<str>) -> Result<Self, ArticleError> {
        Self::with_kind(id, ArticleKind::Standard, title)
    }

    /// Creates a featured article. Fails when `title` is blank.
    pub fn featured(id: ArticleId, title: impl AsRef<str>) -> Result<Self, ArticleError> {
        Self::with_kind(id, ArticleKind::Featured, title)
    }

    pub fn with_kind(
        id: ArticleId,
        kind: ArticleKind,
        title: impl AsRef<str>,
    ) -> Result<Self, ArticleError> {
        let title = clean_title(title.as_ref())?;
        Ok(Self {
            id,
            kind,
            slug: slugify_for(kind, &title),
            title,
            excerpt: String::new(),
            views: 0,
            published: true,
            author: DEFAULT_AUTHOR.to_string(),
            tags: Vec::new(),
        })
    }

    /// Infallible variant used by lenient paths: a blank title becomes
    /// [`DEFAULT_TITLE`].
    pub(crate) fn with_title_or_default(id: ArticleId, kind: ArticleKind, title: &str) -> Self {
        let title = match title.trim() {
            "" => DEFAULT_TITLE,
            trimmed => trimmed,
        };
        Self {
            id,
            kind,
            slug: slugify_for(kind, title),
            title: title.to_string(),
            excerpt: String::new(),
            views: 0,
            published: true,
            author: DEFAULT_AUTHOR.to_string(),
            tags: Vec::new(),
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn kind(&self) -> ArticleKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn views(&self) -> u64 {
        self.views
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replaces the title and regenerates the slug.
    ///
    /// On error the article is left untouched.
    pub fn set_title(&mut self, title: impl AsRef<str>) -> Result<(), ArticleError> {
        let title = clean_title(title.as_ref())?;
        self.slug = slugify_for(self.kind, &title);
        self.title = title;
        Ok(())
    }

    /// Switches slug rules; the slug is regenerated from the current title.
    pub fn set_kind(&mut self, kind: ArticleKind) {
        self.kind = kind;
        self.slug = slugify_for(kind, &self.title);
    }

    pub fn set_excerpt(&mut self, excerpt: impl AsRef<str>) {
        self.excerpt = excerpt.as_ref().trim().to_string();
    }

    pub fn set_views(&mut self, views: u64) {
        self.views = views;
    }

    pub fn set_published(&mut self, published: bool) {
        self.published = published;
    }

    /// Blank authors fall back to [`DEFAULT_AUTHOR`].
    pub fn set_author(&mut self, author: impl AsRef<str>) {
        let author = author.as_ref().trim();
        self.author = if author.is_empty() {
            DEFAULT_AUTHOR.to_string()
        } else {
            author.to_string()
        };
    }

    /// Appends a trimmed tag. Duplicates are kept.
    pub fn add_tag(&mut self, tag: impl AsRef<str>) -> Result<(), ArticleError> {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            return Err(ArticleError::EmptyTag);
        }
        self.tags.push(tag.to_string());
        Ok(())
    }
}

fn clean_title(raw: &str) -> Result<String, ArticleError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ArticleError::EmptyTitle);
    }
    Ok(title.to_string())
}

/// Persisted shape of an [`Article`].
///
/// The stored `slug` is informational only: it is re-derived from the title
/// and kind when the record is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ArticleRecord {
    id: ArticleId,
    #[serde(default)]
    kind: ArticleKind,
    title: String,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    views: u64,
    #[serde(default = "default_published")]
    published: bool,
    #[serde(default = "default_author")]
    author: String,
    #[serde(default)]
    tags: Vec<String>,
}

fn default_published() -> bool {
    true
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

impl TryFrom<ArticleRecord> for Article {
    type Error = ArticleError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        let mut article = Article::with_kind(record.id, record.kind, record.title)?;
        article.set_excerpt(record.excerpt);
        article.set_views(record.views);
        article.set_published(record.published);
        article.set_author(record.author);
        for tag in record.tags {
            article.add_tag(tag)?;
        }
        Ok(article)
    }
}

impl From<Article> for ArticleRecord {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            kind: article.kind,
            title: article.title,
            slug: article.slug,
            excerpt: article.excerpt,
            views: article.views,
            published: article.published,
            author: article.author,
            tags: article.tags,
        }
    }
}
