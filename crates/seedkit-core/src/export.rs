//! Export — renders articles as the seed JSON document.
//!
//! The seed document is a pretty-printed array whose objects carry exactly
//! `id, title, excerpt, views, published, author`, in that order. Slug, kind
//! and tags stay internal to the store format.

use crate::types::Article;
use serde::Serialize;

/// Borrowed view of one article in seed-document shape.
#[derive(Debug, Serialize)]
pub struct SeedRecord<'a> {
    pub id: u64,
    pub title: &'a str,
    pub excerpt: &'a str,
    pub views: u64,
    pub published: bool,
    pub author: &'a str,
}

impl<'a> From<&'a Article> for SeedRecord<'a> {
    fn from(article: &'a Article) -> Self {
        Self {
            id: article.id().get(),
            title: article.title(),
            excerpt: article.excerpt(),
            views: article.views(),
            published: article.is_published(),
            author: article.author(),
        }
    }
}

/// Pretty-printed seed document (no trailing newline).
pub fn to_seed_json(articles: &[Article]) -> serde_json::Result<String> {
    let records: Vec<SeedRecord<'_>> = articles.iter().map(SeedRecord::from).collect();
    serde_json::to_string_pretty(&records)
}
