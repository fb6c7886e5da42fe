//! Test builders — ergonomic constructors for `Article` values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use seedkit::{Article, ArticleId, ArticleKind};

/// Fluent builder for [`Article`] test fixtures.
///
/// ```rust,ignore
/// let article = ArticleBuilder::new(3, "Hello")
///     .featured()
///     .views(12)
///     .tag("php")
///     .build();
/// ```
pub struct ArticleBuilder {
    id: u64,
    kind: ArticleKind,
    title: String,
    excerpt: String,
    views: u64,
    published: bool,
    author: String,
    tags: Vec<String>,
}

impl ArticleBuilder {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            kind: ArticleKind::Standard,
            title: title.into(),
            excerpt: String::new(),
            views: 0,
            published: true,
            author: "Unknown".to_string(),
            tags: Vec::new(),
        }
    }

    pub fn featured(mut self) -> Self {
        self.kind = ArticleKind::Featured;
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    pub fn unpublished(mut self) -> Self {
        self.published = false;
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Article {
        let id = ArticleId::new(self.id).expect("builder id must be positive");
        let mut article =
            Article::with_kind(id, self.kind, &self.title).expect("builder title must be non-blank");
        article.set_excerpt(&self.excerpt);
        article.set_views(self.views);
        article.set_published(self.published);
        article.set_author(&self.author);
        for tag in &self.tags {
            article.add_tag(tag).expect("builder tags must be non-blank");
        }
        article
    }
}

/// Build a plain standard article.
pub fn article(id: u64, title: &str) -> Article {
    ArticleBuilder::new(id, title).build()
}

/// Build a featured article.
pub fn featured(id: u64, title: &str) -> Article {
    ArticleBuilder::new(id, title).featured().build()
}

pub fn article_id(id: u64) -> ArticleId {
    ArticleId::new(id).expect("id must be positive")
}
