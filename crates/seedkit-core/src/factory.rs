//! Article factory — hands out sequential ids from explicit, caller-owned state.

use crate::types::{Article, ArticleError, ArticleId, ArticleKind};

/// Sequential id source for programmatic article construction.
///
/// Each factory counts on its own; two factories never share state.
#[derive(Debug, Clone)]
pub struct ArticleFactory {
    next: ArticleId,
    issued: u64,
}

impl Default for ArticleFactory {
    fn default() -> Self {
        Self::starting_at(ArticleId::MIN)
    }
}

impl ArticleFactory {
    /// A factory whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: ArticleId) -> Self {
        Self {
            next: first,
            issued: 0,
        }
    }

    /// Reserve the next id.
    pub fn next_id(&mut self) -> ArticleId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        self.issued += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    pub fn standard(&mut self, title: &str) -> Result<Article, ArticleError> {
        self.build(ArticleKind::Standard, title)
    }

    pub fn featured(&mut self, title: &str) -> Result<Article, ArticleError> {
        self.build(ArticleKind::Featured, title)
    }

    /// Validation happens before an id is reserved, so a rejected title does
    /// not leave a gap in the sequence.
    fn build(&mut self, kind: ArticleKind, title: &str) -> Result<Article, ArticleError> {
        if title.trim().is_empty() {
            return Err(ArticleError::EmptyTitle);
        }
        Article::with_kind(self.next_id(), kind, title)
    }
}
