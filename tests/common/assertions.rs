//! Domain-specific assertion macros for seedkit harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! invariant that broke.

use seedkit::{Article, ArticleStore};

/// Assert that a store result is a duplicate-slug rejection for `$slug`.
///
/// ```rust,ignore
/// assert_duplicate_slug!(store.save(a), "hello-world");
/// ```
#[macro_export]
macro_rules! assert_duplicate_slug {
    ($result:expr, $slug:expr) => {{
        match $result {
            Err(seedkit::StoreError::DuplicateSlug { slug }) => {
                pretty_assertions::assert_eq!(slug, $slug, "rejected slug mismatch")
            }
            Err(other) => panic!(
                "assert_duplicate_slug! failed: expected DuplicateSlug({:?}), got error: {}",
                $slug, other
            ),
            Ok(_) => panic!(
                "assert_duplicate_slug! failed: save of slug {:?} unexpectedly succeeded",
                $slug
            ),
        }
    }};
}

/// Slugs of every stored article, in store order.
pub fn slugs(store: &dyn ArticleStore) -> Vec<String> {
    store
        .all()
        .expect("store must be readable")
        .iter()
        .map(|a| a.slug().to_string())
        .collect()
}

/// Panic if two articles share a slug.
pub fn assert_unique_slugs(articles: &[Article]) {
    let mut seen = std::collections::HashSet::new();
    for article in articles {
        if !seen.insert(article.slug()) {
            panic!(
                "slug uniqueness violated: {:?} appears more than once (id {})",
                article.slug(),
                article.id()
            );
        }
    }
}

/// Panic if `ids` is not exactly `1..=ids.len()` in order.
pub fn assert_sequential_ids(articles: &[Article]) {
    let ids: Vec<u64> = articles.iter().map(|a| a.id().get()).collect();
    let expected: Vec<u64> = (1..=articles.len() as u64).collect();
    pretty_assertions::assert_eq!(ids, expected, "ids must be a 1-based running sequence");
}
