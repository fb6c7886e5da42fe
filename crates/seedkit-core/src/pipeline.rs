//! Seed pipeline — ingest, normalise, filter and limit in one pass.
//!
//! ```text
//! text ──► ingestor::parse ──► normalize (ids 1..) ──► published filter ──► limit
//! ```
//!
//! Ids are assigned to every ingested row before filtering, so an article
//! keeps the id of its source row whatever options are in effect.

use crate::factory::ArticleFactory;
use crate::ingestor::{self, IngestError};
use crate::normalizer::normalize;
use crate::store::{ArticleStore, StoreResult};
use crate::types::Article;
use std::num::NonZeroUsize;

/// Filtering applied after normalisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOptions {
    /// Drop articles whose `published` flag is false.
    pub published_only: bool,
    /// Keep at most this many articles, counted after filtering.
    pub limit: Option<NonZeroUsize>,
}

/// Turn seed text into articles.
///
/// Any structural error aborts the whole run; nothing is returned partially.
pub fn run(text: &str, options: &SeedOptions) -> Result<Vec<Article>, IngestError> {
    let rows = ingestor::parse(text)?;
    let total = rows.len();

    let mut ids = ArticleFactory::new();
    let articles: Vec<Article> = rows
        .iter()
        .map(|row| normalize(row, ids.next_id()))
        .filter(|article| !options.published_only || article.is_published())
        .take(options.limit.map_or(usize::MAX, NonZeroUsize::get))
        .collect();

    tracing::info!(
        rows = total,
        kept = articles.len(),
        published_only = options.published_only,
        limit = options.limit.map(NonZeroUsize::get),
        "seed pipeline finished"
    );
    Ok(articles)
}

/// Outcome of [`import`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Articles written to the store.
    pub saved: usize,
    /// Slugs rejected as duplicates, in encounter order.
    pub skipped: Vec<String>,
}

/// Save `articles` into `store`, skipping slug conflicts.
///
/// Duplicate slugs are logged and recorded in the report; any other store
/// error stops the import and is returned (articles saved before it stay
/// saved).
pub fn import<S>(store: &mut S, articles: Vec<Article>) -> StoreResult<ImportReport>
where
    S: ArticleStore + ?Sized,
{
    let mut report = ImportReport::default();
    for article in articles {
        let slug = article.slug().to_string();
        match store.save(article) {
            Ok(()) => report.saved += 1,
            Err(err) if err.is_duplicate_slug() => {
                tracing::warn!(slug = %slug, "skipping article: {err}");
                report.skipped.push(slug);
            }
            Err(err) => return Err(err),
        }
    }

    tracing::info!(
        saved = report.saved,
        skipped = report.skipped.len(),
        "import finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryArticleStore;
    use pretty_assertions::assert_eq;

    const CSV: &str = "title,excerpt,views,published,author\nA,,5,true,Bob\nB,,0,false,\nC,x,2,yes,Eve\n";

    fn limit(n: usize) -> Option<NonZeroUsize> {
        NonZeroUsize::new(n)
    }

    fn ids(articles: &[Article]) -> Vec<u64> {
        articles.iter().map(|a| a.id().get()).collect()
    }

    #[test]
    fn default_options_keep_everything() {
        let articles = run(CSV, &SeedOptions::default()).unwrap();
        assert_eq!(ids(&articles), vec![1, 2, 3]);
        assert_eq!(articles[1].author(), "Unknown");
    }

    #[test]
    fn published_filter_keeps_source_ids() {
        let options = SeedOptions {
            published_only: true,
            limit: None,
        };
        assert_eq!(ids(&run(CSV, &options).unwrap()), vec![1, 3]);
    }

    #[test]
    fn limit_applies_after_filter() {
        let options = SeedOptions {
            published_only: true,
            limit: limit(2),
        };
        assert_eq!(ids(&run(CSV, &options).unwrap()), vec![1, 3]);

        let options = SeedOptions {
            published_only: false,
            limit: limit(1),
        };
        assert_eq!(ids(&run(CSV, &options).unwrap()), vec![1]);
    }

    #[test]
    fn structural_error_aborts_run() {
        let err = run("title,excerpt\nA,b", &SeedOptions::default()).unwrap_err();
        assert_eq!(
            err,
            IngestError::MissingHeader {
                header: "views".into()
            }
        );
    }

    #[test]
    fn import_skips_duplicates_and_counts_saves() {
        let text = "title,excerpt,views,published,author\nHello,,1,1,a\nhello!,,2,1,b\nOther,,3,1,c\n";
        let articles = run(text, &SeedOptions::default()).unwrap();

        let mut store = MemoryArticleStore::new();
        let report = import(&mut store, articles).unwrap();
        assert_eq!(
            report,
            ImportReport {
                saved: 2,
                skipped: vec!["hello".to_string()],
            }
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn import_is_idempotent_for_same_ids() {
        let articles = run(CSV, &SeedOptions::default()).unwrap();
        let mut store = MemoryArticleStore::new();
        import(&mut store, articles.clone()).unwrap();
        let report = import(&mut store, articles).unwrap();
        assert_eq!(report.saved, 3);
        assert!(report.skipped.is_empty());
        assert_eq!(store.len(), 3);
    }
}
