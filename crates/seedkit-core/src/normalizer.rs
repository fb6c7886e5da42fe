//! Normalizer — coerces loosely-typed [`Row`](crate::Row) values into canonical
//! [`Article`](crate::Article)s.
//!
//! Normalisation is lenient: it never fails. Missing or malformed values fall
//! back to defaults instead of erroring.

use crate::ingestor::Row;
use crate::types::{Article, ArticleId, ArticleKind};

/// Build an article from one ingested row.
pub fn normalize(row: &Row, id: ArticleId) -> Article {
    let title = row.get("title").unwrap_or_default();
    let mut article = Article::with_title_or_default(id, ArticleKind::Standard, title);
    article.set_excerpt(row.get("excerpt").unwrap_or_default());
    article.set_views(row.get("views").map(coerce_views).unwrap_or(0));
    article.set_published(row.get("published").map(coerce_bool).unwrap_or(true));
    article.set_author(row.get("author").unwrap_or_default());

    tracing::trace!(id = %id, line = row.line, slug = article.slug(), "normalised row");
    article
}

/// Integer prefix of `raw`, clamped at zero.
///
/// `"12"` → 12, `"3.9"` → 3, `"42 views"` → 42, `"-5"` → 0, `"abc"` → 0.
/// Values too large for `u64` saturate.
pub fn coerce_views(raw: &str) -> u64 {
    let raw = raw.trim();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse::<u64>().unwrap_or(u64::MAX)
}

/// Truthiness of a raw field value.
///
/// Empty text and the usual negative spellings (`0`, `false`, `no`, `off`,
/// `n`) are false, case-insensitively; anything else is true.
pub fn coerce_bool(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off" | "n"
    )
}
