//! Slug normaliser — turns article titles into URL-safe identifiers.

use crate::types::ArticleKind;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern must compile"));

/// Prefix carried by every [`ArticleKind::Featured`] slug.
pub const FEATURED_PREFIX: &str = "featured-";

/// Lowercase `text`, collapse every run of characters outside `[a-z0-9]` into
/// a single `-`, and strip leading/trailing dashes.
///
/// Never fails. An empty (or all-punctuation) input yields an empty slug; the
/// caller decides whether that is acceptable.
pub fn slugify(text: &str) -> String {
    let lowercase = text.to_lowercase();
    let replaced = NON_ALNUM_RUN.replace_all(&lowercase, "-");
    replaced.trim_matches('-').to_string()
}

/// Slug for an article of the given kind.
pub fn slugify_for(kind: ArticleKind, text: &str) -> String {
    match kind {
        ArticleKind::Standard => slugify(text),
        ArticleKind::Featured => format!("{FEATURED_PREFIX}{}", slugify(text)),
    }
}
