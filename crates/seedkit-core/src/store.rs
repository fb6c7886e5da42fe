//! Store — id-keyed article collections that keep slugs unique.
//!
//! Two implementations share the [`ArticleStore`] contract:
//!
//! - [`MemoryArticleStore`] lives for the process and keeps insertion order.
//! - [`JsonArticleStore`] keeps a pretty-printed JSON array on disk and rewrites
//!   it atomically (`<path>.tmp` then rename) on every save.
//!
//! # Invariants
//! - No two stored articles share a slug, except an article and the update
//!   that replaces it (same id).
//! - A rejected save leaves the store unchanged.
//!
//! The uniqueness check and the file rewrite are not one transaction. Two
//! processes saving into the same file race, and the last rename wins.

use crate::config::{StoreBackend, StoreConfig};
use crate::types::{Article, ArticleId};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("slug '{slug}' already exists")]
    DuplicateSlug { slug: String },
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("corrupt article data in {}: {source}", .path.display())]
    CorruptData {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl StoreError {
    /// True for the one error a batch import may skip past.
    pub fn is_duplicate_slug(&self) -> bool {
        matches!(self, StoreError::DuplicateSlug { .. })
    }
}

/// Contract shared by every article store.
pub trait ArticleStore {
    /// Every stored article, in store order.
    fn all(&self) -> StoreResult<Vec<Article>>;

    /// Insert `article`, or replace the stored article with the same id.
    ///
    /// Fails with [`StoreError::DuplicateSlug`] when another id already owns
    /// the slug; nothing is written in that case.
    fn save(&mut self, article: Article) -> StoreResult<()>;

    fn get(&self, id: ArticleId) -> StoreResult<Option<Article>> {
        Ok(self.all()?.into_iter().find(|a| a.id() == id))
    }
}

/// Build the store variant selected by `config`.
pub fn open_store(config: &StoreConfig) -> Box<dyn ArticleStore> {
    match config.backend {
        StoreBackend::Memory => Box::new(MemoryArticleStore::new()),
        StoreBackend::Json => Box::new(JsonArticleStore::new(&config.path)),
    }
}

fn ensure_unique_slug(existing: &[Article], candidate: &Article) -> StoreResult<()> {
    let taken = existing
        .iter()
        .any(|a| a.id() != candidate.id() && a.slug() == candidate.slug());
    if taken {
        return Err(StoreError::DuplicateSlug {
            slug: candidate.slug().to_string(),
        });
    }
    Ok(())
}

/// Replace in place when the id is known, append otherwise.
fn upsert(articles: &mut Vec<Article>, article: Article) {
    match articles.iter_mut().find(|a| a.id() == article.id()) {
        Some(slot) => *slot = article,
        None => articles.push(article),
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MemoryArticleStore {
    articles: Vec<Article>,
}

impl MemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl ArticleStore for MemoryArticleStore {
    fn all(&self) -> StoreResult<Vec<Article>> {
        Ok(self.articles.clone())
    }

    fn save(&mut self, article: Article) -> StoreResult<()> {
        ensure_unique_slug(&self.articles, &article)?;
        tracing::debug!(id = %article.id(), slug = article.slug(), "saved article in memory");
        upsert(&mut self.articles, article);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JSON file store
// ---------------------------------------------------------------------------

/// File-backed store holding a JSON array of articles.
///
/// A missing file reads as an empty store. The parent directory is created on
/// the first save.
#[derive(Debug, Clone)]
pub struct JsonArticleStore {
    path: PathBuf,
}

impl JsonArticleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file used while a write is in flight.
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn persist(&self, articles: &[Article]) -> StoreResult<()> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut json = serde_json::to_string_pretty(articles)
            .map_err(|e| write_err(io::Error::other(e)))?;
        json.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let temp = TempFile::create(self.temp_path()).map_err(write_err)?;
        temp.write_all(json.as_bytes()).map_err(write_err)?;
        temp.commit(&self.path).map_err(write_err)
    }
}

impl ArticleStore for JsonArticleStore {
    fn all(&self) -> StoreResult<Vec<Article>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::CorruptData {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, article: Article) -> StoreResult<()> {
        let mut articles = self.all()?;
        ensure_unique_slug(&articles, &article)?;

        let (id, slug) = (article.id(), article.slug().to_string());
        upsert(&mut articles, article);
        self.persist(&articles)?;

        tracing::debug!(
            id = %id,
            slug = %slug,
            path = %self.path.display(),
            total = articles.len(),
            "saved article to json store"
        );
        Ok(())
    }
}

/// Temporary sibling file that is removed on drop unless committed.
struct TempFile {
    path: PathBuf,
    file: Option<fs::File>,
}

impl TempFile {
    fn create(path: PathBuf) -> io::Result<Self> {
        let file = fs::File::create(&path)?;
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        let mut file = self.file.as_ref().ok_or_else(|| io::Error::other("temp file closed"))?;
        file.write_all(bytes)?;
        file.sync_all()
    }

    /// Atomically move the temp file over `target`.
    fn commit(mut self, target: &Path) -> io::Result<()> {
        drop(self.file.take());
        fs::rename(&self.path, target)?;
        self.path = PathBuf::new();
        Ok(())
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        drop(self.file.take());
        if !self.path.as_os_str().is_empty() {
            let _ = fs::remove_file(&self.path);
        }
    }
}
