//! seedkit — Seed Kit
//!
//! Turns CSV article seeds into a standardised JSON document and, optionally,
//! a slug-unique article store. This crate holds the CLI layer; the pipeline
//! layers live in `seedkit-core` and input sources in `seedkit-sources`, both
//! re-exported here so integration tests can import them directly.
//!
//! # Architecture
//!
//! ```text
//! Source ──► Ingestor ──► Normalizer ──► Pipeline ──► Export ──► stdout
//!                                           │
//!                                           └──► Store
//! ```

pub mod cli;

pub use seedkit_core::{
    config, export, factory, ingestor, normalizer, pipeline, slug, store, types, Article,
    ArticleError, ArticleFactory, ArticleId, ArticleKind, ArticleStore, ImportReport,
    IngestError, JsonArticleStore, MemoryArticleStore, SeedOptions, StoreError, StoreResult,
};
pub use seedkit_sources::{InputSource, SourceError};
