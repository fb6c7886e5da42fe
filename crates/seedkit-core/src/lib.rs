//! seedkit-core — Seed Kit core library.
//!
//! This crate exposes the pipeline layers as public modules, plus the shared
//! types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! Ingestor ──► Normalizer ──► Pipeline ──► Export
//!                                │
//!                                └──► Store
//! ```
//!
//! Everything runs synchronously on the calling thread. The only mutable state
//! lives in the store and in whichever component hands out article ids.

pub mod config;
pub mod export;
pub mod factory;
pub mod ingestor;
pub mod normalizer;
pub mod pipeline;
pub mod slug;
pub mod store;
pub mod types;

pub use factory::ArticleFactory;
pub use ingestor::{IngestError, Row};
pub use pipeline::{ImportReport, SeedOptions};
pub use slug::{slugify, slugify_for};
pub use store::{
    open_store, ArticleStore, JsonArticleStore, MemoryArticleStore, StoreError, StoreResult,
};
pub use types::{Article, ArticleError, ArticleId, ArticleKind};
