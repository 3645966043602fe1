//! Termbase Resolver
//!
//! Reconciles terms gathered from many glossary files into one row set.
//!
//! # Overview
//!
//! Terms from different files often share a slug. Some are the same concept
//! written twice (true duplicates) and are merged; others are unrelated
//! concepts whose titles happen to normalize alike (homographs) and are given
//! distinct slugs derived from their parenthetical expansions. Every surviving
//! term is then classified under a broader concept through the category map
//! and projected into an output row.
//!
//! # Architecture
//!
//! ```text
//! Terms → collisions (report) → Deduplicator ─┬→ ResolvedTerms → Rows
//!                                CategoryMapper ┘
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod category;
mod collision;
mod dedup;
mod projector;
mod report;
mod resolver;

pub use error::ResolverError;
pub use config::ResolverConfig;
pub use category::{load_category_map, read_category_map, CategoryMapper, Mapping};
pub use collision::{detect_collisions, definition_preview, write_collision_report};
pub use dedup::{identity_key, DedupEvent, DedupOutcome, Deduplicator};
pub use projector::{project, scope_note, write_rows};
pub use report::{FileSummary, RunReport};
pub use resolver::{Resolution, Resolver};
