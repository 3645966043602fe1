//! Termbase Domain Layer
//!
//! This crate contains the core data model shared by every stage of the
//! glossary import pipeline. It has no external dependencies and performs no
//! I/O; parsing, reconciliation and output live in other crates.
//!
//! ## Key Concepts
//!
//! - **Term**: One glossary entry as parsed from a single source document
//! - **ResolvedTerm**: A term after collision resolution, carrying every source
//!   that contributed to it
//! - **CategoryMap**: Read-only lookup from raw category text to a broader concept
//! - **Row**: The flat record handed to vocabulary publishing
//! - **Variant**: The document layout convention a source file follows
//!
//! ## Architecture
//!
//! ```text
//! text → Variant → Term → ResolvedTerm → Row
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod row;
pub mod term;
pub mod variant;

// Re-exports for convenience
pub use category::CategoryMap;
pub use row::Row;
pub use term::{CollisionGroup, LabelSet, ResolvedTerm, Term};
pub use variant::Variant;
