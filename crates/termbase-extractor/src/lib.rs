//! Termbase Extractor
//!
//! Turns markdown glossary documents into structured [`Term`] records.
//!
//! # Overview
//!
//! Glossary files in the wild follow several undocumented layout conventions.
//! The extractor skips leading frontmatter, detects which convention a file
//! follows, runs a line-cursor state machine parameterized for that
//! convention, and normalizes every raw entry into a term.
//!
//! # Architecture
//!
//! ```text
//! text → frontmatter → detect → EntryIter → TermBuilder → Terms
//! ```
//!
//! # Example Usage
//!
//! ```
//! use termbase_extractor::{Extractor, ExtractorConfig};
//! use termbase_domain::Variant;
//!
//! let extractor = Extractor::new(ExtractorConfig::default()).unwrap();
//! let text = "## Revenue\n\nTotal income.\n\n**Categories**: Finance\n\n---\n";
//!
//! let extraction = extractor.extract("finance.md", text);
//! assert_eq!(extraction.variant, Variant::Standard);
//! assert_eq!(extraction.terms.len(), 1);
//! assert_eq!(extraction.terms[0].slug, "revenue");
//! ```
//!
//! [`Term`]: termbase_domain::Term

#![warn(missing_docs)]

mod error;
mod config;
mod line;
mod cursor;
mod frontmatter;
mod detect;
mod parser;
mod title;
mod slug;
mod builder;
mod extractor;


pub use error::ExtractorError;
pub use config::ExtractorConfig;
pub use cursor::Cursor;
pub use frontmatter::content_start;
pub use detect::{classify, detect, DetectionRule, DetectionWindow, DETECTION_RULES};
pub use parser::{DefinitionSource, EntryIter, FieldKind, FieldStyle, RawEntry, VariantDescriptor};
pub use title::split_title;
pub use slug::slugify;
pub use builder::TermBuilder;
pub use extractor::{Extraction, Extractor};
