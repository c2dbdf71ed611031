//! A tiny full-text indexing and ranked-retrieval engine.
//!
//! Documents are scanned into per-document keyword frequency maps, merged
//! into an inverted index whose occurrence lists stay sorted by descending
//! frequency, and queried with two-keyword OR searches returning the top
//! five matching documents.

pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod preprocessing;

pub use error::{EngineError, Result};
pub use index::{KeywordIndex, Occurrence};
