use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Failures surfaced while building the index. Query misses are not errors:
/// a query with no matching documents returns an empty result.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A listed document could not be read. Whether the build aborts or
    /// skips the document is the orchestrator's call; the engine never
    /// retries.
    #[error("document unavailable: {id}")]
    DocumentUnavailable {
        id: String,
        #[source]
        source: io::Error,
    },

    /// The noise word list could not be read. The build cannot proceed and
    /// no partial index is produced.
    #[error("noise word list unavailable: {path}")]
    NoiseListUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The document list could not be read; same policy as the noise list.
    #[error("document list unavailable: {path}")]
    DocumentListUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },
}
