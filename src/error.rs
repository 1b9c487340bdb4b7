//! Fatal error taxonomy for the engine's one real library boundary: reading
//! a pool snapshot (`spec.md` §7). Everything downstream of a successfully
//! loaded snapshot is infallible — malformed pools are skipped, degenerate
//! arithmetic is steered away with sentinels, never propagated as `Err`.

use thiserror::Error;

/// Fatal errors that abort a run before any graph is built.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("could not open pool snapshot at {path}: {source}")]
    SnapshotUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("pool snapshot at {path} is not valid JSON: {source}")]
    SnapshotMalformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
