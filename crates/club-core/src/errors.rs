//! Error types for record handling and export.
//!
//! Network and configuration errors live in `club-api` and `club-config`.
//! They converge with these in `club-cli`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building flattened records.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two sections produced the same dotted key under `Collision::Reject`.
    #[error("Key collision while merging sections: {key}")]
    KeyCollision { key: String },
}

/// Errors raised while writing the CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output file could not be created or written.
    #[error("Failed to write export to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to an in-memory or caller-supplied writer failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
