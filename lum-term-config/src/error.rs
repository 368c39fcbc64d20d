//! Typed error variants for the store.
//!
//! Almost every failure mode of the store degrades to defaulting or skipping
//! behavior; the one condition nothing below the store can recover from is an
//! unusable configuration root.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The configuration directory (or its themes subdirectory) could not be
    /// created.
    #[error("failed to create configuration directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
