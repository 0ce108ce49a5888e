use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the file layer. In-memory enrichment itself cannot fail.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("input path {} does not exist", .0.display())]
    MissingInput(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid corpus JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}
