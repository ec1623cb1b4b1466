use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that stop a local scan before any file is probed.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read directory '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
