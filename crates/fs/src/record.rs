use std::path::{Path, PathBuf};

use crate::perms;

/// A file found by the local walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Probes the file system on every call; the answer is never cached.
    pub fn is_writable(&self) -> bool {
        perms::is_writable(&self.path)
    }
}
