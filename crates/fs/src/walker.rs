use std::{
    fs::{self, DirEntry},
    io::{self, ErrorKind},
    path::Path,
};

use log::{debug, warn};

use crate::{error::ScanError, record::FileRecord};

/// Recursively lists every regular file under `root`.
///
/// Entries within a directory are visited in name order and a directory's own
/// files come before the contents of its subdirectories, so the result is
/// stable across runs. Unreadable subdirectories are logged and skipped; only
/// a failure on `root` itself is returned.
pub fn collect_files(root: &Path) -> Result<Vec<FileRecord>, ScanError> {
    check_root(root)?;

    let mut files = Vec::new();
    scan_dir(root, &mut files).map_err(|source| ScanError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    debug!("[walk] {} files under {:?}", files.len(), root);
    Ok(files)
}

/// Fails unless `root` exists and is a directory.
pub fn check_root(root: &Path) -> Result<(), ScanError> {
    let meta = match fs::metadata(root) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ScanError::NotFound(root.to_path_buf()));
        }
        Err(source) => {
            return Err(ScanError::Io {
                path: root.to_path_buf(),
                source,
            });
        }
    };

    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    Ok(())
}

/// Keeps the records whose write bit is set, in their original order.
pub fn filter_writable<I>(files: I) -> Vec<FileRecord>
where
    I: IntoIterator<Item = FileRecord>,
{
    files.into_iter().filter(FileRecord::is_writable).collect()
}

fn scan_dir(dir: &Path, files: &mut Vec<FileRecord>) -> io::Result<()> {
    let mut entries: Vec<DirEntry> = Vec::new();
    for entry_res in fs::read_dir(dir)? {
        match entry_res {
            Ok(e) => entries.push(e),
            Err(e) => warn!("[walk] error reading entry in {:?}: {e}", dir),
        }
    }
    entries.sort_by_key(DirEntry::file_name);

    let mut subdirs = Vec::new();
    for entry in &entries {
        match classify(entry) {
            Ok(EntryKind::File) => files.push(FileRecord::new(entry.path())),
            Ok(EntryKind::Dir) => subdirs.push(entry.path()),
            Ok(EntryKind::Other) => {}
            Err(e) => warn!("[walk] inspect {:?} failed: {e}", entry.path()),
        }
    }

    for sub in subdirs {
        if let Err(e) = scan_dir(&sub, files) {
            warn!("[walk] read_dir({:?}) failed: {e}", sub);
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
    Other,
}

fn classify(entry: &DirEntry) -> io::Result<EntryKind> {
    let file_type = entry.file_type()?;

    if file_type.is_dir() {
        return Ok(EntryKind::Dir);
    }
    if file_type.is_file() {
        return Ok(EntryKind::File);
    }
    if file_type.is_symlink() {
        // Linked directories are not followed; linked files are listed.
        return Ok(match fs::metadata(entry.path()) {
            Ok(target) if target.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        });
    }

    Ok(EntryKind::Other)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
