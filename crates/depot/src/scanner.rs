use log::debug;

use crate::{
    client::CommandRunner,
    error::{DepotError, HeadTypeError},
    parse::{parse_files_output, parse_head_type},
    record::{DepotFileRecord, WRITABLE_FLAG},
};

/// Every depot path reported by `p4 files <depot_path>`.
pub fn list_files<C: CommandRunner>(
    client: &C,
    depot_path: &str,
) -> Result<Vec<String>, DepotError> {
    let output = client.run(&["files", depot_path])?;
    let files = parse_files_output(&output);
    debug!("[depot] {} files under {depot_path}", files.len());
    Ok(files)
}

/// `(has_writable_flag, head_type)` for one depot file.
///
/// A malformed `headType` line is handed to `on_warning` and read as
/// `(false, None)`; client failures are returned as-is.
pub fn get_file_type<C, F>(
    client: &C,
    path: &str,
    mut on_warning: F,
) -> Result<(bool, Option<String>), DepotError>
where
    C: CommandRunner,
    F: FnMut(&str, &HeadTypeError),
{
    let output = client.run(&["fstat", "-T", "headType", path])?;

    match parse_head_type(&output) {
        Ok(Some(file_type)) => Ok((file_type.contains(WRITABLE_FLAG), Some(file_type))),
        Ok(None) => Ok((false, None)),
        Err(e) => {
            debug!("[depot] unreadable headType for {path}: {e}");
            on_warning(path, &e);
            Ok((false, None))
        }
    }
}

/// Probes each path in order and keeps the ones carrying `+w`.
pub fn writable_files<C, I, S, F>(
    client: &C,
    paths: I,
    mut on_warning: F,
) -> Result<Vec<DepotFileRecord>, DepotError>
where
    C: CommandRunner,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str, &HeadTypeError),
{
    let mut matches = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let (has_writable, file_type) = get_file_type(client, path, &mut on_warning)?;
        if has_writable {
            matches.push(DepotFileRecord::new(path, file_type));
        }
    }

    Ok(matches)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
