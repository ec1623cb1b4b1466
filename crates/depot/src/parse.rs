use std::sync::LazyLock;

use regex::Regex;

use crate::error::HeadTypeError;

// `//depot/path/file.txt#1 - add change 123 (text)`
static FILES_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)#\d+\s+-\s+").expect("files line pattern compiles"));

const HEAD_TYPE_PREFIX: &str = "... headType";

/// Depot paths from `p4 files` output. Lines that do not look like a file
/// revision are skipped.
pub fn parse_files_output(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| FILES_LINE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// The `headType` value from `p4 fstat -T headType` output.
///
/// `Ok(None)` when no `headType` line is present; an error when the line is
/// present but carries no value.
pub fn parse_head_type(output: &str) -> Result<Option<String>, HeadTypeError> {
    let Some(line) = output
        .lines()
        .find(|line| line.starts_with(HEAD_TYPE_PREFIX))
    else {
        return Ok(None);
    };

    match line.splitn(3, ' ').nth(2) {
        Some(value) => Ok(Some(value.to_owned())),
        None => Err(HeadTypeError {
            line: line.to_owned(),
        }),
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
