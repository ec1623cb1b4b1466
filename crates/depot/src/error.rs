use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal failures talking to the depot client.
#[derive(Debug, Error)]
pub enum DepotError {
    #[error(
        "{} command not found. Please ensure Perforce is installed and in your PATH.",
        .program.display()
    )]
    ToolNotFound { program: PathBuf },

    #[error("`{command}` exited with {}\nstderr: {stderr}", exit_label(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("failed to run `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit status {c}"),
        None => "no exit status (terminated by signal)".to_owned(),
    }
}

/// A `headType` line that could not be split into its value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed headType line: {line:?}")]
pub struct HeadTypeError {
    pub line: String,
}
