use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    process::Command,
};

use log::debug;
use permscan_runtime::p4_program;

use crate::error::DepotError;

/// Runs one depot client invocation and hands back its stdout.
///
/// Implementations must turn a missing executable or a non-zero exit into a
/// [`DepotError`]; callers treat every error as fatal.
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> Result<String, DepotError>;
}

/// The real Perforce command-line client.
#[derive(Debug, Clone)]
pub struct P4Cli {
    program: PathBuf,
}

impl P4Cli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Client named by `PERMSCAN_P4`, falling back to `p4` on the `PATH`.
    pub fn from_env() -> Self {
        Self::new(p4_program())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(args.iter().map(|a| (*a).to_owned()));
        parts.join(" ")
    }
}

impl CommandRunner for P4Cli {
    fn run(&self, args: &[&str]) -> Result<String, DepotError> {
        debug!("[p4] running {}", self.describe(args));

        let output = match Command::new(&self.program).args(args).output() {
            Ok(o) => o,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DepotError::ToolNotFound {
                    program: self.program.clone(),
                });
            }
            Err(source) => {
                return Err(DepotError::Io {
                    command: self.describe(args),
                    source,
                });
            }
        };

        if !output.status.success() {
            return Err(DepotError::CommandFailed {
                command: self.describe(args),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
#[path = "client_tests.rs"]
mod tests;
