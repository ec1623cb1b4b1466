use std::path::PathBuf;

pub const PROGRAM_LOG_LEVEL: &str = "PERMSCAN_LOG_LEVEL";

/// Environment override for the Perforce client executable.
pub const P4_PROGRAM_ENV: &str = "PERMSCAN_P4";
pub const DEFAULT_P4_PROGRAM: &str = "p4";

/// Depot path scanned when none is given on the command line.
pub const DEFAULT_DEPOT_PATH: &str = "//...";
pub const DEFAULT_DEPOT_OUTPUT: &str = "p4_writable_files.txt";

/// How many writable paths the local report lists before truncating.
pub const PREVIEW_LIMIT: usize = 10;

/// Perforce client to invoke, honouring `PERMSCAN_P4` when it is set and non-empty.
pub fn p4_program() -> PathBuf {
    std::env::var_os(P4_PROGRAM_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_P4_PROGRAM))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
