//! Perforce side of permscan: run the `p4` client, parse its output and
//! classify depot files by their `+w` type flag.

mod client;
mod error;
mod parse;
mod record;
mod scanner;

pub use client::{CommandRunner, P4Cli};
pub use error::{DepotError, HeadTypeError};
pub use parse::{parse_files_output, parse_head_type};
pub use record::{DepotFileRecord, WRITABLE_FLAG};
pub use scanner::{get_file_type, list_files, writable_files};
