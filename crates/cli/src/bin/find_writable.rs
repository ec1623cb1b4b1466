use std::process::ExitCode;

use clap::Parser;
use permscan_cli::commands::{LocalArgs, local};
use permscan_runtime::logging;

fn main() -> ExitCode {
    logging::init().ok();

    local::run(LocalArgs::parse())
}
