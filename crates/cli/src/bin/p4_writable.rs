use std::process::ExitCode;

use clap::Parser;
use permscan_cli::commands::{DepotArgs, depot};
use permscan_runtime::logging;

fn main() -> ExitCode {
    logging::init().ok();

    depot::run(DepotArgs::parse())
}
