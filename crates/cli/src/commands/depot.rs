use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use log::{debug, error, info};
use permscan_depot::{CommandRunner, DepotError, DepotFileRecord, P4Cli, list_files, writable_files};
use permscan_runtime::{DEFAULT_DEPOT_OUTPUT, DEFAULT_DEPOT_PATH, progress};

use crate::{
    commands::CommandResult,
    printer::{DEPOT_RULE_WIDTH, HumanPrinter, save_depot_output},
};

const EXAMPLES: &str = "\
Examples:
  p4-writable                              # Check all files in depot
  p4-writable //depot/main/...             # Check specific depot path
  p4-writable -o results.txt               # Save to custom output file
  p4-writable //depot/main/... -o my_files.txt

Set PERMSCAN_P4 to use a p4 executable that is not on the PATH.";

#[derive(Debug, Parser)]
#[command(
    name = "p4-writable",
    version,
    about = "Find all Perforce files with the +w (writable) flag set on the server.",
    after_help = EXAMPLES
)]
pub struct DepotArgs {
    /// Depot path to search
    #[arg(default_value = DEFAULT_DEPOT_PATH)]
    pub depot_path: String,

    /// Output file for results
    #[arg(long, short = 'o', value_name = "PATH", default_value = DEFAULT_DEPOT_OUTPUT)]
    pub output: PathBuf,

    /// Hide progress bars
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub fn run(args: DepotArgs) -> ExitCode {
    let client = P4Cli::from_env();
    let stdout = io::stdout();
    let stderr = io::stderr();

    match execute(&args, &client, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[p4-writable] {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Runs one depot scan against `client`, writing the report to `out` and
/// client diagnostics to `err`.
///
/// Any client failure ends the run with exit status 1 before the output file
/// is touched.
pub fn execute<C, W, E>(
    args: &DepotArgs,
    client: &C,
    out: &mut W,
    err: &mut E,
) -> CommandResult<ExitCode>
where
    C: CommandRunner,
    W: Write,
    E: Write,
{
    let mut printer = HumanPrinter::new(out, DEPOT_RULE_WIDTH);

    printer.line("Perforce Writable File Finder")?;
    printer.rule()?;

    let matches = match scan(&mut printer, err, client, args) {
        Ok(m) => m,
        Err(e) => match e.downcast::<DepotError>() {
            Ok(depot_err) => {
                printer.flush()?;
                report_client_error(err, &depot_err)?;
                return Ok(ExitCode::FAILURE);
            }
            Err(other) => return Err(other),
        },
    };

    printer.depot_matches(&matches)?;

    save_depot_output(&args.output, &matches)
        .with_context(|| format!("failed to write results to {}", args.output.display()))?;
    printer.blank()?;
    printer.line(format_args!("Results saved to {}", args.output.display()))?;

    printer.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn scan<C, W, E>(
    printer: &mut HumanPrinter<W>,
    err: &mut E,
    client: &C,
    args: &DepotArgs,
) -> CommandResult<Vec<DepotFileRecord>>
where
    C: CommandRunner,
    W: Write,
    E: Write,
{
    printer.line(format_args!("Fetching files from {}...", args.depot_path))?;
    let files = list_files(client, &args.depot_path)?;
    printer.line(format_args!("Found {} files in depot", files.len()))?;
    printer.flush()?;

    let pb = progress::bar(files.len(), "Checking file flags", args.quiet);
    let mut warn_failure: Option<io::Error> = None;
    let matches = writable_files(client, pb.wrap_iter(files.iter()), |path, e| {
        let res = pb.suspend(|| writeln!(err, "Warning: Could not check flags for {path}: {e}"));
        if let Err(io_err) = res
            && warn_failure.is_none()
        {
            warn_failure = Some(io_err);
        }
    });
    pb.finish_and_clear();

    let matches = matches?;
    if let Some(io_err) = warn_failure {
        return Err(io_err.into());
    }
    info!("[depot] {} of {} files carry +w", matches.len(), files.len());
    Ok(matches)
}

fn report_client_error<E: Write>(err: &mut E, e: &DepotError) -> io::Result<()> {
    debug!("[p4] client failure: {e:?}");
    match e {
        DepotError::ToolNotFound { .. } => writeln!(err, "Error: {e}"),
        DepotError::CommandFailed { .. } | DepotError::Io { .. } => {
            writeln!(err, "Error running p4 command: {e}")
        }
    }
}

#[cfg(test)]
#[path = "depot_tests.rs"]
mod tests;
