use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use permscan_fs::{
    FileRecord, ScanError, check_root, collect_files, filter_writable, make_readonly_all,
};
use permscan_runtime::{PREVIEW_LIMIT, progress};

use crate::{
    commands::CommandResult,
    printer::{HumanPrinter, LOCAL_RULE_WIDTH, save_local_output},
    prompt,
};

#[derive(Debug, Parser)]
#[command(
    name = "find-writable",
    version,
    about = "Find all writable files in a directory recursively"
)]
pub struct LocalArgs {
    /// Directory path to scan
    pub directory: PathBuf,

    /// Output file to save results (optional)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Make all writable files readonly
    #[arg(long, short = 'r')]
    pub readonly: bool,

    /// Hide progress bars
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub fn run(args: LocalArgs) -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();

    match execute(&args, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[find-writable] {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Runs one scan with the confirmation answer read from `input` and the
/// report written to `out`.
pub fn execute<R, W>(args: &LocalArgs, input: &mut R, out: &mut W) -> CommandResult<ExitCode>
where
    R: BufRead,
    W: Write,
{
    let mut printer = HumanPrinter::new(out, LOCAL_RULE_WIDTH);

    match check_root(&args.directory) {
        Ok(()) => {}
        Err(e @ (ScanError::NotFound(_) | ScanError::NotADirectory(_))) => {
            printer.line(format_args!("Error: {e}"))?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => return Err(e.into()),
    }

    printer.line(format_args!(
        "Scanning directory: {}",
        args.directory.display()
    ))?;
    let files = collect_files(&args.directory)?;
    printer.line(format_args!("Found {} files total", files.len()))?;

    printer.blank()?;
    printer.line("Checking write permissions...")?;
    printer.flush()?;
    let writable = check_files(files, args.quiet);

    printer.local_matches(&writable, PREVIEW_LIMIT)?;

    if args.readonly && !writable.is_empty() {
        revoke_write(&mut printer, input, &writable, args.quiet)?;
    }

    if let Some(path) = &args.output {
        save_local_output(path, &writable)
            .with_context(|| format!("failed to write results to {}", path.display()))?;
        printer.blank()?;
        printer.line(format_args!("Results saved to: {}", path.display()))?;
    }

    printer.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn check_files(files: Vec<FileRecord>, quiet: bool) -> Vec<FileRecord> {
    let pb = progress::bar(files.len(), "Checking files", quiet);
    let writable = filter_writable(pb.wrap_iter(files.into_iter()));
    pb.finish_and_clear();

    info!("[local] {} writable files", writable.len());
    writable
}

fn revoke_write<R, W>(
    printer: &mut HumanPrinter<W>,
    input: &mut R,
    writable: &[FileRecord],
    quiet: bool,
) -> CommandResult<()>
where
    R: BufRead,
    W: Write,
{
    printer.blank()?;
    printer.rule()?;

    let question = format!(
        "Are you sure you want to make {} files readonly?",
        writable.len()
    );
    if !prompt::confirm(input, printer.writer(), &question)? {
        printer.line("Operation cancelled")?;
        return Ok(());
    }

    printer.blank()?;
    printer.line("Making files readonly...")?;
    printer.flush()?;

    let pb = progress::bar(writable.len(), "Setting readonly", quiet);
    let tally = make_readonly_all(pb.wrap_iter(writable.iter()));
    pb.finish_and_clear();

    printer.blank()?;
    printer.line(format_args!(
        "Successfully set {} files to readonly",
        tally.successful
    ))?;
    if tally.failed > 0 {
        printer.line(format_args!("Failed to modify {} files", tally.failed))?;
    }

    Ok(())
}

#[cfg(all(test, unix))]
#[path = "local_tests.rs"]
mod tests;
