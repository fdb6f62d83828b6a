use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Args;
use log::{debug, error};
use myls_fs::{FileRecord, InspectError, inspect, list_directory};
use myls_runtime::current_dir_target;

use crate::printer::{OutputFormat, RecordPrinter, make_printer};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Files to describe. With none, every entry of the current directory is
    /// described. A directory argument is described itself, not its contents.
    /// Words starting with `-` that are not options are taken as paths.
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Per-file problems are reported and skipped, so the exit status is always success.
pub fn run(args: ListArgs) -> ExitCode {
    if let Err(e) = execute(args) {
        error!("[list] {e:#}");
    }
    ExitCode::SUCCESS
}

fn execute(args: ListArgs) -> Result<()> {
    let mut printer = make_printer(args.format);
    list(&args.paths, printer.as_mut())?;
    printer.flush().context("flush output")
}

/// Describe `paths` in order, or the current directory when `paths` is empty.
pub fn list<P: RecordPrinter + ?Sized>(paths: &[PathBuf], printer: &mut P) -> Result<()> {
    list_from(current_dir_target(), paths, printer)
}

/// Like [`list`], listing `dir` when `paths` is empty.
fn list_from<P: RecordPrinter + ?Sized>(
    dir: &Path,
    paths: &[PathBuf],
    printer: &mut P,
) -> Result<()> {
    if paths.is_empty() {
        debug!("[list] no paths given, listing {:?}", dir);
        match list_directory(dir) {
            Ok(listing) => {
                for res in listing {
                    emit(printer, res)?;
                }
            }
            Err(e) => printer.print_error(&e).context("write error report")?,
        }
    } else {
        for path in paths {
            emit(printer, inspect(path))?;
        }
    }

    Ok(())
}

fn emit<P: RecordPrinter + ?Sized>(
    printer: &mut P,
    res: std::result::Result<FileRecord, InspectError>,
) -> Result<()> {
    match res {
        Ok(rec) => printer
            .print_record(&rec)
            .with_context(|| format!("write record for {}", rec.name.display())),
        Err(e) => printer.print_error(&e).context("write error report"),
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
