use std::{
    io::{self, Write},
    os::unix::ffi::OsStrExt,
};

use clap::ValueEnum;
use myls_fs::{FileRecord, InspectError};
use myls_runtime::PROGRAM_NAME;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One labelled block per file.
    #[default]
    Human,
    /// NDJSON (one JSON object per file) for machine consumption.
    Json,
}

/// Output boundary of a listing run.
///
/// Records go to the output stream, errors to the error stream, each as soon
/// as it is produced.
pub trait RecordPrinter {
    fn print_record(&mut self, rec: &FileRecord) -> io::Result<()>;

    fn print_error(&mut self, err: &InspectError) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

/// Writes one error in the `myls: ...` form, padded by blank lines.
fn write_error<E: Write>(err_out: &mut E, err: &InspectError) -> io::Result<()> {
    writeln!(err_out)?;
    writeln!(err_out, "{PROGRAM_NAME}: {err}")?;
    writeln!(err_out)
}

pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl HumanPrinter<io::Stdout, io::Stderr> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> RecordPrinter for HumanPrinter<W, E> {
    fn print_record(&mut self, rec: &FileRecord) -> io::Result<()> {
        let out = &mut self.out;

        writeln!(out)?;
        // Names are written byte for byte; they need not be UTF-8.
        out.write_all(b"File Name: ")?;
        out.write_all(rec.name.as_os_str().as_bytes())?;
        writeln!(out)?;
        writeln!(out, "User Name of Owner Owner: {}", rec.user)?;
        writeln!(out, "Group Name of Group Owner: {}", rec.group)?;
        writeln!(out, "Type of file: {}", rec.file_type)?;
        writeln!(out, "Full Access Permission: {}", rec.permissions)?;
        writeln!(out, "Size of file (bytes): {}", rec.size)?;
        writeln!(out, "Inode num: {}", rec.inode)?;
        writeln!(out, "Device Major Number: {}", rec.dev_major)?;
        writeln!(out, "Device Minor Number: {}", rec.dev_minor)?;
        writeln!(out, "No of links: {}", rec.links)?;
        writeln!(out, "Last Access Time: {}", rec.accessed)?;
        writeln!(out, "Last Modification Time: {}", rec.modified)?;
        writeln!(out, "Last Time File Status Change: {}", rec.changed)?;
        writeln!(out)
    }

    fn print_error(&mut self, err: &InspectError) -> io::Result<()> {
        write_error(&mut self.err, err)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl JsonPrinter<io::Stdout, io::Stderr> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> RecordPrinter for JsonPrinter<W, E> {
    fn print_record(&mut self, rec: &FileRecord) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, rec)?;
        writeln!(self.out)
    }

    // Errors stay human-readable; only records are machine output.
    fn print_error(&mut self, err: &InspectError) -> io::Result<()> {
        write_error(&mut self.err, err)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

pub fn make_printer(format: OutputFormat) -> Box<dyn RecordPrinter> {
    match format {
        OutputFormat::Human => Box::new(HumanPrinter::stdout()),
        OutputFormat::Json => Box::new(JsonPrinter::stdout()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
