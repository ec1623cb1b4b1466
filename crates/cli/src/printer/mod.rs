use std::{
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use permscan_depot::DepotFileRecord;
use permscan_fs::FileRecord;

/// Rule width used by the local scanner's report.
pub const LOCAL_RULE_WIDTH: usize = 60;
/// Rule width used by the depot scanner's report.
pub const DEPOT_RULE_WIDTH: usize = 50;

/// Human-readable report writer shared by both scanners.
pub struct HumanPrinter<W: Write> {
    out: W,
    rule_width: usize,
}

impl<W: Write> HumanPrinter<W> {
    pub fn new(out: W, rule_width: usize) -> Self {
        Self { out, rule_width }
    }

    pub fn line(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "{msg}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(self.rule_width))
    }

    /// Title framed by rules, preceded by a blank line.
    pub fn heading(&mut self, title: impl Display) -> io::Result<()> {
        self.blank()?;
        self.rule()?;
        self.line(title)?;
        self.rule()
    }

    /// Writable local files: the first `limit` paths, then a note on the rest.
    pub fn local_matches(&mut self, files: &[FileRecord], limit: usize) -> io::Result<()> {
        self.heading(format_args!("Found {} writable files", files.len()))?;
        self.blank()?;

        for f in files.iter().take(limit) {
            self.line(f.path.display())?;
        }

        if files.len() > limit {
            self.blank()?;
            self.line(format_args!("... and {} more files", files.len() - limit))?;
        }

        Ok(())
    }

    /// Every flagged depot file with its type string.
    pub fn depot_matches(&mut self, matches: &[DepotFileRecord]) -> io::Result<()> {
        self.heading(format_args!("Files with +w flag: {}", matches.len()))?;

        if matches.is_empty() {
            return self.line("No files found with +w flag");
        }

        for m in matches {
            self.line(m.display_line())?;
        }

        Ok(())
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Writes one line per item to `path`, replacing any existing file.
pub fn save_lines<I, S>(path: &Path, lines: I) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: Display,
{
    let mut w = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(w, "{line}")?;
    }
    w.flush()
}

/// One path per line. Paths are written as their raw bytes on Unix so that
/// non-UTF-8 names survive; elsewhere a path that is not valid Unicode is an
/// `InvalidData` error rather than a lossy rewrite.
pub fn save_local_output(path: &Path, files: &[FileRecord]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for f in files {
        w.write_all(path_bytes(&f.path)?)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> io::Result<&[u8]> {
    use std::os::unix::ffi::OsStrExt;

    Ok(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> io::Result<&[u8]> {
    path.to_str().map(str::as_bytes).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("path is not valid Unicode: {}", path.display()),
        )
    })
}

pub fn save_depot_output(path: &Path, matches: &[DepotFileRecord]) -> io::Result<()> {
    save_lines(path, matches.iter().map(DepotFileRecord::display_line))
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
