//! Thin filesystem helpers for line-oriented files.

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::{IoError, IoResult};

//-----------------------------------------------------------------------------
// File Helpers
//-----------------------------------------------------------------------------

fn file_error(path: &Path) -> impl FnOnce(std::io::Error) -> IoError + '_ {
    move |source| IoError::File {
        path: path.display().to_string(),
        source,
    }
}

/// Reads a whole file as a vector of lines.
pub fn read_lines(path: impl AsRef<Path>) -> IoResult<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(file_error(path))?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Writes `lines` to a file, one per line with a trailing newline. With
/// `append` set the lines are added to the end of an existing file,
/// otherwise the file is truncated first.
pub fn write_lines(
    path: impl AsRef<Path>,
    lines: &[String],
    append: bool,
) -> IoResult<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(file_error(path))?;
    for line in lines {
        writeln!(file, "{line}").map_err(file_error(path))?;
    }
    Ok(())
}

/// Builds the simulation log file name from the input file names and a
/// timestamp: `log-<net>-<events>_<YYYY-MM-DD_HH-MM-SS>.txt`. The input
/// names are reduced to their file stems.
pub fn log_file_name(
    netfile: impl AsRef<Path>,
    eventfile: impl AsRef<Path>,
    timestamp: DateTime<Local>,
) -> String {
    let stem = |p: &Path| {
        p.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_owned())
    };
    format!(
        "log-{}-{}_{}.txt",
        stem(netfile.as_ref()),
        stem(eventfile.as_ref()),
        timestamp.format("%Y-%m-%d_%H-%M-%S")
    )
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------
