//! Bulk loading of `key,value` lines into a [`Table`].
//!
//! The first comma separates key from value; any later commas belong to the
//! value. Lines without a comma, with an empty key, or with an empty value
//! are skipped. So are lines that are not valid UTF-8. Skipped lines never
//! abort the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::table::Table;

/// Outcome of a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines inserted into the table.
    pub loaded: usize,
    /// Lines that did not parse.
    pub skipped: usize,
}

/// Split a record at its first comma.
///
/// Returns `None` unless both the key and the value are non-empty.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (key, value) = line.split_once(',')?;
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Insert every well-formed line of `reader` into `table`, in order.
///
/// On a read error, entries inserted before the failure stay in the table.
pub fn load_reader<R: BufRead>(reader: R, table: &mut Table) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (lineno, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let parsed = std::str::from_utf8(&raw).ok().and_then(parse_line);
        match parsed {
            Some((key, value)) => {
                table.insert(key, value);
                report.loaded += 1;
            }
            None => {
                log::debug!("skipping malformed line {}", lineno + 1);
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Open `path` and load it with [`load_reader`].
pub fn load_file(path: impl AsRef<Path>, table: &mut Table) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let report = load_reader(BufReader::new(file), table)?;
    log::info!(
        "loaded {} entries from {}",
        report.loaded,
        path.display()
    );
    if report.skipped > 0 {
        log::warn!(
            "skipped {} malformed lines in {}",
            report.skipped,
            path.display()
        );
    }
    Ok(report)
}
