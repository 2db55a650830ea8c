//! Plain-text manifest files: one record per line, the first field is a path

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{SelectionError, SelectionResult};

/// Extract the path field of a manifest line, or `None` for a blank line
pub fn parse_line(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Read every entry of a manifest in line order.
///
/// Trailing fields (labels and the like) are ignored.
pub fn read_manifest(path: &Path) -> SelectionResult<Vec<String>> {
    let file = File::open(path).map_err(|e| SelectionError::io(e, path))?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| SelectionError::io(e, path))?;
        if let Some(entry) = parse_line(&line) {
            entries.push(entry.to_string());
        }
    }

    log::debug!("read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Write entries to `path`, one per line, replacing any existing content
pub fn write_manifest<S: AsRef<str>>(path: &Path, entries: &[S]) -> SelectionResult<()> {
    let file = File::create(path).map_err(|e| SelectionError::io(e, path))?;
    let mut writer = BufWriter::new(file);

    for entry in entries {
        writeln!(writer, "{}", entry.as_ref()).map_err(|e| SelectionError::io(e, path))?;
    }
    writer.flush().map_err(|e| SelectionError::io(e, path))?;

    Ok(())
}
