use std::path::Path;
use walkdir::WalkDir;

use crate::error::{SelectionError, SelectionResult};
use crate::selector::filter::is_calibration_file_name;

/// Find calibration files at any depth under `dir`.
///
/// Only regular files are matched; symlinks are neither followed nor matched.
/// Files whose path is not valid UTF-8 cannot be listed and are skipped.
/// With `sorted` set, entries within each directory are visited in file name order.
pub fn find_calibration_files(dir: &Path, sorted: bool) -> SelectionResult<Vec<String>> {
    if !dir.is_dir() {
        if dir.exists() {
            return Err(SelectionError::configuration(format!(
                "dataset path is not a directory: {}",
                dir.display()
            )));
        }
        return Err(SelectionError::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "dataset directory not found"),
            dir,
        ));
    }

    let mut walker = WalkDir::new(dir).follow_links(false);
    if sorted {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_calibration_file_name(&entry.file_name().to_string_lossy()) {
            continue;
        }
        match entry.path().to_str() {
            Some(path) => files.push(path.to_string()),
            None => log::warn!("skipping non UTF-8 path: {}", entry.path().display()),
        }
    }

    log::debug!("scanned {}: {} calibration files", dir.display(), files.len());
    Ok(files)
}
