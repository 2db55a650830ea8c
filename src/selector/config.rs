//! Configuration options for calibration data selection

use std::path::{Path, PathBuf};

use crate::error::{SelectionErrorKind, SelectionResult};
use crate::selector::sampling::SamplingMode;

/// Where the data list is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A pre-built manifest file
    Manifest(PathBuf),
    /// A directory scanned recursively for calibration files
    Directory(PathBuf),
}

impl DataSource {
    pub fn path(&self) -> &Path {
        match self {
            DataSource::Manifest(path) | DataSource::Directory(path) => path,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DataSource::Manifest(_) => "manifest",
            DataSource::Directory(_) => "directory",
        }
    }
}

/// Parameters for building a data list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionConfig {
    /// Directory to scan for calibration files
    pub dataset: Option<PathBuf>,
    /// Maximum number of entries to keep (0 = no limit)
    pub num: usize,
    /// Manifest file; takes precedence over `dataset`
    pub data_list_file: Option<PathBuf>,
    pub sampling: SamplingMode,
    /// Visit directory entries in file name order
    pub sort_scan: bool,
}

impl SelectionConfig {
    pub fn new(dataset: Option<PathBuf>, num: usize, data_list_file: Option<PathBuf>) -> Self {
        Self {
            dataset,
            num,
            data_list_file,
            ..Self::default()
        }
    }

    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_sorted_scan(mut self, sorted: bool) -> Self {
        self.sort_scan = sorted;
        self
    }

    /// Resolve the data source. Empty paths count as absent.
    pub fn source(&self) -> SelectionResult<DataSource> {
        if let Some(list) = non_empty(&self.data_list_file) {
            Ok(DataSource::Manifest(list.to_path_buf()))
        } else if let Some(dir) = non_empty(&self.dataset) {
            Ok(DataSource::Directory(dir.to_path_buf()))
        } else {
            Err(SelectionErrorKind::NoSource.into())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SelectionResult<()> {
        self.source().map(|_| ())
    }
}

fn non_empty(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| !p.as_os_str().is_empty())
}
