//! Calibration data selection
//!
//! A [`DataSelector`] builds an ordered list of input file paths, either read
//! from a manifest or discovered by scanning a directory, and truncates it to
//! the requested sample size.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::error::{SelectionErrorKind, SelectionResult};

pub mod config;
pub mod filter;
pub mod manifest;
pub mod sampling;
pub mod scan;

pub use config::{DataSource, SelectionConfig};
pub use sampling::SamplingMode;

/// Summary of a completed selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionStats {
    pub source: String,
    pub source_kind: &'static str,
    pub discovered: usize,
    pub selected: usize,
    pub truncated: bool,
    pub sampling: SamplingMode,
}

/// An immutable, non-empty list of calibration inputs
#[derive(Debug, Clone)]
pub struct DataSelector {
    data_list: Vec<String>,
    source: DataSource,
    discovered: usize,
    sampling: SamplingMode,
}

impl DataSelector {
    /// Build a selector the simple way: directory and/or manifest plus a count.
    pub fn new(
        dataset: Option<&Path>,
        num: usize,
        data_list_file: Option<&Path>,
    ) -> SelectionResult<Self> {
        let config = SelectionConfig::new(
            dataset.map(Path::to_path_buf),
            num,
            data_list_file.map(Path::to_path_buf),
        );
        Self::from_config(&config)
    }

    /// Build a selector from a full configuration.
    ///
    /// Fails if no source is configured, if the source yields no entries,
    /// or if the manifest or directory cannot be read.
    pub fn from_config(config: &SelectionConfig) -> SelectionResult<Self> {
        let source = config.source()?;

        let raw = match &source {
            DataSource::Manifest(path) => manifest::read_manifest(path)?,
            DataSource::Directory(dir) => scan::find_calibration_files(dir, config.sort_scan)?,
        };

        if raw.is_empty() {
            return Err(SelectionErrorKind::no_inputs(source.path().display().to_string()).into());
        }

        let discovered = raw.len();
        let data_list = config.sampling.apply(raw, config.num);
        log::debug!(
            "selected {} of {} entries from {} {}",
            data_list.len(),
            discovered,
            source.kind(),
            source.path().display()
        );

        Ok(Self {
            data_list,
            source,
            discovered,
            sampling: config.sampling,
        })
    }

    pub fn data_list(&self) -> &[String] {
        &self.data_list
    }

    pub fn into_data_list(self) -> Vec<String> {
        self.data_list
    }

    pub fn len(&self) -> usize {
        self.data_list.len()
    }

    /// A constructed selector is never empty
    pub fn is_empty(&self) -> bool {
        self.data_list.is_empty()
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn stats(&self) -> SelectionStats {
        SelectionStats {
            source: self.source.path().display().to_string(),
            source_kind: self.source.kind(),
            discovered: self.discovered,
            selected: self.data_list.len(),
            truncated: self.data_list.len() < self.discovered,
            sampling: self.sampling,
        }
    }

    /// Human-readable listing, one ` <index> path` line per entry
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for (i, entry) in self.data_list.iter().enumerate() {
            let _ = writeln!(out, " <{}> {}", i, entry);
        }
        out
    }

    /// Write the list to `path` as a manifest, overwriting existing content
    pub fn dump(&self, path: &Path) -> SelectionResult<()> {
        manifest::write_manifest(path, &self.data_list)?;
        log::info!("dumped {} entries to {}", self.data_list.len(), path.display());
        Ok(())
    }
}
