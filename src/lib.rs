//! Calibration data selection
//!
//! Builds a bounded, ordered list of calibration input files for a
//! quantization pipeline, from either a manifest file or a recursive scan of
//! a dataset directory.

pub mod cli;
pub mod error;
pub mod selector;

// Re-export commonly used types
pub use error::{SelectionError, SelectionErrorKind, SelectionResult};
pub use selector::{DataSelector, DataSource, SamplingMode, SelectionConfig, SelectionStats};

/// Select calibration inputs and return the resulting paths
pub fn select_inputs(config: &SelectionConfig) -> SelectionResult<Vec<String>> {
    Ok(DataSelector::from_config(config)?.into_data_list())
}
