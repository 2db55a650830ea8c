//! Command-line interface module

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::error::{SelectionError, SelectionErrorKind, SelectionResult};
use crate::selector::{SamplingMode, SelectionConfig};

/// Main CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "calisel")]
#[command(about = "Select calibration input files from a dataset directory or list file")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Dataset directory scanned recursively for images and .npy/.npz files
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Number of inputs to select (0 keeps all)
    #[arg(long, default_value_t = 0)]
    pub num: usize,

    /// List file with one input path per line; overrides --dataset
    #[arg(long)]
    pub data_list: Option<PathBuf>,

    /// Write the selected paths to this file
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Shuffle with this seed before truncating to --num
    #[arg(long)]
    pub shuffle_seed: Option<u64>,

    /// Visit dataset entries in file name order
    #[arg(long)]
    pub sorted: bool,

    /// Print the indexed selection listing
    #[arg(long)]
    pub list: bool,

    /// Output selection statistics
    #[arg(long)]
    pub stats: bool,

    /// Print statistics and selected paths as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub selection_config: SelectionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> SelectionResult<Self> {
        let selection_config = Self::create_selection_config(&args)?;

        Ok(Self {
            args,
            selection_config,
        })
    }

    /// Create selection configuration from CLI arguments
    fn create_selection_config(args: &Args) -> SelectionResult<SelectionConfig> {
        let sampling = match args.shuffle_seed {
            Some(seed) => SamplingMode::Shuffle { seed },
            None => SamplingMode::Prefix,
        };

        let config = SelectionConfig::new(args.dataset.clone(), args.num, args.data_list.clone())
            .with_sampling(sampling)
            .with_sorted_scan(args.sorted);

        config.validate()?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// True when no explicit output mode was requested and paths go to stdout
    pub fn prints_paths(&self) -> bool {
        !(self.args.list || self.args.stats || self.args.json || self.args.dump.is_some())
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        match self.selection_config.source() {
            Ok(source) => format!("{} '{}'", source.kind(), source.path().display()),
            Err(_) => "no input specified".to_string(),
        }
    }
}

/// Log level implied by --verbose / --quiet
pub fn log_level(args: &Args) -> LevelFilter {
    if args.verbose {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    }
}

/// Show a success message (if not in quiet mode)
pub fn show_success(message: &str, quiet: bool) {
    if !quiet {
        println!("✓ {}", message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &SelectionError) {
    eprintln!("✗ {}", error.user_message());

    match error {
        SelectionError::Config(SelectionErrorKind::NoInputs { .. }) => {
            eprintln!("\nTip: recognized inputs are .jpg .bmp .png .jpeg .jfif .npy .npz files");
        }
        SelectionError::Config(SelectionErrorKind::NoSource) => {
            eprintln!("\nTry 'calisel --help' for usage information.");
        }
        _ => {}
    }
}
