use anyhow::{Context, Result};
use clap::Parser;

use calisel::cli::{self, Args, CliConfig};
use calisel::DataSelector;

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging; RUST_LOG still overrides the flag-derived level
    env_logger::Builder::new()
        .filter_level(cli::log_level(&args))
        .parse_default_env()
        .init();

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(1);
        }
    };

    log::debug!("selecting from {}", config.input_description());

    let selector = match DataSelector::from_config(&config.selection_config) {
        Ok(selector) => selector,
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(1);
        }
    };

    emit(&config, &selector)
}

fn emit(config: &CliConfig, selector: &DataSelector) -> Result<()> {
    let args = &config.args;

    if let Some(path) = &args.dump {
        selector
            .dump(path)
            .with_context(|| format!("Failed to dump data list to {}", path.display()))?;
        // stdout carries only the report in JSON mode
        cli::show_success(
            &format!("Wrote {} entries to {}", selector.len(), path.display()),
            config.is_quiet() || args.json,
        );
    }

    if args.list && !args.json {
        print!("{}", selector.listing());
    }

    if args.json {
        let report = serde_json::json!({
            "stats": selector.stats(),
            "data_list": selector.data_list(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.stats {
        output_statistics(selector);
    }

    if config.prints_paths() {
        for entry in selector.data_list() {
            println!("{}", entry);
        }
    }

    Ok(())
}

fn output_statistics(selector: &DataSelector) {
    let stats = selector.stats();
    println!("\nSelection Statistics:");
    println!("Source: {} ({})", stats.source, stats.source_kind);
    println!("Discovered: {}", stats.discovered);
    println!("Selected: {}", stats.selected);
    if stats.truncated {
        println!("Truncated: yes");
    }
}
