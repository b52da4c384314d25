//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks a
//! `multi-catalog.yaml` configuration file without building anything.
//!
//! ## Functionality
//!
//! - **Configuration Parsing**: Parses the configuration file and reports
//!   parse errors together with a hint where one is available.
//! - **Rule Checks**: Flags catalogs that match nothing, collide on name or
//!   file name, or reference unknown content groups.
//! - **Population Preview**: With `--locations`, partitions the given
//!   location list and reports unresolved dependencies.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;

use multi_catalog::config::{self, MultipleCatalogsBuilder, DEFAULT_CONFIG_FILE};
use multi_catalog::diagnostics::Diagnostics;
use multi_catalog::output::{OutputConfig, Status};
use multi_catalog::phases::orchestrator;

use super::load_locations;

/// Validate a multi-catalog.yaml configuration file
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE, env = "MULTI_CATALOG_CONFIG")]
    pub config: PathBuf,

    /// Also partition this location list and report the catalog populations.
    #[arg(short, long, value_name = "FILE")]
    pub locations: Option<PathBuf>,

    /// Use strict validation (fail on warnings).
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `validate` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config_path = &args.config;
    println!(
        "{} Validating configuration: {}",
        out.marker(Status::Scan),
        config_path.display()
    );

    let config = match config::from_file(config_path) {
        Ok(config) => {
            println!(
                "{} Configuration file parsed successfully",
                out.marker(Status::Ok)
            );
            config
        }
        Err(e) => {
            println!(
                "{} Configuration parsing failed: {}",
                out.marker(Status::Error),
                e
            );
            return Err(anyhow!("Configuration parsing failed: {}", e));
        }
    };

    let rules = config.catalog_rules();
    println!("\n{} Configuration Summary:", out.marker(Status::Info));
    println!("   Catalog rules: {}", rules.len());
    for rule in &rules {
        println!("   - {} -> {}", rule.name, rule.filename);
    }
    println!("   Content groups: {}", config.content_groups.len());

    let issues = config::validate(&config);
    let mut has_warnings = !issues.is_empty();
    for issue in &issues {
        println!("{} {}", out.marker(Status::Warn), issue);
    }

    if let Some(locations_path) = &args.locations {
        let locations = load_locations(locations_path)?;
        let mut diagnostics = Diagnostics::new();
        let plan = orchestrator::execute(locations, &config, &mut diagnostics);

        println!("\n{} Catalog populations:", out.marker(Status::Info));
        for catalog in plan.catalogs() {
            println!("   {}: {} locations", catalog.identifier, catalog.len());
        }
        for warning in diagnostics.warnings() {
            println!("{} {}", out.marker(Status::Warn), warning.message);
            has_warnings = true;
        }
    }

    println!();
    if has_warnings && args.strict {
        println!(
            "{} Configuration has warnings (strict mode enabled)",
            out.marker(Status::Error)
        );
        return Err(anyhow!("Configuration validation failed in strict mode"));
    }

    if has_warnings {
        println!(
            "{} Configuration is valid but has warnings",
            out.marker(Status::Warn)
        );
    } else {
        println!("{} Configuration is valid", out.marker(Status::Ok));
    }

    Ok(())
}
