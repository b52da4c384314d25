//! Build command implementation
//!
//! The build command runs the complete pipeline:
//! 1. Partition the location list across the configured catalogs
//! 2. Close every named catalog's dependencies over the default catalog
//! 3. Gather the catalogs to emit
//! 4. Write catalog files and move bundles to each catalog's build path

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use multi_catalog::config::DEFAULT_CONFIG_FILE;
use multi_catalog::diagnostics::Diagnostics;
use multi_catalog::output::{OutputConfig, Status};
use multi_catalog::phases::{emit, orchestrator};

use super::{load_config, load_locations};

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the catalog configuration file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE, env = "MULTI_CATALOG_CONFIG")]
    pub config: PathBuf,

    /// JSON file with the locations produced by the asset build
    #[arg(short, long, value_name = "FILE", default_value = "locations.json", env = "MULTI_CATALOG_LOCATIONS")]
    pub locations: PathBuf,

    /// Override the build root from the configuration
    #[arg(long, value_name = "DIR")]
    pub build_root: Option<PathBuf>,

    /// Show what would be written without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Fail when a dependency cannot be resolved
    #[arg(long)]
    pub strict: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the build command
pub fn execute(args: BuildArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let start_time = Instant::now();

    let mut config = load_config(&args.config)?;
    if let Some(build_root) = args.build_root {
        config.build.build_root = build_root;
    }
    let locations = load_locations(&args.locations)?;
    let input_count = locations.len();

    let mut diagnostics = Diagnostics::new();
    let plan = orchestrator::execute(locations, &config, &mut diagnostics);

    if args.strict && plan.has_unresolved() {
        for warning in diagnostics.warnings() {
            eprintln!("{} {}", out.marker(Status::Error), warning.message);
        }
        bail!("Unresolved dependencies found (strict mode)");
    }

    let profile = config.profile();
    let target = emit::EmitTarget {
        build_root: &config.build.build_root,
        evaluator: &profile,
        dry_run: args.dry_run,
    };
    let report = emit::execute(&plan, &target)?;

    if args.quiet {
        return Ok(());
    }

    for warning in diagnostics.warnings() {
        println!("{} {}", out.marker(Status::Warn), warning.message);
    }
    let verb = if args.dry_run { "Would write" } else { "Wrote" };
    for (catalog, emitted) in plan.catalogs().iter().zip(&report.catalogs) {
        println!(
            "{} {} {} ({} locations) to {}",
            out.marker(Status::Write),
            verb,
            catalog.identifier,
            catalog.len(),
            emitted.catalog_file.display()
        );
        for m in &emitted.moves {
            println!("   {} -> {}", m.from.display(), m.to.display());
        }
    }
    println!(
        "{} Partitioned {} locations into {} catalogs, {} bundles relocated in {:.2?}",
        out.marker(Status::Ok),
        input_count,
        plan.catalogs().len(),
        report.moved_files(),
        start_time.elapsed()
    );

    Ok(())
}
