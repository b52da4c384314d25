//! # Clean Command Implementation
//!
//! Deletes the build directory of every configured catalog so the next build
//! starts from an empty output tree. The default catalog's build root is
//! left alone; it belongs to the asset build.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use multi_catalog::config::{MultipleCatalogsBuilder, DEFAULT_CONFIG_FILE};
use multi_catalog::output::{OutputConfig, Status};
use multi_catalog::phases::emit;

use super::load_config;

/// Delete catalog build directories
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Path to the catalog configuration file.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE, env = "MULTI_CATALOG_CONFIG")]
    pub config: PathBuf,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `clean` command.
pub fn execute(args: CleanArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = load_config(&args.config)?;

    let removed = emit::clean(&config.catalog_rules(), &config.profile())?;

    if args.quiet {
        return Ok(());
    }
    if removed.is_empty() {
        println!("{} Nothing to clean", out.marker(Status::Ok));
        return Ok(());
    }
    for (directory, files) in &removed {
        println!(
            "{} Removed {} ({} files)",
            out.marker(Status::Clean),
            directory.display(),
            files
        );
    }

    Ok(())
}
