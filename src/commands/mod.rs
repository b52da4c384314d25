//! # CLI Command Implementations
//!
//! Each subcommand of the `multi-catalog` tool lives in its own file and
//! contains:
//! - An `Args` struct defining the command-specific options, derived using
//!   `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `multi_catalog` library.
//!
//! Inputs shared by several commands are loaded through the helpers below.

pub mod build;
pub mod clean;
pub mod completions;
pub mod plan;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;

use multi_catalog::config::{self, Config};
use multi_catalog::location::{self, Location};

/// Load the configuration file, with the path in the error message.
pub fn load_config(path: &Path) -> Result<Config> {
    config::from_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Load the location list, with the path in the error message.
pub fn load_locations(path: &Path) -> Result<Vec<Location>> {
    location::from_file(path)
        .with_context(|| format!("Failed to load locations from {}", path.display()))
}
