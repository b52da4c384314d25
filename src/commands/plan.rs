//! # Plan Command Implementation
//!
//! This module implements the `plan` subcommand, which partitions a location
//! list and displays the resulting catalogs as a tree, without writing
//! anything.
//!
//! ```text
//! Catalog plan for: locations.json
//! ├─ AddressablesMainContentCatalog (catalog.json, 2 locations)
//! │  ├─ Font
//! │  └─ ui_bundle
//! └─ UI/ (UI.json, 2 locations)
//!    ├─ UI/Icon
//!    └─ ui_bundle
//! ```
//!
//! Unresolved dependencies are listed under the catalog that needed them.

use anyhow::{anyhow, Result};
use clap::Args;
use ptree::{print_tree, TreeItem};
use std::borrow::Cow;
use std::io::Write;
use std::path::PathBuf;

use multi_catalog::config::DEFAULT_CONFIG_FILE;
use multi_catalog::diagnostics::LogSink;
use multi_catalog::phases::{orchestrator, CatalogPlan};

use super::{load_config, load_locations};

/// Display the catalogs a build would produce
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the catalog configuration file.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE, env = "MULTI_CATALOG_CONFIG")]
    pub config: PathBuf,

    /// JSON file with the locations produced by the asset build.
    #[arg(short, long, value_name = "FILE", default_value = "locations.json", env = "MULTI_CATALOG_LOCATIONS")]
    pub locations: PathBuf,

    /// Only show catalog names and sizes, not their locations.
    #[arg(long)]
    pub summary: bool,
}

/// Execute the `plan` command.
pub fn execute(args: PlanArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let locations = load_locations(&args.locations)?;

    let plan = orchestrator::execute(locations, &config, &mut LogSink);

    println!("Catalog plan for: {}", args.locations.display());
    let tree_root = build_tree(&plan, args.summary);
    for child in &tree_root.children {
        print_tree(child).map_err(|e| anyhow!("Failed to display tree: {}", e))?;
    }

    Ok(())
}

/// Build the display tree of a plan.
fn build_tree(plan: &CatalogPlan, summary: bool) -> TreeNode {
    let children = plan
        .catalogs()
        .iter()
        .map(|catalog| {
            let label = format!(
                "{} ({}, {} locations)",
                catalog.identifier,
                catalog.filename,
                catalog.len()
            );
            if summary {
                return TreeNode::leaf(label);
            }
            let mut children: Vec<TreeNode> = plan
                .primary_keys(catalog)
                .into_iter()
                .map(|key| {
                    if key.is_empty() {
                        TreeNode::leaf("<no key>")
                    } else {
                        TreeNode::leaf(key)
                    }
                })
                .collect();
            children.extend(
                catalog
                    .unresolved
                    .iter()
                    .map(|key| TreeNode::leaf(format!("unresolved: {}", key))),
            );
            TreeNode { label, children }
        })
        .collect();

    TreeNode {
        label: String::new(),
        children,
    }
}

/// Tree node structure for ptree visualization
#[derive(Clone, Debug)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: vec![],
        }
    }
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: Write>(&self, f: &mut W, _style: &ptree::Style) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}
