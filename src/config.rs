//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the
//! `multi-catalog.yaml` configuration file, as well as the logic for parsing
//! and checking it.
//!
//! ## Key Components
//!
//! - **`Config`**: The whole file: build settings, the build mode selecting
//!   which flavor of catalog rules to produce, and the content-group
//!   registry used by group rules.
//!
//! - **`BuildMode`**: Either a list of group catalogs or a list of address
//!   prefixes. Both are turned into the same ordered `Vec<CatalogRule>` by
//!   [`MultipleCatalogsBuilder::catalog_rules`].
//!
//! ## Example
//!
//! ```yaml
//! build:
//!   build_root: Library/aa/Linux
//!   profile:
//!     BuildTarget: StandaloneLinux64
//! mode:
//!   groups:
//!     - name: East
//!       groups: [EastAssets]
//!       build_path: ServerData/[BuildTarget]/East
//!       runtime_load_path: Catalogs/East
//! content_groups:
//!   - name: EastAssets
//!     entries:
//!       - guid: 1f0e
//!         bundle_file_id: "{UnityEngine.AddressableAssets.Addressables.RuntimePath}/east.bundle"
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::content::{BuildContext, ContentGroup};
use crate::descriptor::{DEFAULT_CATALOG_FILENAME, DEFAULT_CATALOG_ID};
use crate::error::{Error, Result};
use crate::path::join_runtime_path;
use crate::profile::ProfileVariables;
use crate::rewrite::DEFAULT_PLACEHOLDER;
use crate::rule::CatalogRule;

/// Default name of the configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "multi-catalog.yaml";

fn default_build_root() -> PathBuf {
    PathBuf::from("Library/aa")
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_catalog_filename() -> String {
    DEFAULT_CATALOG_FILENAME.to_string()
}

fn default_prefix_build_path() -> String {
    "Library/Catalogs".to_string()
}

fn default_prefix_runtime_load_path() -> String {
    "Catalogs/".to_string()
}

/// Settings shared by every catalog of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSettings {
    /// Concrete output directory of the asset build.
    #[serde(default = "default_build_root")]
    pub build_root: PathBuf,
    /// Token in bundle internal ids standing for the build root.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// File name of the default catalog.
    #[serde(default = "default_catalog_filename")]
    pub default_catalog: String,
    /// Profile variables available as `[Name]` in paths.
    #[serde(default)]
    pub profile: BTreeMap<String, String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            build_root: default_build_root(),
            placeholder: default_placeholder(),
            default_catalog: default_catalog_filename(),
            profile: BTreeMap::new(),
        }
    }
}

/// A catalog claiming the locations of a set of content groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupCatalog {
    /// Catalog name; also the catalog file name unless `filename` is set.
    pub name: String,
    /// Content groups whose locations move to this catalog.
    #[serde(default)]
    pub groups: Vec<String>,
    /// Directory the catalog and its bundles are moved to after the build.
    #[serde(default)]
    pub build_path: String,
    /// Directory bundles of this catalog are loaded from at runtime.
    #[serde(default)]
    pub runtime_load_path: String,
    /// Load the catalog automatically at startup.
    #[serde(default)]
    pub register: bool,
    /// Override for the catalog file name.
    #[serde(default)]
    pub filename: Option<String>,
}

/// Catalogs named after address prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrefixCatalogs {
    /// Address prefixes, one catalog each, in priority order.
    pub catalogs: Vec<String>,
    /// Parent directory of the per-catalog build directories.
    #[serde(default = "default_prefix_build_path")]
    pub build_path: String,
    /// Runtime load directory shared by every prefix catalog.
    #[serde(default = "default_prefix_runtime_load_path")]
    pub runtime_load_path: String,
}

/// Which flavor of catalog rules a build uses. Exactly one of `groups` or
/// `prefixes` may be given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum BuildMode {
    /// One catalog per configured set of content groups.
    Groups { groups: Vec<GroupCatalog> },
    /// One catalog per address prefix.
    Prefixes { prefixes: PrefixCatalogs },
}

/// The complete configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub build: BuildSettings,
    pub mode: BuildMode,
    /// Registry of content groups referenced by group catalogs.
    #[serde(default)]
    pub content_groups: Vec<ContentGroup>,
}

/// Anything that can produce the ordered catalog rules of a build.
pub trait MultipleCatalogsBuilder {
    /// Catalog rules in priority order; the first matching rule wins.
    fn catalog_rules(&self) -> Vec<CatalogRule>;
}

impl MultipleCatalogsBuilder for BuildMode {
    fn catalog_rules(&self) -> Vec<CatalogRule> {
        match self {
            BuildMode::Groups { groups } => groups
                .iter()
                .map(|catalog| {
                    let rule = CatalogRule::groups(catalog.name.clone(), catalog.groups.clone())
                        .with_paths(catalog.build_path.clone(), catalog.runtime_load_path.clone())
                        .with_register(catalog.register);
                    match &catalog.filename {
                        Some(filename) => rule.with_filename(filename.clone()),
                        None => rule,
                    }
                })
                .collect(),
            BuildMode::Prefixes { prefixes } => prefixes
                .catalogs
                .iter()
                .map(|prefix| {
                    let rule = CatalogRule::prefix(prefix.clone());
                    let stem = rule
                        .filename
                        .strip_suffix(".json")
                        .unwrap_or(&rule.filename)
                        .to_string();
                    rule.with_paths(
                        join_runtime_path(&prefixes.build_path, &stem),
                        prefixes.runtime_load_path.clone(),
                    )
                })
                .collect(),
        }
    }
}

impl MultipleCatalogsBuilder for Config {
    fn catalog_rules(&self) -> Vec<CatalogRule> {
        self.mode.catalog_rules()
    }
}

impl Config {
    /// Content-group registry for group rule evaluation.
    pub fn build_context(&self) -> BuildContext {
        BuildContext::new(self.content_groups.clone())
    }

    /// Profile variables of the active profile.
    pub fn profile(&self) -> ProfileVariables {
        ProfileVariables::new(self.build.profile.clone())
    }
}

/// Parse a YAML configuration string.
pub fn parse(yaml_content: &str) -> Result<Config> {
    serde_yaml::from_str::<Config>(yaml_content).map_err(|e| {
        let message = e.to_string();
        let hint = if message.contains("did not match any variant") {
            Some("`mode:` must contain either `groups:` (a list of catalogs) or `prefixes:` (with a `catalogs:` list)".to_string())
        } else if message.contains("missing field `mode`") {
            Some("Add a `mode:` section declaring the catalogs to build".to_string())
        } else {
            None
        };
        Error::ConfigParse { message, hint }
    })
}

/// Read and parse a configuration file.
pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Check a configuration for problems that would make catalogs come out
/// empty or collide. Returns one human-readable message per problem.
pub fn validate(config: &Config) -> Vec<String> {
    let mut issues = Vec::new();
    let known_groups: HashSet<&str> = config
        .content_groups
        .iter()
        .map(|g| g.name.as_str())
        .collect();
    let mut seen_names = HashSet::new();
    let mut seen_files = HashSet::new();
    seen_files.insert(config.build.default_catalog.clone());

    for rule in config.catalog_rules() {
        if !rule.is_configured() {
            issues.push(format!(
                "Catalog '{}' has no groups or prefix configured and will match nothing",
                rule.name
            ));
        }
        if rule.build_path.is_empty() {
            issues.push(format!(
                "Catalog '{}' has no build_path and cannot be emitted",
                rule.name
            ));
        }
        if rule.name == DEFAULT_CATALOG_ID {
            issues.push(format!(
                "Catalog '{}' uses the reserved default catalog identifier",
                rule.name
            ));
        }
        if !seen_names.insert(rule.name.clone()) {
            issues.push(format!("Catalog '{}' is declared more than once", rule.name));
        }
        if !seen_files.insert(rule.filename.clone()) {
            issues.push(format!(
                "Catalog '{}' writes '{}', which another catalog also writes",
                rule.name, rule.filename
            ));
        }
        if let crate::rule::RuleMatcher::Groups(groups) = &rule.matcher {
            for group in groups {
                if !known_groups.contains(group.as_str()) {
                    issues.push(format!(
                        "Catalog '{}' references unknown content group '{}'",
                        rule.name, group
                    ));
                }
            }
        }
    }

    issues
}
