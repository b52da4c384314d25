//! Catalog descriptors: the per-catalog accumulators filled by the phases.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::location::{LocationArena, LocationId};
use crate::rule::CatalogRule;

/// Identifier of the default catalog.
pub const DEFAULT_CATALOG_ID: &str = "AddressablesMainContentCatalog";

/// File name of the default catalog unless configured otherwise.
pub const DEFAULT_CATALOG_FILENAME: &str = "catalog.json";

/// A bundle file that has to be moved next to its catalog after the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    /// Path of the bundle file as produced by the build.
    pub source: PathBuf,
    /// File name at the destination.
    pub file_name: String,
}

/// One catalog being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDescriptor {
    pub identifier: String,
    pub filename: String,
    /// Whether the catalog is registered for automatic load at startup.
    pub register: bool,
    /// Deployment directory (unevaluated); `None` for the default catalog.
    pub build_path: Option<String>,
    /// Runtime load directory (unevaluated); `None` for the default catalog.
    pub runtime_load_path: Option<String>,
    pub locations: Vec<LocationId>,
    pub relocations: Vec<Relocation>,
    /// Dependency keys closure could not resolve.
    pub unresolved: BTreeSet<String>,
}

impl CatalogDescriptor {
    /// Empty descriptor with no deployment paths.
    pub fn new(identifier: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            filename: filename.into(),
            register: true,
            build_path: None,
            runtime_load_path: None,
            locations: Vec::new(),
            relocations: Vec::new(),
            unresolved: BTreeSet::new(),
        }
    }

    /// The default catalog, which receives every unclaimed location.
    pub fn default_catalog(filename: impl Into<String>) -> Self {
        Self::new(DEFAULT_CATALOG_ID, filename)
    }

    /// Empty descriptor for the catalog a rule targets.
    pub fn for_rule(rule: &CatalogRule) -> Self {
        Self {
            register: rule.register,
            build_path: Some(rule.build_path.clone()),
            runtime_load_path: Some(rule.runtime_load_path.clone()),
            ..Self::new(rule.name.clone(), rule.filename.clone())
        }
    }

    pub fn is_default(&self) -> bool {
        self.identifier == DEFAULT_CATALOG_ID
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.locations.contains(&id)
    }

    /// First location of this catalog whose primary key is `key`.
    pub fn find_by_primary_key(&self, arena: &LocationArena, key: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .copied()
            .find(|&id| arena[id].primary_key() == Some(key))
    }
}
