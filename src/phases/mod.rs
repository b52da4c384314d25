//! Implementation of the phases of a multi-catalog build.
//!
//! ## Overview
//!
//! A build follows 4 phases:
//! 1. Partition - Assign every location to the first catalog whose rule
//!    matches it, rewriting bundle load paths for named catalogs
//! 2. Closure - Pull the dependencies of every named catalog in from the
//!    default catalog
//! 3. Gather - Drop empty named catalogs and report catalog populations
//! 4. Emit - Write catalog files and move bundles next to their catalogs
//!
//! Phases 1-3 are pure and run over an in-memory snapshot of the location
//! list; the default catalog is fully populated by phase 1 before phase 2
//! reads it. Phase 4 is the only one touching the filesystem.

use crate::descriptor::CatalogDescriptor;
use crate::location::{Location, LocationArena};

// Phase modules
pub mod closure;
pub mod emit;
pub mod gather;
pub mod orchestrator;
pub mod partition;

// Re-export phase modules by position in the pipeline
pub use closure as phase2;
pub use emit as phase4;
pub use gather as phase3;
pub use partition as phase1;

/// Catalogs after partitioning, before closure.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Catalog receiving every unclaimed location.
    pub default: CatalogDescriptor,
    /// One catalog per rule, in rule order.
    pub catalogs: Vec<CatalogDescriptor>,
}

/// Finished catalogs of a build together with the locations they reference.
#[derive(Debug, Clone)]
pub struct CatalogPlan {
    arena: LocationArena,
    catalogs: Vec<CatalogDescriptor>,
}

impl CatalogPlan {
    /// Assemble a plan. The first catalog must be the default catalog.
    pub fn new(arena: LocationArena, catalogs: Vec<CatalogDescriptor>) -> Self {
        debug_assert!(catalogs.first().is_some_and(|c| c.is_default()));
        Self { arena, catalogs }
    }

    /// Catalogs to emit: the default catalog first, then every non-empty
    /// named catalog in rule order.
    pub fn catalogs(&self) -> &[CatalogDescriptor] {
        &self.catalogs
    }

    pub fn default_catalog(&self) -> &CatalogDescriptor {
        &self.catalogs[0]
    }

    /// Named catalogs only.
    pub fn named_catalogs(&self) -> &[CatalogDescriptor] {
        &self.catalogs[1..]
    }

    pub fn catalog(&self, identifier: &str) -> Option<&CatalogDescriptor> {
        self.catalogs.iter().find(|c| c.identifier == identifier)
    }

    /// Locations of `catalog`, in catalog order.
    pub fn locations<'a>(
        &'a self,
        catalog: &'a CatalogDescriptor,
    ) -> impl Iterator<Item = &'a Location> + 'a {
        catalog.locations.iter().map(move |id| &self.arena[*id])
    }

    /// Primary keys of `catalog`'s locations, with an empty string for
    /// keyless locations.
    pub fn primary_keys<'a>(&'a self, catalog: &'a CatalogDescriptor) -> Vec<&'a str> {
        self.locations(catalog)
            .map(|l| l.primary_key().unwrap_or(""))
            .collect()
    }

    pub fn arena(&self) -> &LocationArena {
        &self.arena
    }

    /// Whether any catalog has a dependency closure could not resolve.
    pub fn has_unresolved(&self) -> bool {
        self.catalogs.iter().any(|c| !c.unresolved.is_empty())
    }
}
