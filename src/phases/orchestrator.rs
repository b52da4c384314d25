//! Orchestrator for a complete multi-catalog build
//!
//! This module coordinates the pure phases (partition, closure, gather) to
//! turn a flat location list into a [`CatalogPlan`]. Emitting the plan to
//! disk is left to the caller so dry runs and inspection can share the same
//! entry point.

use super::{phase1, phase2, phase3, CatalogPlan};
use crate::config::{Config, MultipleCatalogsBuilder};
use crate::content::BuildContext;
use crate::descriptor::CatalogDescriptor;
use crate::diagnostics::DiagnosticSink;
use crate::location::{Location, LocationArena};
use crate::rewrite::PathRewriter;
use crate::rule::CatalogRule;

/// Build the catalog plan described by `config`.
///
/// This runs:
/// 1. Partition the locations across the configured catalog rules
/// 2. Close every named catalog's dependencies over the default catalog
/// 3. Gather the default catalog and the non-empty named catalogs
pub fn execute(
    locations: Vec<Location>,
    config: &Config,
    sink: &mut dyn DiagnosticSink,
) -> CatalogPlan {
    let rules = config.catalog_rules();
    let context = config.build_context();
    let profile = config.profile();
    let rewriter = PathRewriter::new(&config.build.placeholder, &config.build.build_root, &profile);
    let default = CatalogDescriptor::default_catalog(config.build.default_catalog.clone());

    execute_with_rules(locations, &rules, default, &context, &rewriter, sink)
}

/// Build a catalog plan from explicit rules.
pub fn execute_with_rules(
    locations: Vec<Location>,
    rules: &[CatalogRule],
    default: CatalogDescriptor,
    context: &BuildContext,
    rewriter: &PathRewriter<'_>,
    sink: &mut dyn DiagnosticSink,
) -> CatalogPlan {
    let mut arena: LocationArena = locations.into_iter().collect();

    // Phase 1: Partition
    let mut partition = phase1::execute(&mut arena, rules, default, context, rewriter);

    // Phase 2: Closure, only after the default catalog is complete
    let default_index = phase2::index_default(&partition.default, &arena);
    for catalog in &mut partition.catalogs {
        phase2::close_with_index(catalog, &default_index, &arena, sink);
    }

    // Phase 3: Gather
    let catalogs = phase3::execute(partition, sink);

    CatalogPlan::new(arena, catalogs)
}
