//! Phase 1: Partition
//!
//! Assigns every location of the build to exactly one catalog.
//!
//! ## Process
//!
//! 1.  **Evaluate Rules**: For each location, in input order, the catalog
//!     rules are evaluated in declaration order and the first match wins.
//!
//! 2.  **Rewrite Bundles**: A bundle claimed by a named catalog is replaced
//!     by a copy whose load path points at that catalog's runtime load
//!     directory. The original file path is recorded as a relocation for the
//!     emit phase.
//!
//! 3.  **Default**: Every other claimed location is assigned by handle, and
//!     unclaimed locations go to the default catalog unchanged.
//!
//! Partitioning never fails: a location no rule can make sense of simply
//! stays in the default catalog.

use log::debug;

use super::Partition;
use crate::content::BuildContext;
use crate::descriptor::{CatalogDescriptor, Relocation};
use crate::location::{LocationArena, LocationId};
use crate::rewrite::PathRewriter;
use crate::rule::CatalogRule;

/// Execute Phase 1: partition the arena's locations across `rules`.
///
/// Rewritten bundle copies are appended to `arena`; the locations they
/// replace are referenced by no catalog afterwards.
pub fn execute(
    arena: &mut LocationArena,
    rules: &[CatalogRule],
    default: CatalogDescriptor,
    context: &BuildContext,
    rewriter: &PathRewriter<'_>,
) -> Partition {
    let mut partition = Partition {
        default,
        catalogs: rules.iter().map(CatalogDescriptor::for_rule).collect(),
    };

    let input: Vec<LocationId> = arena.ids().collect();
    for id in input {
        let location = &arena[id];
        let Some(index) = rules.iter().position(|r| r.matches(location, context)) else {
            partition.default.locations.push(id);
            continue;
        };

        let rule = &rules[index];
        debug!(
            "assigning '{}' to catalog '{}'",
            location.primary_key().unwrap_or(&location.internal_id),
            rule.name
        );

        if location.resource_type.is_bundle() {
            let rewritten = rewriter.rewrite(&location.internal_id, &rule.runtime_load_path);
            let replacement = location.relocated(rewritten.runtime_path);
            let replacement_id = arena.push(replacement);

            let catalog = &mut partition.catalogs[index];
            catalog.relocations.push(Relocation {
                source: rewritten.source_file,
                file_name: rewritten.file_name,
            });
            catalog.locations.push(replacement_id);
        } else {
            partition.catalogs[index].locations.push(id);
        }
    }

    partition
}
