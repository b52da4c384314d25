//! Phase 2: Dependency Closure
//!
//! Named catalogs are loaded independently of each other, so every
//! dependency of a location in a named catalog must resolve either inside
//! that catalog or in the default catalog. This phase pulls missing
//! dependencies in from the default catalog, recursively.
//!
//! ## Process
//!
//! A work queue is seeded with the catalog's locations. Each dequeued
//! location is processed once; for each of its dependency keys the default
//! catalog is searched for a location with that primary key. A hit is queued
//! so its own dependencies are followed, and appended to the catalog unless
//! the catalog already holds a location with that primary key. A miss that
//! the catalog cannot satisfy itself is recorded as unresolved and reported
//! once.
//!
//! Sibling named catalogs are never consulted.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::descriptor::CatalogDescriptor;
use crate::diagnostics::DiagnosticSink;
use crate::location::{LocationArena, LocationId};

/// Index of the default catalog by primary key. The first location with a
/// given key wins.
pub fn index_default<'a>(
    default: &CatalogDescriptor,
    arena: &'a LocationArena,
) -> HashMap<&'a str, LocationId> {
    let mut index = HashMap::new();
    for &id in &default.locations {
        if let Some(key) = arena[id].primary_key() {
            index.entry(key).or_insert(id);
        }
    }
    index
}

/// Execute Phase 2 for one named catalog.
///
/// Returns the number of locations appended. The default catalog itself is
/// left untouched.
pub fn execute(
    catalog: &mut CatalogDescriptor,
    default: &CatalogDescriptor,
    arena: &LocationArena,
    sink: &mut dyn DiagnosticSink,
) -> usize {
    if catalog.is_default() {
        return 0;
    }
    let default_index = index_default(default, arena);
    close_with_index(catalog, &default_index, arena, sink)
}

/// Phase 2 against a prebuilt default index, for closing several catalogs
/// against the same default catalog.
pub fn close_with_index(
    catalog: &mut CatalogDescriptor,
    default_index: &HashMap<&str, LocationId>,
    arena: &LocationArena,
    sink: &mut dyn DiagnosticSink,
) -> usize {
    let mut queue: VecDeque<LocationId> = catalog.locations.iter().copied().collect();
    let mut visited: HashSet<LocationId> = HashSet::new();
    let mut present: HashSet<&str> = catalog
        .locations
        .iter()
        .filter_map(|&id| arena[id].primary_key())
        .collect();
    let mut added = 0;

    while let Some(id) = queue.pop_front() {
        if !visited.insert(id) {
            continue;
        }
        let location = &arena[id];

        for dependency in &location.dependencies {
            match default_index.get(dependency.as_str()) {
                Some(&dependency_id) => {
                    queue.push_back(dependency_id);
                    if present.insert(dependency.as_str()) {
                        catalog.locations.push(dependency_id);
                        added += 1;
                    }
                }
                None => {
                    if !present.contains(dependency.as_str())
                        && catalog.unresolved.insert(dependency.clone())
                    {
                        sink.warn(format!(
                            "Could not find location for dependency '{}' of catalog '{}' in the default catalog",
                            dependency, catalog.identifier
                        ));
                    }
                }
            }
        }
    }

    added
}
