//! Property-based tests for partitioning and dependency closure.
//!
//! Locations are generated with keys and dependencies drawn from a small
//! shared pool so that prefix matches, duplicate keys, cycles and missing
//! dependencies all show up regularly.

#[cfg(test)]
mod proptest_tests {
    use crate::content::BuildContext;
    use crate::descriptor::{CatalogDescriptor, DEFAULT_CATALOG_FILENAME};
    use crate::diagnostics::Diagnostics;
    use crate::location::{Location, LocationArena};
    use crate::phases::{closure, partition, Partition};
    use crate::profile::Identity;
    use crate::rewrite::PathRewriter;
    use crate::rule::CatalogRule;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::path::Path;

    const KEY: &str = "(A|B|C)/[a-z]{1,2}";

    fn location_strategy() -> impl Strategy<Value = Location> {
        (KEY, prop::collection::vec(KEY, 0..3)).prop_map(|(key, dependencies)| {
            Location::new(vec![key.clone()], "Sprite", key).with_dependencies(dependencies)
        })
    }

    fn locations_strategy() -> impl Strategy<Value = Vec<Location>> {
        prop::collection::vec(location_strategy(), 0..30)
    }

    fn rules() -> Vec<CatalogRule> {
        vec![CatalogRule::prefix("A/"), CatalogRule::prefix("B/")]
    }

    fn partitioned(locations: Vec<Location>, rules: &[CatalogRule]) -> (LocationArena, Partition) {
        let mut arena: LocationArena = locations.into_iter().collect();
        let rewriter = PathRewriter::new("{ROOT}", Path::new("/out"), &Identity);
        let result = partition::execute(
            &mut arena,
            rules,
            CatalogDescriptor::default_catalog(DEFAULT_CATALOG_FILENAME),
            &BuildContext::default(),
            &rewriter,
        );
        (arena, result)
    }

    proptest! {
        /// Property: every location lands in exactly one catalog
        #[test]
        fn partition_assigns_each_location_once(locations in locations_strategy()) {
            let count = locations.len();
            let (_, result) = partitioned(locations, &rules());

            let mut seen = HashSet::new();
            for catalog in std::iter::once(&result.default).chain(&result.catalogs) {
                for &id in &catalog.locations {
                    prop_assert!(seen.insert(id), "location assigned twice");
                }
            }
            prop_assert_eq!(seen.len(), count);
        }

        /// Property: locations go to the first matching rule
        #[test]
        fn partition_first_match_wins(locations in locations_strategy()) {
            let shadowing = vec![CatalogRule::prefix("A"), CatalogRule::prefix("A/")];
            let (arena, result) = partitioned(locations, &shadowing);

            prop_assert!(result.catalogs[1].is_empty());
            for &id in &result.catalogs[0].locations {
                prop_assert!(arena[id].keys[0].starts_with('A'));
            }
        }

        /// Property: every dependency of a named catalog is either present in
        /// that catalog or recorded as unresolved
        #[test]
        fn closure_is_complete(locations in locations_strategy()) {
            let (arena, mut result) = partitioned(locations, &rules());
            let default_index = closure::index_default(&result.default, &arena);
            let default_before = result.default.locations.clone();

            for catalog in &mut result.catalogs {
                closure::close_with_index(catalog, &default_index, &arena, &mut Diagnostics::new());

                let keys: HashSet<&str> = catalog
                    .locations
                    .iter()
                    .filter_map(|&id| arena[id].primary_key())
                    .collect();
                for &id in &catalog.locations {
                    for dependency in &arena[id].dependencies {
                        prop_assert!(
                            keys.contains(dependency.as_str())
                                || catalog.unresolved.contains(dependency),
                            "dependency '{}' of catalog '{}' neither present nor unresolved",
                            dependency,
                            catalog.identifier
                        );
                    }
                }
            }
            prop_assert_eq!(result.default.locations, default_before);
        }

        /// Property: closing an already closed catalog changes nothing
        #[test]
        fn closure_is_idempotent(locations in locations_strategy()) {
            let (arena, mut result) = partitioned(locations, &rules());
            let default = result.default.clone();

            for catalog in &mut result.catalogs {
                let mut first = Diagnostics::new();
                closure::execute(catalog, &default, &arena, &mut first);
                let snapshot = catalog.clone();

                let mut second = Diagnostics::new();
                let added = closure::execute(catalog, &default, &arena, &mut second);
                prop_assert_eq!(added, 0);
                prop_assert_eq!(&catalog.locations, &snapshot.locations);
                prop_assert!(!second.has_warnings());
            }
        }
    }
}
