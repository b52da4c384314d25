//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{base_name, join_runtime_path, normalize, substitute_placeholder};
    use proptest::prelude::*;
    use std::path::{Component, Path};

    // ============================================================================
    // join_runtime_path property tests
    // ============================================================================

    proptest! {
        /// Property: the joined path always ends with the file name
        #[test]
        fn join_ends_with_file_name(
            directory in "[a-zA-Z0-9_/]{0,20}",
            file_name in "[a-zA-Z0-9_.]{1,12}",
        ) {
            let joined = join_runtime_path(&directory, &file_name);
            prop_assert!(joined.ends_with(&file_name));
        }

        /// Property: trailing separators on the directory don't change the result
        #[test]
        fn join_ignores_trailing_separators(
            directory in "[a-zA-Z0-9_]{1,10}(/[a-zA-Z0-9_]{1,10}){0,3}",
            file_name in "[a-zA-Z0-9_.]{1,12}",
            trailing in "[/\\\\]{1,3}",
        ) {
            let plain = join_runtime_path(&directory, &file_name);
            let with_trailing = join_runtime_path(&format!("{}{}", directory, trailing), &file_name);
            prop_assert_eq!(&plain, &with_trailing);
            prop_assert!(!plain.contains("//"), "unexpected double separator in '{}'", plain);
        }

        /// Property: base_name recovers the file name from a joined path
        #[test]
        fn base_name_inverts_join(
            directory in "[a-zA-Z0-9_/]{0,20}",
            file_name in "[a-zA-Z0-9_.]{1,12}",
        ) {
            let joined = join_runtime_path(&directory, &file_name);
            prop_assert_eq!(base_name(&joined), file_name.as_str());
        }
    }

    // ============================================================================
    // base_name property tests
    // ============================================================================

    proptest! {
        /// Property: base_name never contains a separator
        #[test]
        fn base_name_has_no_separators(path in "[a-zA-Z0-9_./\\\\]*") {
            let name = base_name(&path);
            prop_assert!(!name.contains('/') && !name.contains('\\'));
        }

        /// Property: base_name is idempotent
        #[test]
        fn base_name_is_idempotent(path in "[a-zA-Z0-9_./\\\\]*") {
            let once = base_name(&path);
            prop_assert_eq!(base_name(once), once);
        }
    }

    // ============================================================================
    // normalize property tests
    // ============================================================================

    proptest! {
        /// Property: normalize is idempotent
        #[test]
        fn normalize_is_idempotent(path in "/?([a-z]{1,5}|\\.|\\.\\.)(/([a-z]{1,5}|\\.|\\.\\.)){0,6}") {
            let once = normalize(Path::new(&path));
            let twice = normalize(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: absolute paths normalize without `.` or `..` components
        #[test]
        fn normalize_absolute_has_no_dot_components(path in "/([a-z]{1,5}|\\.|\\.\\.)(/([a-z]{1,5}|\\.|\\.\\.)){0,6}") {
            let normalized = normalize(Path::new(&path));
            prop_assert!(normalized.is_absolute());
            for component in normalized.components() {
                prop_assert!(!matches!(component, Component::CurDir | Component::ParentDir));
            }
        }
    }

    // ============================================================================
    // substitute_placeholder property tests
    // ============================================================================

    proptest! {
        /// Property: a path without the placeholder is returned unchanged
        #[test]
        fn substitute_without_placeholder_is_identity(path in "[a-zA-Z0-9_./]*") {
            let result = substitute_placeholder(&path, "{ROOT}", Path::new("/out"));
            prop_assert_eq!(result, path);
        }

        /// Property: every placeholder occurrence is replaced
        #[test]
        fn substitute_replaces_every_occurrence(
            parts in prop::collection::vec("[a-z]{0,5}", 1..4),
        ) {
            let path = parts.join("{ROOT}");
            let result = substitute_placeholder(&path, "{ROOT}", Path::new("/out"));
            prop_assert!(!result.contains("{ROOT}"), "placeholder left in '{}'", result);
            prop_assert_eq!(result.matches("/out").count(), parts.len() - 1);
        }
    }
}
