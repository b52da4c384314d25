//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures, helper functions, and sample inputs
//! to reduce duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new()
//!         .with_config(configs::PREFIX_UI)
//!         .with_locations(locations::PREFIX_SCENARIO);
//!     fixture.command().arg("plan").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    #[allow(unused_imports)]
    pub use super::locations;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
///
/// Paths are relative so they resolve inside the fixture directory when the
/// binary runs there.
#[allow(dead_code)]
pub mod configs {
    /// One prefix catalog for `UI/` addresses.
    pub const PREFIX_UI: &str = r#"
build:
  build_root: build
  placeholder: "{ROOT}"
mode:
  prefixes:
    catalogs: ["UI/"]
    build_path: catalogs
    runtime_load_path: Catalogs/
"#;

    /// One group catalog holding a plain entry and a folder entry.
    pub const GROUPS_EAST: &str = r#"
build:
  build_root: build
  placeholder: "{ROOT}"
  profile:
    Target: Linux
mode:
  groups:
    - name: East
      groups: [EastAssets]
      build_path: "deploy/[Target]/East"
      runtime_load_path: Catalogs/East
content_groups:
  - name: EastAssets
    entries:
      - guid: e1
        bundle_file_id: "{ROOT}/east.bundle"
      - guid: dir
        folder: true
        sub_assets: [s1]
        bundle_file_id: "{ROOT}/dir.bundle"
"#;

    /// Group catalog referencing a content group that isn't registered.
    pub const UNKNOWN_GROUP: &str = r#"
mode:
  groups:
    - name: West
      groups: [WestAssets]
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "invalid: yaml: content:";
}

/// Location lists matching the configurations above.
#[allow(dead_code)]
pub mod locations {
    /// UI locations depending on a shared font.
    pub const PREFIX_SCENARIO: &str = r#"[
  {"keys": ["UI/Icon"], "resourceType": "Sprite", "internalId": "Assets/UI/Icon.png"},
  {"keys": ["UI/Button"], "resourceType": "GameObject", "internalId": "Assets/UI/Button.prefab",
   "dependencies": ["Shared/Font"]},
  {"keys": ["Shared/Font"], "resourceType": "Font", "internalId": "Assets/Shared/Font.ttf"}
]"#;

    /// East assets, their bundles and a shared font.
    pub const GROUPS_SCENARIO: &str = r#"[
  {"keys": ["e1", "East/Tree"], "resourceType": "GameObject", "internalId": "Assets/East/Tree.prefab",
   "dependencies": ["east_bundle", "Shared/Font"]},
  {"keys": ["east_bundle"], "resourceType": "IAssetBundleResource", "internalId": "{ROOT}/east.bundle",
   "provider": "AssetBundleProvider"},
  {"keys": ["s1", "East/Rock"], "resourceType": "GameObject", "internalId": "Assets/East/Dir/Rock.prefab",
   "dependencies": ["dir_bundle"]},
  {"keys": ["dir_bundle"], "resourceType": "IAssetBundleResource", "internalId": "{ROOT}/dir.bundle",
   "provider": "AssetBundleProvider"},
  {"keys": ["Shared/Font"], "resourceType": "Font", "internalId": "Assets/Shared/Font.ttf"}
]"#;

    /// A UI location with a dependency nobody provides.
    pub const DANGLING: &str = r#"[
  {"keys": ["UI/Icon"], "resourceType": "Sprite", "internalId": "Assets/UI/Icon.png",
   "dependencies": ["Gone"]}
]"#;
}

/// A test fixture that provides a temporary directory with optional inputs.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_config(configs::GROUPS_EAST)
///     .with_file("build/east.bundle", "bytes");
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `multi-catalog.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file("multi-catalog.yaml", content)
    }

    /// Add a `locations.json` location list with the given content.
    pub fn with_locations(self, content: &str) -> Self {
        self.with_file("locations.json", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("multi-catalog.yaml")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("multi-catalog");
        cmd.current_dir(self.path())
            .env_remove("MULTI_CATALOG_CONFIG")
            .env_remove("MULTI_CATALOG_LOCATIONS")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_config() {
        let fixture = TestFixture::new().with_config(configs::PREFIX_UI);
        assert!(fixture.config_path().exists());
    }

    #[test]
    fn test_configs_are_valid_yaml() {
        for config in [configs::PREFIX_UI, configs::GROUPS_EAST, configs::UNKNOWN_GROUP] {
            serde_yaml::from_str::<serde_yaml::Value>(config).expect("Config should be valid YAML");
        }
    }

    #[test]
    fn test_locations_are_valid_json() {
        for list in [
            locations::PREFIX_SCENARIO,
            locations::GROUPS_SCENARIO,
            locations::DANGLING,
        ] {
            serde_json::from_str::<serde_json::Value>(list).expect("Locations should be valid JSON");
        }
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        let result = serde_yaml::from_str::<serde_yaml::Value>(configs::INVALID_YAML);
        assert!(result.is_err(), "INVALID_YAML should not parse");
    }
}
