//! Runtime load path rewriting for bundle locations.
//!
//! A bundle assigned to a named catalog is deployed next to that catalog, so
//! its load path must point at the catalog's runtime load directory instead
//! of the shared build output.

use std::path::{Path, PathBuf};

use crate::path::{base_name, join_runtime_path, normalize, substitute_placeholder};
use crate::profile::ProfileEvaluator;

/// Placeholder the asset build writes in front of bundle paths.
pub const DEFAULT_PLACEHOLDER: &str = "{UnityEngine.AddressableAssets.Addressables.RuntimePath}";

/// Result of rewriting one bundle path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenPath {
    /// Where the bundle file was produced by the build.
    pub source_file: PathBuf,
    /// Base name of the source file.
    pub file_name: String,
    /// Load path stored on the rewritten location.
    pub runtime_path: String,
}

/// Rewrites bundle load paths into a catalog's runtime load directory.
pub struct PathRewriter<'a> {
    placeholder: &'a str,
    build_root: &'a Path,
    evaluator: &'a dyn ProfileEvaluator,
}

impl<'a> PathRewriter<'a> {
    pub fn new(
        placeholder: &'a str,
        build_root: &'a Path,
        evaluator: &'a dyn ProfileEvaluator,
    ) -> Self {
        Self {
            placeholder,
            build_root,
            evaluator,
        }
    }

    /// Rewrite `internal_id` to live under `runtime_load_path`.
    pub fn rewrite(&self, internal_id: &str, runtime_load_path: &str) -> RewrittenPath {
        let resolved = substitute_placeholder(internal_id, self.placeholder, self.build_root);
        let source_file = normalize(Path::new(&resolved));
        let file_name = base_name(&resolved).to_string();
        let runtime_path = self
            .evaluator
            .evaluate(&join_runtime_path(runtime_load_path, &file_name));
        RewrittenPath {
            source_file,
            file_name,
            runtime_path,
        }
    }
}
