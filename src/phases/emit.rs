//! Phase 4: Emit
//!
//! This is the final phase of a multi-catalog build and the only one with
//! side effects. It writes each catalog of a [`CatalogPlan`] to disk and moves
//! the bundle files of named catalogs next to them.
//!
//! ## Process
//!
//! 1.  **Resolve Directories**: The default catalog goes to the build root.
//!     A named catalog goes to its build path, evaluated against the active
//!     profile.
//!
//! 2.  **Write Catalogs**: Each catalog is written as pretty-printed JSON,
//!     creating parent directories as needed.
//!
//! 3.  **Relocate Bundles**: Every bundle file recorded during partitioning
//!     is moved into its catalog's directory, replacing any existing file.
//!
//! Any filesystem failure aborts the build.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;
use walkdir::WalkDir;

use super::CatalogPlan;
use crate::descriptor::CatalogDescriptor;
use crate::error::{Error, Result};
use crate::location::Location;
use crate::profile::ProfileEvaluator;
use crate::rule::CatalogRule;

/// On-disk form of one catalog.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile<'a> {
    pub locator_id: &'a str,
    pub locations: Vec<&'a Location>,
}

/// A bundle move performed (or planned) by the emit phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// What was emitted for one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedCatalog {
    pub identifier: String,
    pub catalog_file: PathBuf,
    pub moves: Vec<Move>,
}

/// Everything the emit phase wrote or would write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitReport {
    pub catalogs: Vec<EmittedCatalog>,
}

impl EmitReport {
    pub fn moved_files(&self) -> usize {
        self.catalogs.iter().map(|c| c.moves.len()).sum()
    }
}

/// Where the emit phase writes.
pub struct EmitTarget<'a> {
    /// Directory the default catalog is written to.
    pub build_root: &'a Path,
    /// Evaluator for profile variables in catalog build paths.
    pub evaluator: &'a dyn ProfileEvaluator,
    /// Compute the report without touching the filesystem.
    pub dry_run: bool,
}

/// Render a catalog as JSON.
pub fn render_catalog(plan: &CatalogPlan, catalog: &CatalogDescriptor) -> Result<String> {
    let file = CatalogFile {
        locator_id: &catalog.identifier,
        locations: plan.locations(catalog).collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Directory a catalog is emitted to.
///
/// A named catalog whose build path evaluates to nothing is an error rather
/// than a write into the working directory.
pub fn catalog_directory(catalog: &CatalogDescriptor, target: &EmitTarget<'_>) -> Result<PathBuf> {
    if catalog.is_default() {
        return Ok(target.build_root.to_path_buf());
    }
    let evaluated = catalog
        .build_path
        .as_deref()
        .map(|build_path| target.evaluator.evaluate(build_path))
        .unwrap_or_default();
    if evaluated.trim().is_empty() {
        return Err(Error::Filesystem {
            message: format!("Catalog '{}' has no build path", catalog.identifier),
        });
    }
    Ok(PathBuf::from(evaluated))
}

/// Execute Phase 4: write every catalog of `plan` and relocate its bundles.
pub fn execute(plan: &CatalogPlan, target: &EmitTarget<'_>) -> Result<EmitReport> {
    let mut report = EmitReport::default();

    for catalog in plan.catalogs() {
        let directory = catalog_directory(catalog, target)?;
        let catalog_file = directory.join(&catalog.filename);
        let moves: Vec<Move> = catalog
            .relocations
            .iter()
            .map(|r| Move {
                from: r.source.clone(),
                to: directory.join(&r.file_name),
            })
            .collect();

        if !target.dry_run {
            let content = render_catalog(plan, catalog)?;
            write_file(&catalog_file, &content)?;
            info!(
                "wrote catalog '{}' to {}",
                catalog.identifier,
                catalog_file.display()
            );
            for m in &moves {
                move_overwrite(&m.from, &m.to)?;
                debug!("moved {} -> {}", m.from.display(), m.to.display());
            }
        }

        report.catalogs.push(EmittedCatalog {
            identifier: catalog.identifier.clone(),
            catalog_file,
            moves,
        });
    }

    Ok(report)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
            message: format!("Failed to create directory '{}': {}", parent.display(), e),
        })?;
    }
    fs::write(path, content).map_err(|e| Error::Filesystem {
        message: format!("Failed to write file '{}': {}", path.display(), e),
    })
}

/// Move a file, replacing the destination if it exists. Moving a file onto
/// itself leaves it untouched.
pub fn move_overwrite(src: &Path, dst: &Path) -> Result<()> {
    let relocation_error = |e: io::Error| Error::Relocation {
        src: src.display().to_string(),
        dst: dst.display().to_string(),
        message: e.to_string(),
    };

    if is_same_file(src, dst) {
        debug!("{} is already in place", src.display());
        return Ok(());
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(relocation_error)?;
    }
    if fs::rename(src, dst).is_err() {
        // rename fails across filesystems; fall back to copy + delete
        fs::copy(src, dst).map_err(relocation_error)?;
        fs::remove_file(src).map_err(relocation_error)?;
    }
    Ok(())
}

fn is_same_file(src: &Path, dst: &Path) -> bool {
    if src == dst {
        return true;
    }
    match (fs::canonicalize(src), fs::canonicalize(dst)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Delete the build directories of every catalog rule.
///
/// Build paths are evaluated against the active profile; directories that do
/// not exist are skipped. Returns the removed directories with the number of
/// files each contained.
pub fn clean(
    rules: &[CatalogRule],
    evaluator: &dyn ProfileEvaluator,
) -> Result<Vec<(PathBuf, usize)>> {
    let mut removed = Vec::new();

    for rule in rules {
        if rule.build_path.is_empty() {
            continue;
        }
        let directory = PathBuf::from(evaluator.evaluate(&rule.build_path));
        if !directory.is_dir() {
            continue;
        }

        let files = WalkDir::new(&directory)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .count();
        fs::remove_dir_all(&directory).map_err(|e| Error::Filesystem {
            message: format!(
                "Failed to remove directory '{}': {}",
                directory.display(),
                e
            ),
        })?;
        info!(
            "removed build directory of catalog '{}': {}",
            rule.name,
            directory.display()
        );
        removed.push((directory, files));
    }

    Ok(removed)
}
