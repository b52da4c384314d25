//! # Multi-Catalog Library
//!
//! This library splits the flat location list produced by an addressable
//! asset build into several independently loadable catalogs. It is used by
//! the `multi-catalog` command-line tool but has no dependency on it.
//!
//! ## Quick Example
//!
//! ```
//! use multi_catalog::config;
//! use multi_catalog::diagnostics::Diagnostics;
//! use multi_catalog::location::Location;
//! use multi_catalog::phases::orchestrator;
//!
//! let config = config::parse(r#"
//! mode:
//!   prefixes:
//!     catalogs: ["UI/"]
//! "#).unwrap();
//!
//! let locations = vec![
//!     Location::new(vec!["UI/Button".into()], "GameObject", "Assets/UI/Button.prefab")
//!         .with_dependencies(["Shared/Font"]),
//!     Location::new(vec!["Shared/Font".into()], "Font", "Assets/Shared/Font.ttf"),
//! ];
//!
//! let mut diagnostics = Diagnostics::new();
//! let plan = orchestrator::execute(locations, &config, &mut diagnostics);
//!
//! let ui = plan.catalog("UI/").unwrap();
//! assert_eq!(plan.primary_keys(ui), vec!["UI/Button", "Shared/Font"]);
//! assert_eq!(plan.primary_keys(plan.default_catalog()), vec!["Shared/Font"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Locations (`location`)**: Addressable content entries, stored in an
//!   arena and referenced by handle.
//! - **Catalog rules (`rule`)**: Ordered predicates deciding which named
//!   catalog a location belongs to, either by content group (`content`) or by
//!   address prefix.
//! - **Configuration (`config`)**: The `multi-catalog.yaml` schema and the
//!   `MultipleCatalogsBuilder` interface producing the ordered rules.
//! - **Path rewriting (`rewrite`, `path`, `profile`)**: Pointing bundle load
//!   paths at their catalog's runtime directory.
//! - **Phases (`phases`)**: Partition, closure, gather and emit.
//!
//! ## Execution Flow
//!
//! 1.  **Partition**: Assign every location to the first matching catalog,
//!     or the default catalog.
//! 2.  **Closure**: Pull every named catalog's missing dependencies in from
//!     the default catalog.
//! 3.  **Gather**: Keep the default catalog and every non-empty named one.
//! 4.  **Emit**: Write catalog files and move bundles into place.

pub mod config;
pub mod content;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod location;
pub mod output;
pub mod path;
pub mod phases;
pub mod profile;
pub mod rewrite;
pub mod rule;

#[cfg(test)]
mod partition_proptest;
#[cfg(test)]
mod path_proptest;
