//! Phase 3: Gather
//!
//! Collects the catalogs that will actually be emitted: the default catalog
//! always, followed by every named catalog that ended up with at least one
//! location, in rule order.

use log::debug;

use super::Partition;
use crate::descriptor::CatalogDescriptor;
use crate::diagnostics::DiagnosticSink;

/// Execute Phase 3: order the catalogs and drop empty named ones.
pub fn execute(partition: Partition, sink: &mut dyn DiagnosticSink) -> Vec<CatalogDescriptor> {
    let mut catalogs = Vec::with_capacity(partition.catalogs.len() + 1);

    sink.info(format!(
        "adding default catalog containing {} locations to build",
        partition.default.len()
    ));
    catalogs.push(partition.default);

    for catalog in partition.catalogs {
        if catalog.is_empty() {
            debug!("skipping empty catalog '{}'", catalog.identifier);
            continue;
        }
        sink.info(format!(
            "adding catalog '{}' containing {} locations to build",
            catalog.identifier,
            catalog.len()
        ));
        catalogs.push(catalog);
    }

    catalogs
}
