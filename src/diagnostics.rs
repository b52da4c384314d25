//! # Diagnostics
//!
//! The partitioner never fails on data-shape problems. Conditions a user
//! should know about (unresolved dependencies, catalog populations) are
//! reported to a [`DiagnosticSink`] instead.
//!
//! - [`LogSink`] forwards everything to the `log` facade.
//! - [`Diagnostics`] keeps every message for later inspection and also
//!   forwards it to `log`, which is what the CLI and the tests use.

use std::fmt;

use log::{info, warn};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
}

/// A human-readable diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

/// Receiver of partitioner diagnostics.
pub trait DiagnosticSink {
    fn info(&mut self, message: String);
    fn warn(&mut self, message: String);
}

/// Sink that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn info(&mut self, message: String) {
        info!("{}", message);
    }

    fn warn(&mut self, message: String) {
        warn!("{}", message);
    }
}

/// Sink that records diagnostics and logs them.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DiagnosticSink for Diagnostics {
    fn info(&mut self, message: String) {
        LogSink.info(message.clone());
        self.entries.push(Diagnostic {
            severity: Severity::Info,
            message,
        });
    }

    fn warn(&mut self, message: String) {
        LogSink.warn(message.clone());
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            message,
        });
    }
}
