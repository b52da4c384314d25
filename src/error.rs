//! # Error Handling
//!
//! This module defines the centralized error type for the `multi-catalog`
//! library. It uses the `thiserror` library to create an `Error` enum that
//! covers the failure modes of the I/O shell around the partitioner.
//!
//! The algorithmic core (partitioning, path rewriting, dependency closure)
//! never returns an error for data-shape problems: unmatched locations stay
//! in the default catalog and unresolved dependencies are reported through
//! the diagnostics sink. Errors are reserved for:
//!
//! - Configuration parsing errors.
//! - Location input parsing errors.
//! - Writing catalog files.
//! - Relocating bundle files into a catalog's deployment directory.
//! - I/O and JSON errors from the underlying libraries.
//!
//! The `Result` type alias is used to return `Result<T, Error>` from
//! functions, making it easy to propagate errors up the call stack.

use thiserror::Error;

/// Main error type for multi-catalog operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing the catalog configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An error occurred while reading the location list produced by the
    /// asset build.
    #[error("Location input error: {message}")]
    LocationInput { message: String },

    /// An error occurred while writing or deleting catalog output.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// A bundle file could not be moved into its catalog's build directory.
    #[error("Relocation error: {src} -> {dst}: {message}")]
    Relocation {
        src: String,
        dst: String,
        message: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
