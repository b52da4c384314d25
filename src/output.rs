//! # Output Configuration
//!
//! Controls how the CLI decorates its status lines. Emoji markers are used
//! on color-capable terminals and bracketed plain-text markers everywhere
//! else.
//!
//! The following are respected, in order:
//! - `--color=never|always|auto` - CLI flag
//! - `NO_COLOR` - disables decoration when set to any value
//! - `CLICOLOR=0` - disables decoration
//! - `CLICOLOR_FORCE=1` - forces decoration even when stdout is not a TTY
//! - `TERM=dumb` - disables decoration

use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is the value of `--color`: "always", "never" or "auto".
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Marker for a status line.
    pub fn marker(&self, status: Status) -> &'static str {
        let (emoji, plain) = status.markers();
        if self.use_color {
            emoji
        } else {
            plain
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Kind of status line printed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Scan,
    Ok,
    Info,
    Warn,
    Error,
    Write,
    Clean,
}

impl Status {
    fn markers(self) -> (&'static str, &'static str) {
        match self {
            Status::Scan => ("🔍", "[SCAN]"),
            Status::Ok => ("✅", "[OK]"),
            Status::Info => ("📊", "[INFO]"),
            Status::Warn => ("⚠️", "[WARN]"),
            Status::Error => ("❌", "[ERR]"),
            Status::Write => ("📦", "[WRITE]"),
            Status::Clean => ("🧹", "[CLEAN]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_always() {
        assert!(OutputConfig::from_env_and_flag("always").use_color);
        assert!(OutputConfig::from_env_and_flag("ALWAYS").use_color);
    }

    #[test]
    fn test_color_never() {
        assert!(!OutputConfig::from_env_and_flag("never").use_color);
    }

    #[test]
    fn test_marker() {
        let color = OutputConfig { use_color: true };
        let plain = OutputConfig { use_color: false };
        assert_eq!(color.marker(Status::Ok), "✅");
        assert_eq!(plain.marker(Status::Ok), "[OK]");
        assert_eq!(plain.marker(Status::Warn), "[WARN]");
    }
}
