// PolyPlot - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all PolyPlot operations.
#[derive(Debug)]
pub enum PolyPlotError {
    /// Configuration loading failed.
    Config(ConfigError),

    /// Sample export failed.
    Export(ExportError),

    /// The GUI toolkit or the native window could not be initialised.
    Gui(eframe::Error),
}

impl fmt::Display for PolyPlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Gui(e) => write!(f, "Window initialisation failed: {e}"),
        }
    }
}

impl std::error::Error for PolyPlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Gui(e) => Some(e),
        }
    }
}

impl From<eframe::Error> for PolyPlotError {
    fn from(e: eframe::Error) -> Self {
        Self::Gui(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for PolyPlotError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to exporting sample points.
#[derive(Debug)]
pub enum ExportError {
    /// Writing to the output failed.
    Io { source: io::Error },

    /// CSV serialisation failed.
    Csv { source: csv::Error },

    /// JSON serialisation failed.
    Json { source: serde_json::Error },

    /// Requested range would produce too many points.
    RangeTooLarge { from: i64, to: i64, max: u64 },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "Export I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
            Self::RangeTooLarge { from, to, max } => write!(
                f,
                "Range {from}..={to} exceeds the maximum of {max} points. \
                 Narrow --from/--to."
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
            Self::RangeTooLarge { .. } => None,
        }
    }
}

impl From<ExportError> for PolyPlotError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for PolyPlot results.
pub type Result<T> = std::result::Result<T, PolyPlotError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_keeps_source_chain() {
        let err: PolyPlotError = ConfigError::Io {
            path: PathBuf::from("config.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert!(err.to_string().contains("config.toml"));
        let inner = err.source().and_then(|e| e.source());
        assert!(inner.is_some_and(|e| e.to_string() == "denied"));
    }

    #[test]
    fn test_range_too_large_message_names_range() {
        let err = ExportError::RangeTooLarge {
            from: -10,
            to: 10,
            max: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("-10..=10"), "{msg}");
        assert!(err.source().is_none());
    }
}
