// PolyPlot - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (sets the level to debug)
//   - Config file: [logging] level = "debug"
//
// Output: stderr by default, or a file when [logging] file is set.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Pick the filter directive.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
fn build_filter(
    rust_log: Option<&str>,
    debug_flag: bool,
    config_level: Option<&str>,
) -> EnvFilter {
    if let Some(directives) = rust_log {
        EnvFilter::new(directives)
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    }
}

/// Open the log file for appending, creating it if needed. `None` (with a
/// note on stderr) when it cannot be opened, so logging falls back to stderr.
fn open_log_file(path: &str) -> Option<File> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => Some(f),
        Err(e) => {
            eprintln!("Warning: cannot open log file '{path}': {e}. Logging to stderr.");
            None
        }
    }
}

/// Subscriber writing plain (non-ANSI) lines to `file`.
fn file_subscriber(
    filter: EnvFilter,
    file: File,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish()
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
/// `log_file` is the optional log file path from config.toml.
pub fn init(debug_flag: bool, config_level: Option<&str>, log_file: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(rust_log.as_deref(), debug_flag, config_level);

    match log_file.and_then(open_log_file) {
        Some(file) => file_subscriber(filter, file).init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .compact()
            .with_writer(std::io::stderr)
            .init(),
    }

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        log_file = log_file.unwrap_or("<stderr>"),
        "Logging initialised"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_priority_chain() {
        assert_eq!(
            build_filter(Some("trace"), true, Some("warn")).to_string(),
            "trace"
        );
        assert_eq!(build_filter(None, true, Some("warn")).to_string(), "debug");
        assert_eq!(build_filter(None, false, Some("warn")).to_string(), "warn");
        assert_eq!(build_filter(None, false, None).to_string(), "info");
    }

    #[test]
    fn test_log_file_receives_filtered_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("polyplot.log");
        let path_str = path.to_str().unwrap();

        let file = open_log_file(path_str).unwrap();
        let subscriber = file_subscriber(EnvFilter::new("info"), file);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(origin_x = 800, "plot ready");
            tracing::debug!("hidden at info");
        });

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("plot ready"), "{content}");
        assert!(content.contains("origin_x=800"), "{content}");
        assert!(!content.contains("hidden at info"), "{content}");
        assert!(!content.contains('\u{1b}'), "ANSI escape in log file");
    }

    #[test]
    fn test_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("polyplot.log");
        std::fs::write(&path, "earlier run\n").unwrap();

        let file = open_log_file(path.to_str().unwrap()).unwrap();
        let subscriber = file_subscriber(EnvFilter::new("info"), file);
        tracing::subscriber::with_default(subscriber, || tracing::warn!("second run"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("earlier run\n"));
        assert!(content.contains("second run"));
    }

    #[test]
    fn test_unopenable_log_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_dir").join("polyplot.log");
        assert!(open_log_file(missing.to_str().unwrap()).is_none());
        // A directory cannot be opened as a file either.
        assert!(open_log_file(dir.path().to_str().unwrap()).is_none());
    }
}
