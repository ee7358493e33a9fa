// PolyPlot - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for PolyPlot configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/polyplot/ or %APPDATA%\PolyPlot\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still works with
/// an older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[window]` section.
    pub window: WindowSection,
    /// `[view]` section.
    pub view: ViewSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[window]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct WindowSection {
    /// Initial width in logical pixels.
    pub width: Option<u32>,
    /// Initial height in logical pixels.
    pub height: Option<u32>,
}

/// `[view]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ViewSection {
    /// Pixels per mathematical unit.
    pub pixels_per_unit: Option<f64>,
    /// Curve sampling step in units.
    pub detail: Option<f64>,
    /// Pixels moved per arrow key press.
    pub pan_step: Option<i32>,
    /// Half-length of axis ticks in pixels.
    pub notch_length: Option<f64>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Show the bottom status bar.
    pub show_status_bar: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Window --
    pub window_width: u32,
    pub window_height: u32,

    // -- View --
    pub pixels_per_unit: f64,
    pub detail: f64,
    pub pan_step: i32,
    pub notch_length: f64,

    // -- UI --
    pub show_status_bar: bool,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: constants::DEFAULT_WINDOW_WIDTH,
            window_height: constants::DEFAULT_WINDOW_HEIGHT,
            pixels_per_unit: constants::DEFAULT_PIXELS_PER_UNIT,
            detail: constants::DEFAULT_DETAIL,
            pan_step: constants::DEFAULT_PAN_STEP,
            notch_length: constants::DEFAULT_NOTCH_LENGTH,
            show_status_bar: true,
            log_level: None,
            log_file: None,
        }
    }
}

/// Read and parse a config file without validating values.
fn read_raw_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and validate a config file.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings (first run). An unreadable
/// or unparseable file yields defaults plus a warning: the application still
/// starts but the user is told.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match read_raw_config(config_path) {
        Ok(raw) => {
            tracing::info!(path = %config_path.display(), "Loaded config.toml");
            validate(raw)
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            (AppConfig::default(), vec![msg])
        }
    }
}

/// Validate each field against named constants, accumulating all problems.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Window --
    let edge = constants::MIN_WINDOW_EDGE..=constants::MAX_WINDOW_EDGE;
    if let Some(width) = raw.window.width {
        if edge.contains(&width) {
            config.window_width = width;
        } else {
            warnings.push(format!(
                "[window] width = {width} is out of range ({}-{}). Using default ({}).",
                constants::MIN_WINDOW_EDGE,
                constants::MAX_WINDOW_EDGE,
                constants::DEFAULT_WINDOW_WIDTH,
            ));
        }
    }
    if let Some(height) = raw.window.height {
        if edge.contains(&height) {
            config.window_height = height;
        } else {
            warnings.push(format!(
                "[window] height = {height} is out of range ({}-{}). Using default ({}).",
                constants::MIN_WINDOW_EDGE,
                constants::MAX_WINDOW_EDGE,
                constants::DEFAULT_WINDOW_HEIGHT,
            ));
        }
    }

    // -- View --
    if let Some(ppu) = raw.view.pixels_per_unit {
        if (constants::MIN_PIXELS_PER_UNIT..=constants::MAX_PIXELS_PER_UNIT).contains(&ppu) {
            config.pixels_per_unit = ppu;
        } else {
            warnings.push(format!(
                "[view] pixels_per_unit = {ppu} is out of range ({}-{}). Using default ({}).",
                constants::MIN_PIXELS_PER_UNIT,
                constants::MAX_PIXELS_PER_UNIT,
                constants::DEFAULT_PIXELS_PER_UNIT,
            ));
        }
    }
    if let Some(detail) = raw.view.detail {
        if (constants::MIN_DETAIL..=constants::MAX_DETAIL).contains(&detail) {
            config.detail = detail;
        } else {
            warnings.push(format!(
                "[view] detail = {detail} is out of range ({}-{}). Using default ({}).",
                constants::MIN_DETAIL,
                constants::MAX_DETAIL,
                constants::DEFAULT_DETAIL,
            ));
        }
    }
    if let Some(step) = raw.view.pan_step {
        if (constants::MIN_PAN_STEP..=constants::MAX_PAN_STEP).contains(&step) {
            config.pan_step = step;
        } else {
            warnings.push(format!(
                "[view] pan_step = {step} is out of range ({}-{}). Using default ({}).",
                constants::MIN_PAN_STEP,
                constants::MAX_PAN_STEP,
                constants::DEFAULT_PAN_STEP,
            ));
        }
    }
    if let Some(notch) = raw.view.notch_length {
        if (0.0..=constants::MAX_NOTCH_LENGTH).contains(&notch) {
            config.notch_length = notch;
        } else {
            warnings.push(format!(
                "[view] notch_length = {notch} is out of range (0-{}). Using default ({}).",
                constants::MAX_NOTCH_LENGTH,
                constants::DEFAULT_NOTCH_LENGTH,
            ));
        }
    }

    // -- UI --
    if let Some(show) = raw.ui.show_status_bar {
        config.show_status_bar = show;
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}
