// PolyPlot - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PolyPlot";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "PolyPlot";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log level when neither RUST_LOG, --debug nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Window
// =============================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1600;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 900;

/// Smallest window edge accepted from config or CLI.
pub const MIN_WINDOW_EDGE: u32 = 200;

/// Largest window edge accepted from config or CLI.
pub const MAX_WINDOW_EDGE: u32 = 8192;

/// Minimum size the window can be resized down to.
pub const MIN_INNER_SIZE: [f32; 2] = [320.0, 240.0];

// =============================================================================
// View
// =============================================================================

/// Default zoom: screen pixels per mathematical unit (1 / 20 units per pixel).
pub const DEFAULT_PIXELS_PER_UNIT: f64 = 20.0;

/// Bounds on pixels per unit.
pub const MIN_PIXELS_PER_UNIT: f64 = 1.0;
pub const MAX_PIXELS_PER_UNIT: f64 = 1000.0;

/// Default curve sampling step in mathematical units.
pub const DEFAULT_DETAIL: f64 = 0.05;

/// Bounds on the sampling step.
pub const MIN_DETAIL: f64 = 0.001;
pub const MAX_DETAIL: f64 = 1.0;

/// Pixels the origin moves per arrow key press.
pub const DEFAULT_PAN_STEP: i32 = 50;

/// Bounds on the pan step.
pub const MIN_PAN_STEP: i32 = 1;
pub const MAX_PAN_STEP: i32 = 1000;

/// Half-length of an axis tick in pixels.
pub const DEFAULT_NOTCH_LENGTH: f64 = 5.0;

/// Upper bound on tick half-length.
pub const MAX_NOTCH_LENGTH: f64 = 50.0;

/// Edge length of the square drawn on integer sample points, in pixels.
pub const MARKER_SIZE: f64 = 5.0;

/// Hard cap on curve samples per frame, guards against a tiny detail step
/// combined with a huge window.
pub const MAX_CURVE_SAMPLES: usize = 200_000;

// =============================================================================
// Export
// =============================================================================

/// Default inclusive range for `--export`.
pub const DEFAULT_EXPORT_FROM: i64 = -5;
pub const DEFAULT_EXPORT_TO: i64 = 5;

/// Maximum number of points a single export may produce.
pub const MAX_EXPORT_POINTS: u64 = 1_000_000;
