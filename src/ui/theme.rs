// PolyPlot - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Canvas background (parchment).
pub const BACKGROUND: Color32 = Color32::from_rgb(228, 214, 167);

/// Axes and tick marks.
pub const AXIS: Color32 = Color32::from_rgb(128, 128, 128);

/// The plotted curve.
pub const CURVE: Color32 = Color32::from_rgb(28, 17, 10);

/// Squares on integer sample points.
pub const MARKER: Color32 = Color32::from_rgb(155, 41, 21);

/// Status bar "PAUSED" badge.
pub const PAUSED_BADGE: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Stroke width for every line on the canvas.
pub const LINE_WIDTH: f32 = 1.0;

/// Status bar height.
pub const STATUS_BAR_HEIGHT: f32 = 24.0;
