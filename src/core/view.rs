// PolyPlot - core/view.rs
//
// Mapping between mathematical coordinates and canvas pixels.
// Canvas pixels are relative to the top-left corner of the drawing area,
// with y growing downward.

use crate::util::constants;

/// Size of the drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when the point lies inside the canvas, with `margin` pixels of slack.
    pub fn contains(&self, point: ScreenPoint, margin: f64) -> bool {
        point.x >= -margin
            && point.x <= self.width + margin
            && point.y >= -margin
            && point.y <= self.height + margin
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(
            f64::from(constants::DEFAULT_WINDOW_WIDTH),
            f64::from(constants::DEFAULT_WINDOW_HEIGHT),
        )
    }
}

/// A position on the canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Arrow-key pan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Current view onto the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas x of the mathematical origin.
    pub origin_x: f64,
    /// Canvas y of the mathematical origin.
    pub origin_y: f64,
    /// Zoom: pixels per mathematical unit.
    pub pixels_per_unit: f64,
    /// Curve sampling step in mathematical units.
    pub detail: f64,
}

impl Viewport {
    /// Viewport with the origin at the centre of `canvas`.
    pub fn centred(canvas: Canvas, pixels_per_unit: f64, detail: f64) -> Self {
        Self {
            origin_x: (canvas.width / 2.0).trunc(),
            origin_y: (canvas.height / 2.0).trunc(),
            pixels_per_unit,
            detail,
        }
    }

    /// Mathematical units covered by one pixel.
    pub fn units_per_pixel(&self) -> f64 {
        1.0 / self.pixels_per_unit
    }

    /// Map a mathematical point to canvas pixels.
    pub fn to_screen(&self, x: f64, y: f64) -> ScreenPoint {
        ScreenPoint {
            x: self.origin_x + x * self.pixels_per_unit,
            y: self.origin_y - y * self.pixels_per_unit,
        }
    }

    /// Mathematical x-interval spanned by a canvas of the given width.
    pub fn visible_x_range(&self, canvas_width: f64) -> (f64, f64) {
        (
            -self.origin_x / self.pixels_per_unit,
            (canvas_width - self.origin_x) / self.pixels_per_unit,
        )
    }

    /// Mathematical y-interval spanned by a canvas of the given height,
    /// bottom edge first.
    pub fn visible_y_range(&self, canvas_height: f64) -> (f64, f64) {
        (
            (self.origin_y - canvas_height) / self.pixels_per_unit,
            self.origin_y / self.pixels_per_unit,
        )
    }

    /// Move the camera by `step` pixels. The plot slides the opposite way.
    pub fn pan(&mut self, direction: Direction, step: i32) {
        let step = f64::from(step);
        match direction {
            Direction::Up => self.origin_y += step,
            Direction::Down => self.origin_y -= step,
            Direction::Left => self.origin_x += step,
            Direction::Right => self.origin_x -= step,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::centred(
            Canvas::default(),
            constants::DEFAULT_PIXELS_PER_UNIT,
            constants::DEFAULT_DETAIL,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport_is_centred() {
        let v = Viewport::default();
        assert_eq!(v.origin_x, 800.0);
        assert_eq!(v.origin_y, 450.0);
        assert!((v.units_per_pixel() - 0.05).abs() < 1e-12);
        assert!((v.detail - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_to_screen_flips_y() {
        let v = Viewport::default();
        assert_eq!(v.to_screen(0.0, 0.0), ScreenPoint::new(800.0, 450.0));
        assert_eq!(v.to_screen(1.0, 1.0), ScreenPoint::new(820.0, 430.0));
        assert_eq!(v.to_screen(-2.0, -0.5), ScreenPoint::new(760.0, 460.0));
    }

    #[test]
    fn test_visible_ranges() {
        let v = Viewport::default();
        let (left, right) = v.visible_x_range(1600.0);
        assert!((left + 40.0).abs() < 1e-9);
        assert!((right - 40.0).abs() < 1e-9);
        let (bottom, top) = v.visible_y_range(900.0);
        assert!((bottom + 22.5).abs() < 1e-9);
        assert!((top - 22.5).abs() < 1e-9);
    }

    #[test]
    fn test_pan_moves_origin_against_arrow() {
        let mut v = Viewport::default();
        v.pan(Direction::Up, 50);
        assert_eq!(v.origin_y, 500.0);
        v.pan(Direction::Down, 50);
        v.pan(Direction::Down, 50);
        assert_eq!(v.origin_y, 400.0);
        v.pan(Direction::Left, 50);
        assert_eq!(v.origin_x, 850.0);
        v.pan(Direction::Right, 50);
        v.pan(Direction::Right, 50);
        assert_eq!(v.origin_x, 750.0);
    }

    #[test]
    fn test_centred_truncates_odd_sizes() {
        let v = Viewport::centred(Canvas::new(801.0, 601.0), 20.0, 0.05);
        assert_eq!(v.origin_x, 400.0);
        assert_eq!(v.origin_y, 300.0);
    }

    #[test]
    fn test_canvas_contains_with_margin() {
        let c = Canvas::new(100.0, 50.0);
        assert!(c.contains(ScreenPoint::new(0.0, 0.0), 0.0));
        assert!(!c.contains(ScreenPoint::new(-3.0, 10.0), 0.0));
        assert!(c.contains(ScreenPoint::new(-3.0, 10.0), 5.0));
        assert!(!c.contains(ScreenPoint::new(10.0, 60.0), 5.0));
    }
}
