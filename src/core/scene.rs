// PolyPlot - core/scene.rs
//
// Frame geometry: axes, ticks, the sampled curve and integer markers,
// all in canvas pixels. Holds no GUI types so it can be tested headless.

use crate::core::polynomial::Polynomial;
use crate::core::view::{Canvas, ScreenPoint, Viewport};
use crate::util::constants;

/// A straight line between two canvas points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: ScreenPoint,
    pub to: ScreenPoint,
}

impl Segment {
    pub fn new(from: ScreenPoint, to: ScreenPoint) -> Self {
        Self { from, to }
    }
}

/// Everything drawn in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Canvas the scene was built for.
    pub canvas: Canvas,
    /// View the scene was built from.
    pub viewport: Viewport,
    /// The y-axis followed by the x-axis.
    pub axes: Vec<Segment>,
    /// Tick marks at every visible integer unit on both axes.
    pub notches: Vec<Segment>,
    /// Polyline pieces of the curve that cross the canvas vertically.
    pub curve: Vec<Segment>,
    /// Centres of the squares drawn at integer x.
    pub markers: Vec<ScreenPoint>,
}

impl Scene {
    /// Mathematical coordinates shown at the centre of the canvas.
    pub fn view_centre(&self) -> (f64, f64) {
        let dx = (self.canvas.width / 2.0).trunc() - self.viewport.origin_x;
        let dy = self.viewport.origin_y - (self.canvas.height / 2.0).trunc();
        (
            dx / self.viewport.pixels_per_unit,
            dy / self.viewport.pixels_per_unit,
        )
    }
}

/// Inclusive integer span covered by a floating-point interval.
fn integers_within(low: f64, high: f64) -> std::ops::RangeInclusive<i64> {
    (low.ceil() as i64)..=(high.floor() as i64)
}

fn build_axes(viewport: &Viewport, canvas: Canvas) -> Vec<Segment> {
    vec![
        Segment::new(
            ScreenPoint::new(viewport.origin_x, 0.0),
            ScreenPoint::new(viewport.origin_x, canvas.height),
        ),
        Segment::new(
            ScreenPoint::new(0.0, viewport.origin_y),
            ScreenPoint::new(canvas.width, viewport.origin_y),
        ),
    ]
}

fn build_notches(viewport: &Viewport, canvas: Canvas, notch_length: f64) -> Vec<Segment> {
    let mut notches = Vec::new();

    // Ticks on the x-axis, skipped entirely when the axis is off screen.
    let oy = viewport.origin_y;
    if (-notch_length..=canvas.height + notch_length).contains(&oy) {
        let (left, right) = viewport.visible_x_range(canvas.width);
        for n in integers_within(left, right) {
            let tx = viewport.to_screen(n as f64, 0.0).x;
            notches.push(Segment::new(
                ScreenPoint::new(tx, oy - notch_length),
                ScreenPoint::new(tx, oy + notch_length),
            ));
        }
    }

    let ox = viewport.origin_x;
    if (-notch_length..=canvas.width + notch_length).contains(&ox) {
        let (bottom, top) = viewport.visible_y_range(canvas.height);
        for n in integers_within(bottom, top) {
            let ty = viewport.to_screen(0.0, n as f64).y;
            notches.push(Segment::new(
                ScreenPoint::new(ox - notch_length, ty),
                ScreenPoint::new(ox + notch_length, ty),
            ));
        }
    }

    notches
}

fn build_curve(viewport: &Viewport, canvas: Canvas, polynomial: &Polynomial) -> Vec<Segment> {
    let (left, right) = viewport.visible_x_range(canvas.width);
    if viewport.detail <= 0.0 || right <= left {
        return Vec::new();
    }

    // One sample past the right edge so the line reaches it.
    let wanted = ((right - left) / viewport.detail).ceil() as usize + 1;
    let samples = wanted.min(constants::MAX_CURVE_SAMPLES);
    if samples < wanted {
        tracing::debug!(
            wanted,
            cap = constants::MAX_CURVE_SAMPLES,
            "Curve sample count capped"
        );
    }

    let mut segments = Vec::with_capacity(samples);
    let mut last = viewport.to_screen(left, polynomial.eval(left));
    for k in 1..=samples {
        let x = left + k as f64 * viewport.detail;
        let point = viewport.to_screen(x, polynomial.eval(x));
        let above = last.y < 0.0 && point.y < 0.0;
        let below = last.y > canvas.height && point.y > canvas.height;
        if !above && !below {
            segments.push(Segment::new(last, point));
        }
        last = point;
    }
    segments
}

fn build_markers(
    viewport: &Viewport,
    canvas: Canvas,
    polynomial: &Polynomial,
) -> Vec<ScreenPoint> {
    let (left, right) = viewport.visible_x_range(canvas.width);
    integers_within(left, right)
        .map(|n| {
            let x = n as f64;
            viewport.to_screen(x, polynomial.eval(x))
        })
        .filter(|p| canvas.contains(*p, constants::MARKER_SIZE))
        .collect()
}

/// Build the full scene for one frame.
pub fn build(
    viewport: &Viewport,
    canvas: Canvas,
    polynomial: &Polynomial,
    notch_length: f64,
) -> Scene {
    let scene = Scene {
        canvas,
        viewport: *viewport,
        axes: build_axes(viewport, canvas),
        notches: build_notches(viewport, canvas, notch_length),
        curve: build_curve(viewport, canvas, polynomial),
        markers: build_markers(viewport, canvas, polynomial),
    };
    tracing::trace!(
        origin_x = viewport.origin_x,
        origin_y = viewport.origin_y,
        segments = scene.curve.len(),
        markers = scene.markers.len(),
        "Scene built"
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::polynomial::SEXTIC;
    use crate::core::view::Direction;

    fn default_scene() -> Scene {
        build(&Viewport::default(), Canvas::default(), &SEXTIC, 5.0)
    }

    #[test]
    fn test_axes_cross_at_origin() {
        let scene = default_scene();
        assert_eq!(
            scene.axes[0],
            Segment::new(ScreenPoint::new(800.0, 0.0), ScreenPoint::new(800.0, 900.0))
        );
        assert_eq!(
            scene.axes[1],
            Segment::new(ScreenPoint::new(0.0, 450.0), ScreenPoint::new(1600.0, 450.0))
        );
    }

    #[test]
    fn test_notch_count_matches_visible_integers() {
        let scene = default_scene();
        // x: -40..=40 (81 ticks), y: -22..=22 (45 ticks).
        assert_eq!(scene.notches.len(), 81 + 45);
        let first = scene.notches[0];
        assert_eq!(first.from, ScreenPoint::new(0.0, 445.0));
        assert_eq!(first.to, ScreenPoint::new(0.0, 455.0));
    }

    #[test]
    fn test_x_ticks_dropped_when_axis_off_screen() {
        let mut viewport = Viewport::default();
        for _ in 0..20 {
            viewport.pan(Direction::Up, 50);
        }
        let scene = build(&viewport, Canvas::default(), &SEXTIC, 5.0);
        assert!(scene.notches.iter().all(|s| s.from.y == s.to.y));
    }

    #[test]
    fn test_curve_segments_are_contiguous_in_x() {
        let scene = default_scene();
        assert!(!scene.curve.is_empty());
        for seg in &scene.curve {
            assert!((seg.to.x - seg.from.x - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_curve_culls_off_screen_runs() {
        let scene = default_scene();
        // Between roughly x = -5 and x = 5 the curve is on screen; far out
        // it shoots past the top, so far fewer than the 1601 samples survive.
        assert!(scene.curve.len() < 1600);
        for seg in &scene.curve {
            let both_above = seg.from.y < 0.0 && seg.to.y < 0.0;
            let both_below = seg.from.y > 900.0 && seg.to.y > 900.0;
            assert!(!both_above && !both_below);
        }
    }

    #[test]
    fn test_curve_spans_canvas_edge_to_edge() {
        let flat = Polynomial::new(&[0.0], 1.0);
        let scene = build(&Viewport::default(), Canvas::default(), &flat, 5.0);
        let first = scene.curve.first().map(|s| s.from.x);
        let last = scene.curve.last().map(|s| s.to.x);
        assert_eq!(first, Some(0.0));
        assert!(last.is_some_and(|x| x >= 1600.0));
        assert!(scene.curve.iter().all(|s| s.from.y == 450.0));
    }

    #[test]
    fn test_markers_sit_on_integer_points() {
        let scene = default_scene();
        let viewport = Viewport::default();
        let expected = viewport.to_screen(1.0, 0.4);
        assert!(scene
            .markers
            .iter()
            .any(|m| (m.x - expected.x).abs() < 1e-9 && (m.y - expected.y).abs() < 1e-9));
        // f(-4..=5) fits inside the 22.5-unit tall canvas, f(-5) = 58 does not.
        let xs: Vec<i64> = scene
            .markers
            .iter()
            .map(|m| ((m.x - 800.0) / 20.0).round() as i64)
            .collect();
        assert_eq!(xs, (-4..=5).collect::<Vec<_>>());
    }

    #[test]
    fn test_view_centre_follows_origin() {
        assert_eq!(default_scene().view_centre(), (0.0, 0.0));
        let mut viewport = Viewport::default();
        viewport.pan(Direction::Right, 50);
        viewport.pan(Direction::Up, 50);
        let scene = build(&viewport, Canvas::default(), &SEXTIC, 5.0);
        assert_eq!(scene.view_centre(), (2.5, 2.5));
    }

    #[test]
    fn test_zero_detail_yields_no_curve() {
        let mut viewport = Viewport::default();
        viewport.detail = 0.0;
        let scene = build(&viewport, Canvas::default(), &SEXTIC, 5.0);
        assert!(scene.curve.is_empty());
        assert_eq!(scene.axes.len(), 2);
    }
}
