// PolyPlot - ui/panels/plot.rs
//
// The plot canvas: background, axes, ticks, curve and integer markers,
// drawn with immediate-mode painter calls.

use crate::app::state::AppState;
use crate::core::scene::Segment;
use crate::core::view::{Canvas, ScreenPoint};
use crate::ui::theme;
use crate::util::constants;

fn to_pos(origin: egui::Pos2, point: ScreenPoint) -> egui::Pos2 {
    egui::pos2(origin.x + point.x as f32, origin.y + point.y as f32)
}

fn draw_segment(
    painter: &egui::Painter,
    origin: egui::Pos2,
    segment: &Segment,
    stroke: egui::Stroke,
) {
    painter.line_segment(
        [to_pos(origin, segment.from), to_pos(origin, segment.to)],
        stroke,
    );
}

/// Render the plot into all remaining space of `ui`.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let rect = response.rect;
    let canvas = Canvas::new(f64::from(rect.width()), f64::from(rect.height()));

    painter.rect_filled(rect, 0.0, theme::BACKGROUND);

    let scene = state.scene(canvas);
    let origin = rect.min;

    let axis_stroke = egui::Stroke::new(theme::LINE_WIDTH, theme::AXIS);
    for segment in scene.axes.iter().chain(&scene.notches) {
        draw_segment(&painter, origin, segment, axis_stroke);
    }

    let curve_stroke = egui::Stroke::new(theme::LINE_WIDTH, theme::CURVE);
    for segment in &scene.curve {
        draw_segment(&painter, origin, segment, curve_stroke);
    }

    // Squares span [centre - 2, centre + 3) like a 5 px pixel-grid rect.
    let half = (constants::MARKER_SIZE / 2.0).floor() as f32;
    let size = egui::vec2(constants::MARKER_SIZE as f32, constants::MARKER_SIZE as f32);
    for marker in &scene.markers {
        let min = to_pos(origin, *marker) - egui::vec2(half, half);
        painter.rect_filled(egui::Rect::from_min_size(min, size), 0.0, theme::MARKER);
    }
}
