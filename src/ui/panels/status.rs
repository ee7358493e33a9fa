// PolyPlot - ui/panels/status.rs
//
// Bottom status bar: run/pause state, view offset and key hints.

use crate::app::state::AppState;
use crate::ui::theme;

/// Text for the view-centre readout.
///
/// Describes the frame on screen. Panels are laid out before the canvas, so
/// this is the previous frame; while paused it is the frozen one.
fn centre_label(state: &AppState) -> String {
    let (x, y) = state.displayed_centre().unwrap_or((0.0, 0.0));
    let mut label = format!("Centre: ({x:+.2}, {y:+.2})");
    if state.pan_pending() {
        label.push_str(" (pan pending)");
    }
    label
}

fn debug_label(state: &AppState) -> String {
    format!(
        "origin=({:.0}, {:.0}) units/px={} detail={}",
        state.viewport.origin_x,
        state.viewport.origin_y,
        state.viewport.units_per_pixel(),
        state.viewport.detail,
    )
}

/// Render the status bar contents.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        if state.paused {
            ui.label(
                egui::RichText::new(" PAUSED ")
                    .strong()
                    .color(theme::PAUSED_BADGE),
            );
        } else {
            ui.label(&state.status_message);
        }
        ui.separator();

        ui.label(centre_label(state));

        if state.debug_mode {
            ui.separator();
            ui.label(debug_label(state));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label("Arrows: pan   Space: pause   Esc: quit");
        });
    });
}
