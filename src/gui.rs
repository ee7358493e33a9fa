// PolyPlot - gui.rs
//
// Top-level eframe::App implementation.
// One frame: read key presses, apply them, draw status bar and plot.

use crate::app::state::AppState;
use crate::ui;

/// The PolyPlot application.
pub struct PolyPlotApp {
    pub state: AppState,
}

impl PolyPlotApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PolyPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in ui::input::collect_actions(ctx) {
            self.state.apply(action);
        }

        // Escape: the close button is handled by eframe itself.
        if self.state.quit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if self.state.show_status_bar {
            egui::TopBottomPanel::bottom("status_bar")
                .exact_height(ui::theme::STATUS_BAR_HEIGHT)
                .show(ctx, |ui| {
                    ui::panels::status::render(ui, &self.state);
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(ui::theme::BACKGROUND))
            .show(ctx, |ui| {
                ui::panels::plot::render(ui, &mut self.state);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        tracing::info!(
            origin_x = self.state.viewport.origin_x,
            origin_y = self.state.viewport.origin_y,
            "PolyPlot shutting down"
        );
    }
}
