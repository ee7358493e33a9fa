// PolyPlot - app/state.rs
//
// Application state: the viewport, pause/quit flags and the last drawn
// scene. Owned by the eframe::App implementation.

use crate::core::polynomial::{Polynomial, SEXTIC};
use crate::core::scene::{self, Scene};
use crate::core::view::{Canvas, Direction, Viewport};
use crate::platform::config::AppConfig;

/// A user command decoded from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePause,
    Pan(Direction),
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The function being plotted.
    pub polynomial: Polynomial,

    /// Current view transform.
    pub viewport: Viewport,

    /// Pixels moved per pan action.
    pub pan_step: i32,

    /// Half-length of axis ticks in pixels.
    pub notch_length: f64,

    /// While paused the last frame stays on screen unchanged.
    pub paused: bool,

    /// Set once the user asks to quit; the GUI closes the window.
    pub quit_requested: bool,

    /// Whether the bottom status bar is drawn.
    pub show_status_bar: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,

    /// Status message for the status bar.
    pub status_message: String,

    /// Most recently built scene.
    last_scene: Option<Scene>,

    /// Window size the origin was centred on before the real plot area
    /// was known. Cleared by the first scene.
    provisional_canvas: Option<Canvas>,
}

impl AppState {
    /// Create initial state from validated config. The origin starts at the
    /// centre of the configured window and is settled onto the real plot
    /// area by the first scene.
    pub fn new(config: &AppConfig, debug_mode: bool) -> Self {
        let canvas = Canvas::new(
            f64::from(config.window_width),
            f64::from(config.window_height),
        );
        Self {
            polynomial: SEXTIC,
            viewport: Viewport::centred(canvas, config.pixels_per_unit, config.detail),
            pan_step: config.pan_step,
            notch_length: config.notch_length,
            paused: false,
            quit_requested: false,
            show_status_bar: config.show_status_bar,
            debug_mode,
            status_message: "Running".to_string(),
            last_scene: None,
            provisional_canvas: Some(canvas),
        }
    }

    /// Re-centre on the first real canvas, which is smaller than the window
    /// when the status bar is shown. Pans made before the first frame are kept.
    fn settle_origin(&mut self, canvas: Canvas) {
        if let Some(provisional) = self.provisional_canvas.take() {
            let dx = (canvas.width / 2.0).trunc() - (provisional.width / 2.0).trunc();
            let dy = (canvas.height / 2.0).trunc() - (provisional.height / 2.0).trunc();
            self.viewport.origin_x += dx;
            self.viewport.origin_y += dy;
            tracing::debug!(
                width = canvas.width,
                height = canvas.height,
                dx,
                dy,
                "Origin centred on plot area"
            );
        }
    }

    /// Apply one user action.
    ///
    /// Panning is accepted while paused; the new view appears on resume.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                tracing::info!("Quit requested");
                self.quit_requested = true;
            }
            Action::TogglePause => {
                self.paused = !self.paused;
                self.status_message = if self.paused { "Paused" } else { "Running" }.to_string();
                tracing::debug!(paused = self.paused, "Pause toggled");
            }
            Action::Pan(direction) => {
                self.viewport.pan(direction, self.pan_step);
                tracing::debug!(
                    ?direction,
                    origin_x = self.viewport.origin_x,
                    origin_y = self.viewport.origin_y,
                    "Panned"
                );
            }
        }
    }

    /// Scene to draw this frame.
    ///
    /// Rebuilt every frame while running. While paused the previous scene is
    /// returned as-is, so neither panning nor resizing shows until resume.
    pub fn scene(&mut self, canvas: Canvas) -> &Scene {
        self.settle_origin(canvas);
        let scene = match self.last_scene.take() {
            Some(previous) if self.paused => previous,
            _ => scene::build(
                &self.viewport,
                canvas,
                &self.polynomial,
                self.notch_length,
            ),
        };
        self.last_scene.insert(scene)
    }

    /// Centre of the frame currently on screen, in mathematical units.
    ///
    /// While paused this is the frozen frame, not the live viewport.
    pub fn displayed_centre(&self) -> Option<(f64, f64)> {
        self.last_scene.as_ref().map(Scene::view_centre)
    }

    /// True when panning while paused has moved the view away from the
    /// frozen frame.
    pub fn pan_pending(&self) -> bool {
        self.last_scene.as_ref().is_some_and(|scene| {
            scene.viewport.origin_x != self.viewport.origin_x
                || scene.viewport.origin_y != self.viewport.origin_y
        })
    }
}
