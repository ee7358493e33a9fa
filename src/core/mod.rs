// PolyPlot - core/mod.rs
//
// Core logic layer: the function, the view transform, frame geometry.
// Must NOT depend on: ui, platform, app, or egui.

pub mod export;
pub mod polynomial;
pub mod scene;
pub mod view;
