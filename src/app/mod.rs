// PolyPlot - app/mod.rs
//
// Application layer: state management and action handling.
// Dependencies: core layer, validated config.
// Must NOT depend on: ui, egui.

pub mod state;
