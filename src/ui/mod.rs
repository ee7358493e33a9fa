// PolyPlot - ui/mod.rs
//
// UI layer: presentation and key bindings.
// Dependencies: app (state), core (read-only geometry), egui.
// Must NOT depend on: platform, direct I/O.

pub mod input;
pub mod panels;
pub mod theme;
