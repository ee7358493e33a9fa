// PolyPlot - ui/panels/mod.rs

pub mod plot;
pub mod status;
