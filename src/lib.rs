//! Indimap - Pipeline Indication Data Viewer & Interactive Map
//!
//! Loads a CSV sheet of pipeline inspection indications, cleans it, and
//! displays an interactive indication map on the (axial distance, clock
//! position) plane with per-indication hover tooltips.

pub mod charts;
pub mod data;
pub mod gui;
