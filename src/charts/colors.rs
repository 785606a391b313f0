//! Indication Color Module
//! Fixed fill colors per indication type, with a fallback palette.

use egui::Color32;

/// Known indication type codes and their map colors.
pub const COLOR_SCHEME: [(&str, Color32); 24] = [
    ("ARCB", Color32::from_rgb(160, 160, 160)),
    ("BCKL", Color32::from_rgb(255, 0, 0)),
    ("CAD", Color32::from_rgb(255, 165, 0)),
    ("CPOR", Color32::from_rgb(0, 255, 0)),
    ("CEC", Color32::from_rgb(0, 128, 0)),
    ("DNT", Color32::from_rgb(255, 255, 0)),
    ("EC", Color32::from_rgb(0, 0, 255)),
    ("EML", Color32::from_rgb(0, 128, 255)),
    ("IF", Color32::from_rgb(255, 0, 255)),
    ("ILI", Color32::from_rgb(128, 0, 128)),
    ("IML", Color32::from_rgb(108, 0, 128)),
    ("LAM", Color32::from_rgb(128, 128, 128)),
    ("LIN", Color32::from_rgb(128, 0, 0)),
    ("MD", Color32::from_rgb(255, 192, 203)),
    ("MFR", Color32::from_rgb(0, 255, 255)),
    ("MILL", Color32::from_rgb(255, 255, 255)),
    ("PDW", Color32::from_rgb(0, 0, 0)),
    ("POR", Color32::from_rgb(128, 128, 0)),
    ("SCC", Color32::from_rgb(255, 128, 0)),
    ("UNC", Color32::from_rgb(128, 255, 0)),
    ("UNF", Color32::from_rgb(0, 255, 128)),
    ("WR", Color32::from_rgb(0, 128, 255)),
    ("WRNK", Color32::from_rgb(128, 0, 255)),
    ("WS", Color32::from_rgb(0, 255, 255)),
];

/// Fallback palette for indication types outside the fixed scheme.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Get the color for an indication type.
///
/// Types outside [`COLOR_SCHEME`] rotate through [`PALETTE`] by series
/// index so foreign data still renders with distinct colors.
pub fn indication_color(indication_type: &str, series_index: usize) -> Color32 {
    COLOR_SCHEME
        .iter()
        .find(|(name, _)| *name == indication_type)
        .map(|(_, color)| *color)
        .unwrap_or(PALETTE[series_index % PALETTE.len()])
}
