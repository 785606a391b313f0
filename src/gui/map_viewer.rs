//! Map Viewer Widget
//! Central panel displaying the interactive indication map.

use crate::charts::{MapData, MapPlotter};
use egui::{Color32, RichText};
use std::sync::Arc;

/// Central map display area with a manual legend row above the plot.
pub struct MapViewer {
    map: Option<Arc<MapData>>,
}

impl Default for MapViewer {
    fn default() -> Self {
        Self { map: None }
    }
}

impl MapViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the current map
    pub fn clear(&mut self) {
        self.map = None;
    }

    /// Replace the displayed map
    pub fn set_map(&mut self, map: MapData) {
        self.map = Some(Arc::new(map));
    }

    pub fn map(&self) -> Option<&Arc<MapData>> {
        self.map.as_ref()
    }

    /// Draw the map viewer
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(map) = &self.map else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        let indication_count: usize = map.series.iter().map(|s| s.boxes.len()).sum();

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Indication Map")
                    .size(18.0)
                    .strong(),
            );
            ui.label(
                RichText::new(format!(
                    "{} indications · {}\" pipe · centered on {}",
                    indication_count,
                    map.pipe_diameter_in,
                    map.view.label()
                ))
                .size(12.0)
                .color(Color32::GRAY),
            );
        });

        ui.add_space(6.0);

        // Legend row: one color square per indication type.
        ui.horizontal_wrapped(|ui| {
            for series in &map.series {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 3.0, series.color);
                ui.label(RichText::new(&series.indication_type).size(12.0));
                ui.add_space(10.0);
            }
        });

        ui.add_space(6.0);

        MapPlotter::draw_map(ui, map);
    }
}
