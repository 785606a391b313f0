//! Indication Map Module
//! Builds map geometry and draws the interactive map using egui_plot.
//!
//! The map plots one rectangle per indication on the (axial distance, clock
//! position) plane. Clock position grows toward the bottom of the plot, so
//! internally the y axis is negated: an adjusted clock offset of `h` hours
//! sits at plot y `-h`.

use crate::charts::colors;
use crate::charts::tooltip::{PointContext, RawPoint, TooltipLabel, TracingSink};
use crate::data::{Indication, IndicationTable};
use egui::Color32;
use egui_plot::{GridMark, Plot, PlotPoints, Points, Polygon};
use rayon::prelude::*;
use std::f64::consts::PI;
use std::sync::Arc;

/// Clock position shown at the vertical center of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockView {
    /// 12:00 centered; 06:00 at the top edge.
    Twelve,
    /// 06:00 centered; 12:00 at the top edge.
    Six,
}

impl Default for ClockView {
    fn default() -> Self {
        ClockView::Twelve
    }
}

impl ClockView {
    /// Clock hour mapped to the top edge of the map.
    pub fn start_hour(self) -> f64 {
        match self {
            ClockView::Twelve => 6.0,
            ClockView::Six => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClockView::Twelve => "12:00",
            ClockView::Six => "06:00",
        }
    }
}

/// One plotted indication rectangle, in map coordinates.
#[derive(Debug, Clone)]
pub struct IndicationBox {
    pub indication: Indication,
    /// Axial start, feet.
    pub x0: f64,
    /// Axial end (start + length converted to feet).
    pub x1: f64,
    /// Clock start edge (negated adjusted hours).
    pub y0: f64,
    /// Clock end edge; always below `y0`.
    pub y1: f64,
}

impl IndicationBox {
    pub fn center(&self) -> [f64; 2] {
        [(self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0]
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x1 && y <= self.y0 && y >= self.y1
    }
}

/// All boxes of one indication type, with its draw color.
#[derive(Debug, Clone)]
pub struct MapSeries {
    pub indication_type: String,
    pub color: Color32,
    pub boxes: Vec<IndicationBox>,
}

/// Tick on the clock axis: plot y and its `"HH:MM"` label.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockTick {
    pub y: f64,
    pub label: String,
}

/// Geometry of one rendered indication map.
#[derive(Debug, Clone)]
pub struct MapData {
    pub view: ClockView,
    /// Inches.
    pub pipe_diameter_in: f64,
    pub series: Vec<MapSeries>,
    pub ticks: Vec<ClockTick>,
}

impl MapData {
    /// Build map geometry from a cleaned table, one series per indication
    /// type. Series are built in parallel and ordered by type name so
    /// fallback colors stay stable across rebuilds.
    pub fn build(table: &IndicationTable, view: ClockView) -> MapData {
        let start_hour = view.start_hour();
        let circumference_in = PI * table.pipe_diameter_in;

        let mut type_names: Vec<String> = table
            .indications
            .iter()
            .map(|ind| ind.indication_type.clone())
            .collect();
        type_names.sort();
        type_names.dedup();

        let series: Vec<MapSeries> = type_names
            .par_iter()
            .enumerate()
            .map(|(idx, name)| {
                let boxes = table
                    .indications
                    .iter()
                    .filter(|ind| &ind.indication_type == name)
                    .map(|ind| Self::place(ind, start_hour, circumference_in))
                    .collect();
                MapSeries {
                    indication_type: name.clone(),
                    color: colors::indication_color(name, idx),
                    boxes,
                }
            })
            .collect();

        MapData {
            view,
            pipe_diameter_in: table.pipe_diameter_in,
            series,
            ticks: clock_ticks(start_hour),
        }
    }

    fn place(ind: &Indication, start_hour: f64, circumference_in: f64) -> IndicationBox {
        let adjusted = (ind.clock_hours - start_hour).rem_euclid(12.0);
        // Width is circumferential: inches of arc mapped onto clock hours.
        let width_hours = ind.width_in / circumference_in * 24.0;
        IndicationBox {
            x0: ind.axial_start_ft,
            x1: ind.axial_start_ft + ind.length_in / 12.0,
            y0: -adjusted,
            y1: -(adjusted + width_hours),
            indication: ind.clone(),
        }
    }

    /// Find the box under a map point, if any.
    pub fn box_at(&self, x: f64, y: f64) -> Option<(&MapSeries, &IndicationBox)> {
        self.series.iter().find_map(|series| {
            series
                .boxes
                .iter()
                .find(|b| b.contains(x, y))
                .map(|b| (series, b))
        })
    }
}

/// 25 half-hour ticks spanning the 12 visible clock hours.
pub fn clock_ticks(start_hour: f64) -> Vec<ClockTick> {
    (0..25)
        .map(|i| {
            let offset = i as f64 * 0.5;
            ClockTick {
                y: -offset,
                label: format_clock_hours((start_hour + offset) % 12.0),
            }
        })
        .collect()
}

/// `"HH:MM"` for a fractional clock hour.
pub fn format_clock_hours(hours: f64) -> String {
    let whole = hours.floor();
    let minutes = ((hours - whole) * 60.0).round();
    format!("{:02}:{:02}", whole as u32, minutes as u32)
}

/// Tooltip context for a hovered indication box.
pub fn hover_context(series: &MapSeries, hovered: &IndicationBox) -> PointContext {
    let ind = &hovered.indication;
    PointContext {
        dataset_label: Some(series.indication_type.clone()),
        parsed_value: Some(ind.length_in),
        raw: RawPoint {
            indication_number: Some(ind.number.clone()),
            axial_start: Some(ind.axial_start_ft),
            width: Some(ind.width_in),
            clock_position: Some(ind.clock_position.clone()),
        },
    }
}

/// Draws the interactive indication map.
pub struct MapPlotter;

impl MapPlotter {
    /// Draw the map into the available space.
    ///
    /// Each box gets a filled polygon plus an invisible hover marker at its
    /// center; the tooltip label for the hovered marker is produced by
    /// [`TooltipLabel`].
    pub fn draw_map(ui: &mut egui::Ui, map: &Arc<MapData>) {
        let ticks = map.ticks.clone();
        let start_hour = map.view.start_hour();
        let hover_map = Arc::clone(map);

        Plot::new("indication_map")
            .x_axis_label("Axial Distance (ft)")
            .y_axis_label("Clock Position (hh:mm)")
            .allow_scroll(false)
            .include_y(0.5)
            .include_y(-12.5)
            // Same large step_size for all marks so they all display.
            .y_grid_spacer(move |_input| {
                ticks
                    .iter()
                    .map(|tick| GridMark {
                        value: tick.y,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .y_axis_formatter(move |mark, _range| {
                let offset = -mark.value;
                if !(0.0..=12.0).contains(&offset) {
                    return String::new();
                }
                // Only label the half-hour marks the spacer emits.
                if (offset * 2.0 - (offset * 2.0).round()).abs() > 1e-9 {
                    return String::new();
                }
                format_clock_hours((start_hour + offset) % 12.0)
            })
            .label_formatter(move |name, value| {
                if let Some((series, hovered)) = hover_map.box_at(value.x, value.y) {
                    TooltipLabel::format_with_sink(&hover_context(series, hovered), &TracingSink)
                } else if !name.is_empty() {
                    format!("{}: {:.2} ft", name, value.x)
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for series in &map.series {
                    for b in &series.boxes {
                        let corners = vec![
                            [b.x0, b.y0],
                            [b.x1, b.y0],
                            [b.x1, b.y1],
                            [b.x0, b.y1],
                        ];
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::new(corners))
                                .fill_color(series.color.gamma_multiply(0.5))
                                .stroke(egui::Stroke::new(1.0, series.color))
                                .name(&series.indication_type),
                        );
                    }

                    // Invisible hover markers at box centers. Alpha 1, not
                    // 0: a fully TRANSPARENT color would be replaced by an
                    // auto color.
                    let centers: PlotPoints =
                        series.boxes.iter().map(|b| b.center()).collect();
                    plot_ui.points(
                        Points::new(centers)
                            .radius(1.0)
                            .color(Color32::from_rgba_unmultiplied(0, 0, 0, 1))
                            .name(&series.indication_type),
                    );
                }
            });
    }
}
