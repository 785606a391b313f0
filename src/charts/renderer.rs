//! Static Map Renderer
//! Renders the indication map to a PNG image using plotters.

use crate::charts::map::{format_clock_hours, MapData};
use anyhow::anyhow;
use plotters::prelude::*;
use std::path::Path;

pub struct StaticMapRenderer;

impl StaticMapRenderer {
    /// Render the map to a PNG file.
    ///
    /// Same orientation as the interactive map: clock position grows toward
    /// the bottom, labeled every half hour.
    pub fn render_png(
        map: &MapData,
        path: &Path,
        width: u32,
        height: u32,
    ) -> anyhow::Result<()> {
        let (x_min, x_max) = Self::axial_range(map)
            .ok_or_else(|| anyhow!("Nothing to render: the map has no indications"))?;
        let start_hour = map.view.start_hour();

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Indication Map", ("sans-serif", 28))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, -12.5f64..0.5f64)
            .map_err(|e| anyhow!("{:?}", e))?;

        chart
            .configure_mesh()
            .x_desc("Axial Distance (ft)")
            .y_desc("Clock Position (hh:mm)")
            .y_labels(27)
            .y_label_formatter(&move |y| {
                let offset = -*y;
                if !(0.0..=12.0).contains(&offset) {
                    return String::new();
                }
                format_clock_hours((start_hour + offset) % 12.0)
            })
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;

        for series in &map.series {
            let color = RGBColor(series.color.r(), series.color.g(), series.color.b());
            chart
                .draw_series(series.boxes.iter().map(|b| {
                    Rectangle::new([(b.x0, b.y0), (b.x1, b.y1)], color.mix(0.5).filled())
                }))
                .map_err(|e| anyhow!("{:?}", e))?
                .label(series.indication_type.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.mix(0.5).filled())
                });
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;

        root.present().map_err(|e| anyhow!("{:?}", e))?;
        Ok(())
    }

    fn axial_range(map: &MapData) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for series in &map.series {
            for b in &series.boxes {
                min = min.min(b.x0);
                max = max.max(b.x1);
            }
        }
        if min.is_infinite() {
            return None;
        }
        let pad = ((max - min) * 0.05).max(1.0);
        Some((min - pad, max + pad))
    }
}
