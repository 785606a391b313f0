//! Map Export Module
//! Writes the cleaned indication data alongside the active view as JSON.

use crate::charts::map::ClockView;
use crate::data::{Indication, IndicationTable};
use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSON document describing one rendered map.
#[derive(Debug, Serialize)]
struct MapDocument<'a> {
    center_clock_position: &'static str,
    pipe_diameter_in: f64,
    indications: &'a [Indication],
}

/// Write the cleaned indications and map settings to a pretty-printed JSON
/// file.
pub fn write_map_json(
    table: &IndicationTable,
    view: ClockView,
    path: &Path,
) -> anyhow::Result<()> {
    let doc = MapDocument {
        center_clock_position: view.label(),
        pipe_diameter_in: table.pipe_diameter_in,
        indications: &table.indications,
    };

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &doc)
        .context("Failed to serialize map data")?;
    Ok(())
}
