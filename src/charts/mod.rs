//! Charts module - Map geometry, tooltips, and rendering

pub mod colors;
mod export;
mod map;
mod renderer;
mod tooltip;

pub use export::write_map_json;
pub use map::{
    clock_ticks, format_clock_hours, hover_context, ClockTick, ClockView, IndicationBox, MapData,
    MapPlotter, MapSeries,
};
pub use renderer::StaticMapRenderer;
pub use tooltip::{DiagnosticSink, PointContext, RawPoint, TooltipLabel, TracingSink};
