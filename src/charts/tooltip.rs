//! Tooltip Label Module
//! Builds the hover label shown for a plotted indication.

/// Raw per-point fields carried through from the source record.
///
/// Numeric fields equal to zero are treated as absent and omitted from the
/// label, as are empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPoint {
    pub indication_number: Option<String>,
    /// Feet.
    pub axial_start: Option<f64>,
    /// Inches.
    pub width: Option<f64>,
    /// Clock-face position, e.g. `"03:00"`.
    pub clock_position: Option<String>,
}

/// Per-point context supplied by the map at tooltip render time.
///
/// Read-only input; the formatter never mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointContext {
    /// Series label (the indication type).
    pub dataset_label: Option<String>,
    /// The point's primary measurement: length, inches.
    pub parsed_value: Option<f64>,
    pub raw: RawPoint,
}

/// Receives the context and final label of every formatted tooltip.
///
/// Keeps the formatting itself pure: production code installs
/// [`TracingSink`], tests can record calls or skip the sink entirely.
pub trait DiagnosticSink {
    fn record(&self, context: &PointContext, label: &str);
}

/// Default sink: forwards to the `tracing` logger at DEBUG level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, context: &PointContext, label: &str) {
        tracing::debug!(?context, label, "tooltip label built");
    }
}

/// Builds tooltip labels for indication map points.
pub struct TooltipLabel;

impl TooltipLabel {
    /// Build the label for one point.
    ///
    /// Field order is fixed: dataset label, length, number, axial start,
    /// width, clock position. Missing fields are skipped; every segment but
    /// the clock carries a trailing `", "` separator.
    pub fn format(context: &PointContext) -> String {
        let mut label = String::new();

        if let Some(name) = &context.dataset_label {
            if !name.is_empty() {
                label.push_str(name);
                label.push_str(": ");
            }
        }
        if let Some(length) = context.parsed_value {
            label.push_str(&format!("Length: {}in, ", length));
        }
        if let Some(number) = &context.raw.indication_number {
            if !number.is_empty() {
                label.push_str(&format!("Number: {}, ", number));
            }
        }
        if let Some(axial_start) = context.raw.axial_start {
            if Self::is_set(axial_start) {
                label.push_str(&format!("Axial Start: {}ft, ", axial_start));
            }
        }
        if let Some(width) = context.raw.width {
            if Self::is_set(width) {
                label.push_str(&format!("Width: {}in, ", width));
            }
        }
        if let Some(clock) = &context.raw.clock_position {
            if !clock.is_empty() {
                label.push_str(&format!("Clock: {}", clock));
            }
        }

        label
    }

    /// Build the label and report it to a diagnostic sink.
    pub fn format_with_sink(context: &PointContext, sink: &dyn DiagnosticSink) -> String {
        let label = Self::format(context);
        sink.record(context, &label);
        label
    }

    // Zero is "no measurement" in the source data and is dropped from the
    // label; so is NaN from a failed upstream coercion.
    fn is_set(value: f64) -> bool {
        value != 0.0 && !value.is_nan()
    }
}
