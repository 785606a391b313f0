//! Data Cleaner Module
//! Validates and normalizes raw indication records into an IndicationTable.

use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;

/// Columns every indication sheet must carry.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Indication Type",
    "Indication Number",
    "Axial Distance",
    "Clock Position",
    "Length",
    "Width",
    "Pipe Diameter",
];

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Required column '{name}' not found in the data. Available columns: {available}")]
    MissingColumn { name: String, available: String },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Unparseable clock position: '{0}'")]
    BadClock(String),
    #[error("No rows left after cleaning. Please check the input data.")]
    Empty,
}

/// One cleaned indication record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indication {
    pub indication_type: String,
    pub number: String,
    /// Feet.
    pub axial_start_ft: f64,
    /// Normalized `"HH:MM"` display form.
    pub clock_position: String,
    /// Clock position as fractional hours (`hour + minute / 60`).
    pub clock_hours: f64,
    /// Inches.
    pub length_in: f64,
    /// Inches.
    pub width_in: f64,
}

/// Cleaned indications plus the pipe geometry they were measured on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicationTable {
    pub indications: Vec<Indication>,
    /// Inches, taken from the first cleaned row.
    pub pipe_diameter_in: f64,
}

/// Validate and normalize a raw DataFrame into an [`IndicationTable`].
///
/// Numeric columns are coerced to `f64`; rows with any missing or
/// un-coercible required field are dropped. Clock positions accept either
/// `"H:MM"` text or a numeric hour; a value in neither form is an error.
pub fn clean_indications(df: &DataFrame) -> Result<IndicationTable, CleanError> {
    for name in REQUIRED_COLUMNS {
        if df.column(name).is_err() {
            let available: Vec<String> = df
                .get_column_names()
                .iter()
                .map(|s| s.to_string())
                .collect();
            return Err(CleanError::MissingColumn {
                name: name.to_string(),
                available: available.join(", "),
            });
        }
    }

    let types = df.column("Indication Type")?;
    let numbers = df.column("Indication Number")?;
    let clocks = df.column("Clock Position")?;
    let axial = df.column("Axial Distance")?.cast(&DataType::Float64)?;
    let axial = axial.f64()?;
    let length = df.column("Length")?.cast(&DataType::Float64)?;
    let length = length.f64()?;
    let width = df.column("Width")?.cast(&DataType::Float64)?;
    let width = width.f64()?;
    let diameter = df.column("Pipe Diameter")?.cast(&DataType::Float64)?;
    let diameter = diameter.f64()?;

    let mut indications: Vec<Indication> = Vec::new();
    let mut pipe_diameter_in: Option<f64> = None;

    for i in 0..df.height() {
        let (Ok(ind_type), Ok(num)) = (types.get(i), numbers.get(i)) else {
            continue;
        };
        if ind_type.is_null() || num.is_null() {
            continue;
        }

        let clock_value = match clocks.get(i) {
            Ok(v) if !v.is_null() => v.to_string().trim_matches('"').to_string(),
            _ => continue,
        };
        let (clock_position, clock_hours) = parse_clock(&clock_value)?;

        let (Some(axial_start_ft), Some(length_in), Some(width_in), Some(dia)) =
            (axial.get(i), length.get(i), width.get(i), diameter.get(i))
        else {
            continue;
        };
        if axial_start_ft.is_nan() || length_in.is_nan() || width_in.is_nan() || dia.is_nan() {
            continue;
        }

        pipe_diameter_in.get_or_insert(dia);
        indications.push(Indication {
            indication_type: ind_type.to_string().trim_matches('"').to_string(),
            number: num.to_string().trim_matches('"').to_string(),
            axial_start_ft,
            clock_position,
            clock_hours,
            length_in,
            width_in,
        });
    }

    match pipe_diameter_in {
        Some(pipe_diameter_in) if !indications.is_empty() => Ok(IndicationTable {
            indications,
            pipe_diameter_in,
        }),
        _ => Err(CleanError::Empty),
    }
}

/// Parse a clock position into its `"HH:MM"` display form and fractional
/// hours.
///
/// Accepts `"H:MM"` / `"HH:MM"` text or a bare numeric hour (`3` and `3.0`
/// both normalize to `"03:00"`; any fractional part of a numeric hour is
/// discarded).
pub fn parse_clock(value: &str) -> Result<(String, f64), CleanError> {
    let value = value.trim();

    if let Some((h, m)) = value.split_once(':') {
        let hour: u32 = h
            .trim()
            .parse()
            .map_err(|_| CleanError::BadClock(value.to_string()))?;
        let minute: u32 = m
            .trim()
            .parse()
            .map_err(|_| CleanError::BadClock(value.to_string()))?;
        if hour >= 24 || minute >= 60 {
            return Err(CleanError::BadClock(value.to_string()));
        }
        return Ok((
            format!("{:02}:{:02}", hour, minute),
            hour as f64 + minute as f64 / 60.0,
        ));
    }

    let hour: f64 = value
        .parse()
        .map_err(|_| CleanError::BadClock(value.to_string()))?;
    let hour = hour.trunc();
    if !(0.0..24.0).contains(&hour) {
        return Err(CleanError::BadClock(value.to_string()));
    }
    Ok((format!("{:02}:00", hour as u32), hour))
}
