//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;

pub use cleaner::{
    clean_indications, parse_clock, CleanError, Indication, IndicationTable, REQUIRED_COLUMNS,
};
pub use loader::{read_indication_csv, DataLoader, LoaderError};
