//! Export formats for a [`SimulationResult`](crate::simulation::SimulationResult).
//!
//! Both formats share the same human-readable column names so the dashboard can
//! key charts by them regardless of which download it reads.

pub mod csv;
pub mod json;

use thiserror::Error;

pub use self::csv::{to_csv, CSV_FILENAME};
pub use self::json::ColumnPayload;

pub const COL_HOUR: &str = "Hour";
pub const COL_TEMPERATURE: &str = "Temperature (C)";
pub const COL_GRID_HEATING: &str = "Grid Heating (kW)";
pub const COL_PCM_USE: &str = "PCM Use (kW)";
pub const COL_PRICE: &str = "Price (EUR per kWh)";
pub const COL_TOTAL_COST: &str = "Total Cost (EUR)";
pub const COL_CO2_SAVED: &str = "CO2 Saved (kg)";
pub const COL_TREES: &str = "Trees Equivalent";

/// Per-hour columns, in report order.
pub const RECORD_COLUMNS: [&str; 5] = [
    COL_HOUR,
    COL_TEMPERATURE,
    COL_GRID_HEATING,
    COL_PCM_USE,
    COL_PRICE,
];

/// Day summary columns, in report order.
pub const SUMMARY_COLUMNS: [&str; 3] = [COL_TOTAL_COST, COL_CO2_SAVED, COL_TREES];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("CSV flush failed: {0}")]
    Flush(#[from] ::csv::IntoInnerError<::csv::Writer<Vec<u8>>>),

    #[error("CSV output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
