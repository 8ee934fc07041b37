use serde::Serialize;

use super::ReportError;
use crate::simulation::SimulationResult;

/// Attachment name of the CSV download.
pub const CSV_FILENAME: &str = "simulation_report.csv";

/// One CSV line: the hourly record followed by the day summary.
#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "Hour")]
    hour: u8,
    #[serde(rename = "Temperature (C)")]
    temperature: f64,
    #[serde(rename = "Grid Heating (kW)")]
    grid_heating_kw: f64,
    #[serde(rename = "PCM Use (kW)")]
    pcm_use_kw: f64,
    #[serde(rename = "Price (EUR per kWh)")]
    price: f64,
    #[serde(rename = "Total Cost (EUR)")]
    total_cost: f64,
    #[serde(rename = "CO2 Saved (kg)")]
    co2_saved_kg: f64,
    #[serde(rename = "Trees Equivalent")]
    trees_equivalent: f64,
}

/// Render the result as CSV, one row per hour, summary repeated on every row.
pub fn to_csv(result: &SimulationResult) -> Result<String, ReportError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());

    for record in &result.records {
        writer.serialize(CsvRow {
            hour: record.hour,
            temperature: record.temperature,
            grid_heating_kw: record.grid_heating_kw,
            pcm_use_kw: record.pcm_use_kw,
            price: record.price,
            total_cost: result.total_cost,
            co2_saved_kg: result.co2_saved_kg,
            trees_equivalent: result.trees_equivalent,
        })?;
    }

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}
