use serde::Serialize;

use crate::simulation::SimulationResult;

/// Column-oriented JSON payload: one array per hourly field, aligned by index,
/// with the day summary as sibling scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnPayload {
    #[serde(rename = "Hour")]
    pub hour: Vec<u8>,
    #[serde(rename = "Temperature (C)")]
    pub temperature: Vec<f64>,
    #[serde(rename = "Grid Heating (kW)")]
    pub grid_heating_kw: Vec<f64>,
    #[serde(rename = "PCM Use (kW)")]
    pub pcm_use_kw: Vec<f64>,
    #[serde(rename = "Price (EUR per kWh)")]
    pub price: Vec<f64>,
    #[serde(rename = "Total Cost (EUR)")]
    pub total_cost: f64,
    #[serde(rename = "CO2 Saved (kg)")]
    pub co2_saved_kg: f64,
    #[serde(rename = "Trees Equivalent")]
    pub trees_equivalent: f64,
}

impl From<&SimulationResult> for ColumnPayload {
    fn from(result: &SimulationResult) -> Self {
        let records = &result.records;
        Self {
            hour: records.iter().map(|r| r.hour).collect(),
            temperature: records.iter().map(|r| r.temperature).collect(),
            grid_heating_kw: records.iter().map(|r| r.grid_heating_kw).collect(),
            pcm_use_kw: records.iter().map(|r| r.pcm_use_kw).collect(),
            price: records.iter().map(|r| r.price).collect(),
            total_cost: result.total_cost,
            co2_saved_kg: result.co2_saved_kg,
            trees_equivalent: result.trees_equivalent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{RECORD_COLUMNS, SUMMARY_COLUMNS};
    use crate::simulation::{simulate, SimulationConfig};

    #[test]
    fn test_payload_keys_match_report_columns() {
        let result = simulate(&SimulationConfig::default());
        let value = serde_json::to_value(ColumnPayload::from(&result)).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), RECORD_COLUMNS.len() + SUMMARY_COLUMNS.len());
        for col in RECORD_COLUMNS {
            let column = obj[col].as_array().unwrap();
            assert_eq!(column.len(), 24, "column {col}");
        }
        for col in SUMMARY_COLUMNS {
            assert!(obj[col].is_number(), "summary {col}");
        }
    }

    #[test]
    fn test_payload_columns_align_with_records() {
        let result = simulate(&SimulationConfig::default());
        let payload = ColumnPayload::from(&result);

        assert_eq!(payload.hour, (0..24).collect::<Vec<u8>>());
        for (i, record) in result.records.iter().enumerate() {
            assert_eq!(payload.temperature[i], record.temperature);
            assert_eq!(payload.price[i], record.price);
        }
        assert_eq!(payload.total_cost, result.total_cost);
        assert_eq!(payload.co2_saved_kg, result.co2_saved_kg);
    }
}
