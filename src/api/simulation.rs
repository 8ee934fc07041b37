//! Simulation endpoints: structured result, JSON columns and CSV download.

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use super::error::ApiError;
use crate::report::{self, ColumnPayload, CSV_FILENAME};
use crate::simulation::{simulate, SimulationConfig, SimulationResult};

/// Plausible indoor/outdoor temperature band accepted from clients (°C).
pub const MIN_TEMP_C: f64 = -50.0;
pub const MAX_TEMP_C: f64 = 60.0;

#[derive(Debug, Default, Deserialize)]
pub struct SimulationQuery {
    pub desired_temp: Option<f64>,
    pub outdoor_temp: Option<f64>,
}

impl SimulationQuery {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("desired_temp", self.desired_temp),
            ("outdoor_temp", self.outdoor_temp),
        ] {
            let Some(value) = value else { continue };
            if !value.is_finite() {
                return Err(format!("{name} must be a finite number"));
            }
            if !(MIN_TEMP_C..=MAX_TEMP_C).contains(&value) {
                return Err(format!(
                    "{name} must be between {MIN_TEMP_C} and {MAX_TEMP_C} °C, got {value}"
                ));
            }
        }
        Ok(())
    }

    pub fn into_config(self) -> Result<SimulationConfig, ApiError> {
        self.validate().map_err(ApiError::ValidationError)?;
        let defaults = SimulationConfig::default();
        Ok(SimulationConfig::new(
            self.desired_temp.unwrap_or(defaults.desired_temp),
            self.outdoor_temp.unwrap_or(defaults.outdoor_temp),
        ))
    }
}

fn run(query: Result<Query<SimulationQuery>, QueryRejection>) -> Result<SimulationResult, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let config = query.into_config()?;
    let result = simulate(&config);
    info!(
        desired_temp = config.desired_temp,
        outdoor_temp = config.outdoor_temp,
        total_cost = result.total_cost,
        "simulation served"
    );
    Ok(result)
}

/// GET /api/v1/simulation - Full hourly result including storage levels
pub async fn get_simulation(
    query: Result<Query<SimulationQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let result = run(query)?;
    Ok((StatusCode::OK, Json(result)))
}

/// GET /data/json - Column-oriented payload for the dashboard charts
pub async fn get_json(
    query: Result<Query<SimulationQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let result = run(query)?;
    Ok((StatusCode::OK, Json(ColumnPayload::from(&result))))
}

/// GET /data/csv - CSV report as a file attachment
pub async fn get_csv(
    query: Result<Query<SimulationQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let result = run(query)?;
    let body = report::to_csv(&result)?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment;filename={CSV_FILENAME}"),
            ),
        ],
        body,
    ))
}
