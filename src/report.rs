use crate::api;
use crate::api::error::Error;
use crate::model::{LoggedInApi, Station, StationData};
use indexmap::IndexMap;
use serde::Serialize;

/// Normalized telemetry keyed by station id, in station-list order.
pub type Report = IndexMap<String, StationReport>;

/// Flat per-station record emitted in the final JSON document. Every numeric
/// field is a finite float; absent source values collapse to 0.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    pub battery_power: f64,
    pub battery_soc: f64,
    pub charge_power: f64,
    pub consumption_power: f64,
    pub discharge_power: f64,
    pub generation_power: f64,
    pub grid_power: f64,
    pub irradiate_intensity: f64,
    pub last_update_time: f64,
    pub purchase_power: f64,
    pub station_name: String,
    pub wire_power: f64,
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

impl StationReport {
    pub fn new(station: &Station, data: &StationData) -> StationReport {
        StationReport {
            battery_power: finite_or_zero(data.battery_power),
            battery_soc: finite_or_zero(data.battery_soc),
            charge_power: finite_or_zero(data.charge_power),
            consumption_power: finite_or_zero(data.consumption_power),
            discharge_power: finite_or_zero(data.discharge_power),
            generation_power: finite_or_zero(data.generation_power),
            grid_power: finite_or_zero(data.grid_power),
            irradiate_intensity: finite_or_zero(data.irradiate_intensity),
            last_update_time: finite_or_zero(data.last_update_time),
            purchase_power: finite_or_zero(data.purchase_power),
            station_name: station.name.clone().unwrap_or_default(),
            wire_power: finite_or_zero(data.wire_power),
        }
    }
}

/// List all stations and collect the latest telemetry of each, strictly in
/// list order. A failure on any station aborts the whole report.
pub async fn build_report(api: &mut LoggedInApi) -> Result<Report, Error> {
    let stations = api::stations(api).await?;

    if stations.is_empty() {
        return Err(Error::NoStationsFound);
    }

    let mut report = Report::new();
    for station in stations {
        let data = api::station_latest(api, &station.id).await?;
        report.insert(station.id.clone(), StationReport::new(&station, &data));
    }

    Ok(report)
}

/// Render the report as the pretty-printed JSON document written to stdout.
pub fn to_json(report: &Report) -> Result<String, Error> {
    serde_json::to_string_pretty(report).map_err(|e| Error::Format(e.to_string()))
}
