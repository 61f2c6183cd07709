use crate::token_cache::TokenCache;

pub type AccessToken = String;

#[derive(Debug, Clone)]
pub struct Api {
    pub api_url: String,
    pub app_id: String,
    pub app_secret: String,
    pub user_email: String,
    pub user_password: String,
}

/// Authorized API session. The token is the only mutable state: it is
/// replaced in place when the service rejects it and a re-login succeeds.
#[derive(Debug)]
pub struct LoggedInApi {
    pub api: Api,
    pub access_token: AccessToken,
    pub client: reqwest::Client,
    pub token_cache: TokenCache,
}

/// Station metadata snapshot as reported by the list endpoint.
#[derive(Debug, Clone)]
pub struct Station {
    pub id: String,
    pub name: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub location_address: Option<String>,
    pub region_nation_id: Option<i64>,
    pub region_timezone: Option<String>,
    pub grid_interconnection_type: Option<String>,
    pub installed_capacity: Option<f64>,
    pub start_operating_time: Option<f64>,
    pub created_date: Option<f64>,
    pub battery_soc: Option<f64>,
    pub connection_status: Option<String>,
    pub generation_power: Option<f64>,
    pub last_update_time: Option<f64>,
    pub contact_phone: Option<String>,
    pub owner_name: Option<String>,
}

/// Point-in-time telemetry for a single station. Numeric fields are `None`
/// when the service reports null or omits them.
#[derive(Debug, Clone)]
pub struct StationData {
    pub code: Option<i64>,
    pub msg: Option<String>,
    pub success: bool,
    pub request_id: Option<String>,
    pub generation_power: Option<f64>,
    pub consumption_power: Option<f64>,
    pub grid_power: Option<f64>,
    pub purchase_power: Option<f64>,
    pub wire_power: Option<f64>,
    pub charge_power: Option<f64>,
    pub discharge_power: Option<f64>,
    pub battery_power: Option<f64>,
    pub battery_soc: Option<f64>,
    pub irradiate_intensity: Option<f64>,
    pub last_update_time: Option<f64>,
}
