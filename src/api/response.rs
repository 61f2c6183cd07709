use serde_json::Value;

/// Literal `msg` value the service uses to signal a rejected access token.
pub const INVALID_TOKEN_MSG: &str = "auth invalid token";

/// Outcome of the `success`/`msg` envelope check on a 2xx response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseStatus {
    Success,
    InvalidToken,
    Failed(String),
}

/// Classify a response body by its `success` flag. A missing or non-boolean
/// `success` counts as failure.
pub fn status(value: &Value) -> ResponseStatus {
    let success = value
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if success {
        ResponseStatus::Success
    } else {
        match value.get("msg").and_then(Value::as_str) {
            Some(INVALID_TOKEN_MSG) => ResponseStatus::InvalidToken,
            Some(msg) => ResponseStatus::Failed(msg.to_string()),
            None => ResponseStatus::Failed(value.to_string()),
        }
    }
}

mod lenient {
    use serde::{de, Deserialize, Deserializer};
    use serde_json::Value;

    /* The service is not consistent about numeric telemetry: the same field
     * can arrive as a JSON number, a string-encoded number or null. */
    pub fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        match Value::deserialize(d)? {
            Value::Null => Ok(None),
            Value::Number(num) => num
                .as_f64()
                .map(Some)
                .ok_or_else(|| de::Error::custom("invalid number")),
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => s.parse().map(Some).map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected number, string or null, got {}",
                other
            ))),
        }
    }

    pub fn opt_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        match Value::deserialize(d)? {
            Value::Null => Ok(None),
            Value::Number(num) => num
                .as_i64()
                .map(Some)
                .ok_or_else(|| de::Error::custom("invalid integer")),
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => s.parse().map(Some).map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected integer, string or null, got {}",
                other
            ))),
        }
    }

    /* Station ids are JSON numbers on the wire but key the report as strings. */
    pub fn id_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        match Value::deserialize(d)? {
            Value::Number(num) => Ok(num.to_string()),
            Value::String(s) if !s.is_empty() => Ok(s),
            other => Err(de::Error::custom(format!("invalid station id: {}", other))),
        }
    }
}

pub mod get_token {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct GetToken {
        #[serde(default)]
        pub success: bool,
        pub msg: Option<String>,
        #[serde(rename = "accessToken")]
        pub access_token: Option<String>,
    }
}

pub mod get_station_list {
    use super::lenient;
    use crate::model;
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Station {
        #[serde(deserialize_with = "lenient::id_string")]
        pub id: String,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub location_lat: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub location_lng: Option<f64>,
        #[serde(default)]
        pub location_address: Option<String>,
        #[serde(default, deserialize_with = "lenient::opt_i64")]
        pub region_nation_id: Option<i64>,
        #[serde(default)]
        pub region_timezone: Option<String>,
        #[serde(default)]
        pub grid_interconnection_type: Option<String>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub installed_capacity: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub start_operating_time: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub created_date: Option<f64>,
        #[serde(default, rename = "batterySOC", deserialize_with = "lenient::opt_f64")]
        pub battery_soc: Option<f64>,
        #[serde(default)]
        pub connection_status: Option<String>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub generation_power: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub last_update_time: Option<f64>,
        #[serde(default)]
        pub contact_phone: Option<String>,
        #[serde(default)]
        pub owner_name: Option<String>,
    }

    #[derive(Deserialize)]
    pub struct GetStationList {
        /* a successful response without the array means "no stations" */
        #[serde(default, rename = "stationList")]
        pub station_list: Vec<Station>,
        #[serde(default, deserialize_with = "lenient::opt_i64")]
        pub total: Option<i64>,
    }

    impl From<Station> for model::Station {
        fn from(resp: Station) -> model::Station {
            model::Station {
                id: resp.id,
                name: resp.name,
                location_lat: resp.location_lat,
                location_lng: resp.location_lng,
                location_address: resp.location_address,
                region_nation_id: resp.region_nation_id,
                region_timezone: resp.region_timezone,
                grid_interconnection_type: resp.grid_interconnection_type,
                installed_capacity: resp.installed_capacity,
                start_operating_time: resp.start_operating_time,
                created_date: resp.created_date,
                battery_soc: resp.battery_soc,
                connection_status: resp.connection_status,
                generation_power: resp.generation_power,
                last_update_time: resp.last_update_time,
                contact_phone: resp.contact_phone,
                owner_name: resp.owner_name,
            }
        }
    }
}

pub mod get_station_latest {
    use super::lenient;
    use crate::model;
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GetStationLatest {
        #[serde(default, deserialize_with = "lenient::opt_i64")]
        pub code: Option<i64>,
        #[serde(default)]
        pub msg: Option<String>,
        #[serde(default)]
        pub success: bool,
        #[serde(default)]
        pub request_id: Option<String>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub generation_power: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub consumption_power: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub grid_power: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub purchase_power: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub wire_power: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub charge_power: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub discharge_power: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub battery_power: Option<f64>,
        #[serde(default, rename = "batterySOC", deserialize_with = "lenient::opt_f64")]
        pub battery_soc: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub irradiate_intensity: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        pub last_update_time: Option<f64>,
    }

    impl From<GetStationLatest> for model::StationData {
        fn from(resp: GetStationLatest) -> model::StationData {
            model::StationData {
                code: resp.code,
                msg: resp.msg,
                success: resp.success,
                request_id: resp.request_id,
                generation_power: resp.generation_power,
                consumption_power: resp.consumption_power,
                grid_power: resp.grid_power,
                purchase_power: resp.purchase_power,
                wire_power: resp.wire_power,
                charge_power: resp.charge_power,
                discharge_power: resp.discharge_power,
                battery_power: resp.battery_power,
                battery_soc: resp.battery_soc,
                irradiate_intensity: resp.irradiate_intensity,
                last_update_time: resp.last_update_time,
            }
        }
    }
}
