pub type Endpoint = str;

pub const LOGIN: &Endpoint = "/v1.0/account/token";
pub const STATION_LIST: &Endpoint = "/v1.0/station/list";
pub const STATION_LATEST: &Endpoint = "/v1.0/station/latest";
