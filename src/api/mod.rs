pub mod endpoint;
pub mod error;
pub mod response;

use crate::model;
use crate::model::AccessToken;
use crate::token_cache::TokenCache;
use endpoint::Endpoint;
pub use error::Error;
use response::get_station_latest::GetStationLatest;
use response::get_station_list::GetStationList;
use response::get_token::GetToken;
use response::ResponseStatus;
use serde_json::Value;
use sha2::{Digest, Sha256};

use std::collections::HashMap;
use std::time::Duration;

const STATION_LIST_PAGE: u32 = 1;
/* Only the first page is ever requested; accounts with more stations than
 * this are truncated. */
const STATION_LIST_PAGE_SIZE: u32 = 10;

pub fn api(
    api_url: String,
    app_id: String,
    app_secret: String,
    user_email: String,
    user_password: String,
) -> model::Api {
    model::Api {
        api_url,
        app_id,
        app_secret,
        user_email,
        user_password,
    }
}

/// Map a connection-level or non-2xx failure to Error
fn map_transport_err(error: reqwest::Error) -> Error {
    match error.status() {
        Some(http::StatusCode::UNAUTHORIZED) => Error::Authentication(error.to_string()),
        _ => Error::Transport(error.to_string()),
    }
}

fn password_hash(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Exchange the account credentials for a fresh access token. The token is
/// opaque; no format validation is performed.
pub async fn login(client: &reqwest::Client, api: &model::Api) -> Result<AccessToken, Error> {
    let url = format!("{}{}", api.api_url, endpoint::LOGIN);

    let request_body = HashMap::from([
        ("appSecret", api.app_secret.to_owned()),
        ("email", api.user_email.to_owned()),
        ("password", password_hash(&api.user_password)),
    ]);

    let response = client
        .post(url)
        .query(&[("appId", &api.app_id)])
        .json(&request_body)
        .send()
        .await
        .map_err(map_transport_err)?
        .error_for_status()
        .map_err(map_transport_err)?;

    let text = response
        .text()
        .await
        .map_err(|e| Error::Transport(format!("error reading API response: {}", e)))?;

    let parsed: GetToken = serde_json::from_str(&text)
        .map_err(|e| Error::InvalidResponse(text.clone(), e.to_string()))?;

    if !parsed.success {
        return Err(Error::Authentication(
            parsed
                .msg
                .unwrap_or_else(|| "login rejected with no message".to_string()),
        ));
    }

    parsed.access_token.ok_or_else(|| {
        Error::InvalidResponse(text, "accessToken missing from login response".to_string())
    })
}

/// Open an authorized session: reuse the persisted access token when one
/// exists, otherwise log in and persist the fresh token.
pub async fn authorize(
    api: model::Api,
    token_cache: TokenCache,
    timeout: Duration,
) -> Result<model::LoggedInApi, Error> {
    let client = reqwest::ClientBuilder::new()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Transport(e.to_string()))?;

    let access_token = match token_cache.load() {
        Some(token) => token,
        None => {
            let token = login(&client, &api).await?;
            token_cache.save(&token)?;
            token
        }
    };

    Ok(model::LoggedInApi {
        api,
        access_token,
        client,
        token_cache,
    })
}

async fn post(api: &model::LoggedInApi, endpoint: &Endpoint, data: &Value) -> Result<Value, Error> {
    let url = format!("{}{}", api.api.api_url, endpoint);

    let response = api
        .client
        .post(url)
        .bearer_auth(&api.access_token)
        .json(data)
        .send()
        .await
        .map_err(map_transport_err)?
        .error_for_status()
        .map_err(map_transport_err)?;

    let text = response
        .text()
        .await
        .map_err(|e| Error::Transport(format!("error reading API response: {}", e)))?;

    log::trace!(
        "endpoint: {}, data: {:#?}, response_text: {}",
        endpoint,
        data,
        text
    );

    serde_json::from_str(&text).map_err(|e| Error::InvalidResponse(text, e.to_string()))
}

/// POST to a bearer-authorized endpoint. When the service rejects the access
/// token, log in again, persist the fresh token and replay the call exactly
/// once.
async fn post_authorized(
    api: &mut model::LoggedInApi,
    endpoint: &Endpoint,
    data: &Value,
) -> Result<Value, Error> {
    let mut refreshed = false;
    loop {
        let value = post(api, endpoint, data).await?;

        match response::status(&value) {
            ResponseStatus::Success => return Ok(value),
            ResponseStatus::InvalidToken if !refreshed => {
                refreshed = true;
                log::info!("access token rejected by {}, re-authenticating", endpoint);
                let token = login(&api.client, &api.api).await?;
                api.token_cache.save(&token)?;
                api.access_token = token;
            }
            /* second rejection right after a fresh login: give up */
            ResponseStatus::InvalidToken => return Err(Error::Api(value.to_string())),
            ResponseStatus::Failed(msg) => return Err(Error::Api(msg)),
        }
    }
}

/// List the account's stations (first page only).
pub async fn stations(api: &mut model::LoggedInApi) -> Result<Vec<model::Station>, Error> {
    let data = serde_json::json!({
        "page": STATION_LIST_PAGE,
        "size": STATION_LIST_PAGE_SIZE,
    });

    let value = post_authorized(api, endpoint::STATION_LIST, &data).await?;

    serde_json::from_value::<GetStationList>(value.clone())
        .map_err(|e| Error::InvalidResponse(value.to_string(), e.to_string()))
        .map(|response| {
            response
                .station_list
                .into_iter()
                .map(model::Station::from)
                .collect()
        })
}

/// Read the latest telemetry snapshot of a single station.
pub async fn station_latest(
    api: &mut model::LoggedInApi,
    station_id: &str,
) -> Result<model::StationData, Error> {
    /* ids are numeric on the wire; preserve that where possible */
    let data = match station_id.parse::<i64>() {
        Ok(id) => serde_json::json!({ "stationId": id }),
        Err(_) => serde_json::json!({ "stationId": station_id }),
    };

    let value = post_authorized(api, endpoint::STATION_LATEST, &data).await?;

    serde_json::from_value::<GetStationLatest>(value.clone())
        .map_err(|e| Error::InvalidResponse(value.to_string(), e.to_string()))
        .map(model::StationData::from)
}
