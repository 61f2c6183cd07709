use crate::api::error::Error;

const DEFAULT_TIMEOUT_SECS: i64 = 30;

#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub api_url: String,
    pub app_id: String,
    pub app_secret: String,
    pub user_email: String,
    pub user_password: String,
    pub timeout_secs: u64,
    pub token_path: Option<String>,
}

/// Read settings from the environment (`API_URL`, `APP_ID`, `APP_SECRET`,
/// `USER_EMAIL`, `USER_PASSWORD`, optional `TIMEOUT_SECS` and `TOKEN_PATH`).
/// Fails before any network activity when a required value is missing or
/// empty.
pub fn read_settings() -> Result<Settings, Error> {
    let mut settings = config::Config::default();
    settings
        .merge(config::Environment::new())
        .map_err(|e| Error::Configuration(e.to_string()))?
        .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)
        .map_err(|e| Error::Configuration(e.to_string()))?;

    let settings: Settings = settings
        .try_into()
        .map_err(|e| Error::Configuration(e.to_string()))?;

    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), Error> {
    let required = [
        ("API_URL", &settings.api_url),
        ("APP_ID", &settings.app_id),
        ("APP_SECRET", &settings.app_secret),
        ("USER_EMAIL", &settings.user_email),
        ("USER_PASSWORD", &settings.user_password),
    ];

    for (name, value) in required {
        if value.is_empty() {
            return Err(Error::Configuration(format!("{} must not be empty", name)));
        }
    }
    Ok(())
}
