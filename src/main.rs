use deye_rs::api;
use deye_rs::report;
use deye_rs::settings::{read_settings, Settings};
use deye_rs::token_cache::TokenCache;
use deye_rs::Error;

use std::path::PathBuf;
use std::time::Duration;

fn token_cache(settings: &Settings) -> Result<TokenCache, Error> {
    let path = match &settings.token_path {
        Some(path) => PathBuf::from(path),
        None => TokenCache::default_path()?,
    };
    Ok(TokenCache::new(path))
}

async fn run() -> Result<(), Error> {
    let settings = read_settings()?;
    let token_cache = token_cache(&settings)?;

    let api = api::api(
        settings.api_url,
        settings.app_id,
        settings.app_secret,
        settings.user_email,
        settings.user_password,
    );

    let mut session = api::authorize(
        api,
        token_cache,
        Duration::from_secs(settings.timeout_secs),
    )
    .await?;

    let report = report::build_report(&mut session).await?;
    println!("{}", report::to_json(&report)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
