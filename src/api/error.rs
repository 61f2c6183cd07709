use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("invalid API response ({1}): {0}")]
    InvalidResponse(String, String),
    #[error("no station found")]
    NoStationsFound,
    #[error("token store error: {0}")]
    TokenStore(String),
    #[error("report format error: {0}")]
    Format(String),
}
