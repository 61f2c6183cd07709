use crate::api::error::Error;
use crate::model::AccessToken;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const TOKEN_FILE: &str = "deye_access_token.txt";

/// Plain-text, single-token persistence. The file holds nothing but the
/// current access token and is overwritten whole on every save.
#[derive(Debug, Clone)]
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    pub fn new(path: impl Into<PathBuf>) -> TokenCache {
        TokenCache { path: path.into() }
    }

    /// Default token file location, next to the executable.
    pub fn default_path() -> Result<PathBuf, Error> {
        let exe = std::env::current_exe().map_err(|e| Error::TokenStore(e.to_string()))?;
        Ok(exe
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(TOKEN_FILE))
    }

    /// Persisted token, if any. Unreadable or empty files count as absent.
    pub fn load(&self) -> Option<AccessToken> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                /* tolerate a trailing newline in a hand-edited file */
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    log::debug!("unable to read token file {}: {}", self.path.display(), e);
                }
                None
            }
        }
    }

    pub fn save(&self, token: &AccessToken) -> Result<(), Error> {
        fs::write(&self.path, token).map_err(|e| {
            Error::TokenStore(format!("unable to write {}: {}", self.path.display(), e))
        })
    }
}
