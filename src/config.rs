use std::fmt;

use actix_web::cookie::Key;

use crate::store::google_auth::DEFAULT_TOKEN_URI;
use crate::store::sheets::DEFAULT_API_URL;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Minimum SESSION_KEY length accepted by `Key::from`.
const SESSION_KEY_MIN_LEN: usize = 64;

/// Service-account credentials and spreadsheet location.
#[derive(Clone)]
pub struct GoogleConfig {
    pub client_email: String,
    pub private_key: String,
    pub spreadsheet_id: String,
    pub token_uri: String,
    pub api_url: String,
}

impl fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("token_uri", &self.token_uri)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Clone)]
pub struct Config {
    pub bind_addr: String,
    pub session_key: Option<String>,
    pub google: GoogleConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind_addr", &self.bind_addr)
            .field("session_key", &self.session_key.as_ref().map(|_| "<redacted>"))
            .field("google", &self.google)
            .finish()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ConfigError {
    pub missing: Vec<&'static str>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing required environment variables: {}", self.missing.join(", "))
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut required = |key: &'static str| {
            get(key).unwrap_or_else(|| {
                missing.push(key);
                String::new()
            })
        };
        let client_email = required("GOOGLE_CLIENT_EMAIL");
        let private_key = required("GOOGLE_PRIVATE_KEY");
        let spreadsheet_id = required("GOOGLE_SHEET_ID");

        if !missing.is_empty() {
            return Err(ConfigError { missing });
        }

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            session_key: get("SESSION_KEY"),
            google: GoogleConfig {
                client_email,
                private_key: unescape_newlines(&private_key),
                spreadsheet_id,
                token_uri: get("GOOGLE_TOKEN_URI").unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
                api_url: get("GOOGLE_SHEETS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            },
        })
    }

    /// Session encryption key. Falls back to a random key (sessions lost on
    /// restart) when SESSION_KEY is absent or too short.
    pub fn session_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= SESSION_KEY_MIN_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {SESSION_KEY_MIN_LEN}+), generating random key",
                    val.len()
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}

/// Keys pasted into a single-line env var carry literal `\n` sequences.
fn unescape_newlines(value: &str) -> String {
    value.replace("\\n", "\n")
}
