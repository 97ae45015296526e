//! Google service-account OAuth2 (JWT bearer grant) with an in-process token cache.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::StoreError;

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_TTL_SECS: i64 = 3600;
// Refresh a little early so a token never expires mid-request.
const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_TTL_SECS
}

struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - Duration::seconds(REFRESH_MARGIN_SECS) > now
    }
}

pub struct ServiceAccountAuth {
    client_email: String,
    key: EncodingKey,
    token_uri: String,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountAuth {
    /// `private_key_pem` must already have real newlines (see `Config`).
    pub fn new(
        client_email: &str,
        private_key_pem: &str,
        token_uri: &str,
        http: reqwest::Client,
    ) -> Result<Self, StoreError> {
        let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())?;
        Ok(Self {
            client_email: client_email.to_string(),
            key,
            token_uri: token_uri.to_string(),
            http,
            cached: Mutex::new(None),
        })
    }

    /// Return a bearer token, fetching a new one when the cached token is stale.
    pub async fn access_token(&self) -> Result<String, StoreError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.is_fresh(Utc::now()) {
                return Ok(token.value.clone());
            }
        }
        let fresh = self.request_token().await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    /// Drop the cached token, e.g. after the API rejected it with 401.
    pub async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }

    fn assertion(&self, now: DateTime<Utc>) -> Result<String, StoreError> {
        let claims = Claims {
            iss: &self.client_email,
            scope: SPREADSHEETS_SCOPE,
            aud: &self.token_uri,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ASSERTION_TTL_SECS)).timestamp(),
        };
        Ok(encode(&Header::new(Algorithm::RS256), &claims, &self.key)?)
    }

    async fn request_token(&self) -> Result<CachedToken, StoreError> {
        let now = Utc::now();
        let assertion = self.assertion(now)?;

        let response = self
            .http
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Token(format!("HTTP {status}: {body}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Token(format!("token response parse failed: {e}")))?;

        log::debug!(
            "Obtained access token for {} (expires in {}s)",
            self.client_email,
            token.expires_in
        );

        Ok(CachedToken {
            value: token.access_token,
            expires_at: now + Duration::seconds(token.expires_in),
        })
    }
}
