//! Boundary to the external tabular store holding the roster and the check-in log.
//!
//! Handlers and the form controller only ever see [`AttendanceStore`]; everything
//! specific to the spreadsheet backend (ranges, value encoding, OAuth) lives in
//! [`sheets`] and [`google_auth`].

pub mod google_auth;
pub mod sheets;

use std::fmt;

use async_trait::async_trait;

use crate::models::{CheckInRecord, Member};

pub use sheets::SheetsStore;

#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Read the full roster. An empty sheet yields an empty vector.
    async fn fetch_members(&self) -> Result<Vec<Member>, StoreError>;

    /// Append one row to the check-in log.
    async fn append_check_in(&self, record: &CheckInRecord) -> Result<(), StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    /// Bad service-account key or API base URL.
    Setup(String),
    /// The token endpoint refused the grant or returned garbage.
    Token(String),
    Http(reqwest::Error),
    /// The API answered with a non-success status.
    Status { status: u16, body: String },
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Setup(e) => write!(f, "Setup error: {e}"),
            StoreError::Token(e) => write!(f, "Token error: {e}"),
            StoreError::Http(e) => write!(f, "HTTP error: {e}"),
            StoreError::Status { status, body } => {
                write!(f, "Store responded with HTTP {status}: {body}")
            }
            StoreError::Decode(e) => write!(f, "Decode error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        StoreError::Http(e)
    }
}

impl From<jsonwebtoken::errors::Error> for StoreError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        StoreError::Setup(e.to_string())
    }
}
