//! [`AttendanceStore`] backed by the Google Sheets v4 values API.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::{Value, json};

use super::google_auth::ServiceAccountAuth;
use super::{AttendanceStore, StoreError};
use crate::config::GoogleConfig;
use crate::models::{CheckInRecord, Member, member};

pub const DEFAULT_API_URL: &str = "https://sheets.googleapis.com";

/// Roster: column A = name, column B = role, row 1 is a header.
pub const ROSTER_RANGE: &str = "All Members!A2:B";
/// Check-in log: name, date, time.
pub const CHECK_IN_RANGE: &str = "Check-in!A:C";

const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

pub struct SheetsStore {
    http: reqwest::Client,
    auth: ServiceAccountAuth,
    api_url: Url,
    spreadsheet_id: String,
}

impl SheetsStore {
    pub fn new(config: &GoogleConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::new();
        let auth = ServiceAccountAuth::new(
            &config.client_email,
            &config.private_key,
            &config.token_uri,
            http.clone(),
        )?;
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| StoreError::Setup(format!("invalid Sheets API URL {}: {e}", config.api_url)))?;
        if api_url.cannot_be_a_base() {
            return Err(StoreError::Setup(format!(
                "Sheets API URL cannot be a base: {}",
                config.api_url
            )));
        }
        Ok(Self {
            http,
            auth,
            api_url,
            spreadsheet_id: config.spreadsheet_id.clone(),
        })
    }

    /// `{api}/v4/spreadsheets/{id}/values/{range}{suffix}` with the range percent-encoded.
    fn values_url(&self, range: &str, suffix: &str) -> Url {
        let mut url = self.api_url.clone();
        let last = format!("{range}{suffix}");
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values", last.as_str()]);
        }
        url
    }

    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            self.auth.invalidate().await;
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// Formatted cell values arrive as strings; anything else is stringified.
fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn rows_to_members(range: ValueRange) -> Vec<Member> {
    let rows: Vec<Vec<String>> = range
        .values
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect())
        .collect();
    member::from_rows(&rows)
}

#[async_trait]
impl AttendanceStore for SheetsStore {
    async fn fetch_members(&self) -> Result<Vec<Member>, StoreError> {
        let token = self.auth.access_token().await?;
        let response = self
            .http
            .get(self.values_url(ROSTER_RANGE, ""))
            .bearer_auth(token)
            .send()
            .await?;
        let response = self.check(response).await?;

        let range: ValueRange = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(format!("roster response: {e}")))?;
        let members = rows_to_members(range);
        log::debug!("Fetched {} members from {ROSTER_RANGE}", members.len());
        Ok(members)
    }

    async fn append_check_in(&self, record: &CheckInRecord) -> Result<(), StoreError> {
        let token = self.auth.access_token().await?;
        let response = self
            .http
            .post(self.values_url(CHECK_IN_RANGE, ":append"))
            .query(&[("valueInputOption", VALUE_INPUT_OPTION)])
            .bearer_auth(token)
            .json(&json!({ "values": [record.to_row()] }))
            .send()
            .await?;
        self.check(response).await?;
        log::debug!("Appended check-in for {} to {CHECK_IN_RANGE}", record.name);
        Ok(())
    }
}
