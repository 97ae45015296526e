//! Shared test infrastructure for endpoint, page and store tests.
//!
//! - `MemoryStore` - an in-memory `AttendanceStore` that records appends and can
//!   be told to fail reads or writes.
//! - `test_app!` - builds the full actix service (session middleware, routes,
//!   404 fallback) around a store.
//! - `google_config()` - Sheets client config pointed at a wiremock server.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use async_trait::async_trait;

use attendance::config::GoogleConfig;
use attendance::models::{CheckInRecord, Member};
use attendance::store::{AttendanceStore, StoreError};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const TEST_SHEET_ID: &str = "sheet-123";
pub const TEST_CLIENT_EMAIL: &str = "checkin@test-project.iam.gserviceaccount.com";
pub const TEST_PRIVATE_KEY: &str = include_str!("../fixtures/service_account_key.pem");

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

#[derive(Default)]
pub struct MemoryStore {
    members: Vec<Member>,
    fail_reads: bool,
    fail_writes: bool,
    fetches: AtomicUsize,
    appended: Mutex<Vec<CheckInRecord>>,
}

impl MemoryStore {
    pub fn with_members(members: Vec<Member>) -> Self {
        Self {
            members,
            ..Self::default()
        }
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn appended(&self) -> Vec<CheckInRecord> {
        self.appended.lock().expect("lock").clone()
    }
}

#[async_trait]
impl AttendanceStore for MemoryStore {
    async fn fetch_members(&self) -> Result<Vec<Member>, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(StoreError::Status {
                status: 503,
                body: "backend unavailable".to_string(),
            });
        }
        Ok(self.members.clone())
    }

    async fn append_check_in(&self, record: &CheckInRecord) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Status {
                status: 403,
                body: "The caller does not have permission".to_string(),
            });
        }
        self.appended.lock().expect("lock").push(record.clone());
        Ok(())
    }
}

pub fn alice() -> Member {
    Member::new("Alice", "Staff")
}

// ============================================================================
// APP SETUP
// ============================================================================

pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_secure(false)
        .build()
}

/// Build the full app around an `Arc<MemoryStore>` and initialise it for `actix_web::test`.
#[macro_export]
macro_rules! test_app {
    ($store:expr) => {{
        let store: std::sync::Arc<dyn attendance::store::AttendanceStore> = $store.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap($crate::common::session_middleware())
                .app_data(actix_web::web::Data::from(store))
                .configure(attendance::routes::configure)
                .default_service(actix_web::web::to(attendance::handlers::not_found)),
        )
        .await
    }};
}

/// Extract the CSRF token from a rendered form.
pub fn extract_csrf_token(html: &str) -> Option<String> {
    html.lines()
        .find(|line| line.contains("csrf_token"))
        .and_then(|line| {
            line.split("value=\"")
                .nth(1)
                .and_then(|part| part.split('"').next())
                .map(|s| s.to_string())
        })
}

// ============================================================================
// SHEETS CLIENT SETUP
// ============================================================================

/// Config for a `SheetsStore` talking to a mock server at `base_uri`.
pub fn google_config(base_uri: &str) -> GoogleConfig {
    GoogleConfig {
        client_email: TEST_CLIENT_EMAIL.to_string(),
        private_key: TEST_PRIVATE_KEY.to_string(),
        spreadsheet_id: TEST_SHEET_ID.to_string(),
        token_uri: format!("{base_uri}/token"),
        api_url: base_uri.to_string(),
    }
}
