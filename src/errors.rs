use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::store::StoreError;
use crate::templates_structs::ApiErrorResponse;

pub const NAME_REQUIRED: &str = "Name is required";
pub const FETCH_MEMBERS_FAILED: &str = "Failed to fetch members";
pub const APPEND_CHECK_IN_FAILED: &str = "Failed to append check-in";

#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    Validation(String),
    UpstreamRead(StoreError),
    UpstreamWrite(StoreError),
    Csrf,
}

impl AppError {
    /// Message safe to show a client. Upstream causes stay in the server log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::UpstreamRead(_) => FETCH_MEMBERS_FAILED.to_string(),
            AppError::UpstreamWrite(_) => APPEND_CHECK_IN_FAILED.to_string(),
            AppError::Csrf => "Invalid or missing CSRF token".to_string(),
            AppError::Template(_) => "Internal Server Error".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Validation(e) => write!(f, "Validation error: {e}"),
            AppError::UpstreamRead(e) => write!(f, "Upstream read error: {e}"),
            AppError::UpstreamWrite(e) => write!(f, "Upstream write error: {e}"),
            AppError::Csrf => write!(f, "CSRF token mismatch"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Csrf => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Template(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
            AppError::Csrf => HttpResponse::Forbidden().body(self.public_message()),
            _ => HttpResponse::build(self.status_code()).json(ApiErrorResponse {
                error: self.public_message(),
            }),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an askama template into a 200 HTML response.
pub fn render<T: askama::Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
