pub mod checkin;
pub mod members;

use actix_web::{
    Error, HttpRequest, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::{InternalError, JsonPayloadError},
    middleware::Next,
    web,
};

use crate::templates_structs::ApiErrorResponse;

pub const INVALID_BODY: &str = "Invalid request body";

/// CSRF guard for the JSON mutation endpoint.
///
/// Browsers cannot send cross-origin JSON via a simple form POST, so requiring
/// Content-Type: application/json keeps the endpoint out of reach of forged forms.
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if *req.method() == actix_web::http::Method::POST {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let response = HttpResponse::BadRequest().json(ApiErrorResponse {
                error: "Content-Type must be application/json".to_string(),
            });
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Malformed JSON gets the same `{ "error": ... }` shape as every other failure.
fn json_error(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log::warn!("Rejected body on {}: {err}", req.path());
    let response = HttpResponse::BadRequest().json(ApiErrorResponse {
        error: INVALID_BODY.to_string(),
    });
    InternalError::from_response(err, response).into()
}

/// Configure the JSON endpoints.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error));
    cfg.route("/members", web::get().to(members::list));
    cfg.service(
        web::resource("/checkin")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route(web::post().to(checkin::create)),
    );
}
