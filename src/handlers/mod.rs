pub mod api;
pub mod page_handlers;

use actix_web::HttpResponse;

/// Fallback for unknown paths.
pub async fn not_found() -> HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
