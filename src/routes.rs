use actix_web::web;

use crate::handlers::{self, page_handlers};

/// Register every route. The default 404 service is registered on the `App`
/// with [`handlers::not_found`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(actix_files::Files::new("/static", "./static"));
    cfg.route("/", web::get().to(page_handlers::index));
    cfg.route("/", web::post().to(page_handlers::submit));
    handlers::api::configure(cfg);
}
