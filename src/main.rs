use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use attendance::config::Config;
use attendance::store::{AttendanceStore, SheetsStore};
use attendance::{handlers, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env file is fine; the variables may come from the environment.
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(std::io::Error::other)?;

    let sheets = SheetsStore::new(&config.google).map_err(|e| {
        log::error!("Failed to set up Sheets client: {e}");
        std::io::Error::other(e)
    })?;
    let store: Arc<dyn AttendanceStore> = Arc::new(sheets);
    let store = web::Data::from(store);

    log::info!(
        "Using spreadsheet {} as {}",
        config.google.spreadsheet_id,
        config.google.client_email
    );

    let secret_key = config.session_key();

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .configure(routes::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
