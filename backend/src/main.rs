mod config;
mod error;
mod ledger;
mod services;

use crate::config::Config;
use crate::ledger::LedgerState;
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(|e| {
        error!("Configuration error: {e}");
        std::io::Error::other(e)
    })?;
    let bind = (config.host.clone(), config.port);

    // Lives for the whole process; nothing is persisted across restarts.
    let ledger_state = LedgerState::new();

    info!("Donation tracking server starting at {}", config.url());
    info!("API endpoints:");
    info!("  GET  /api/donations  - view all donations");
    info!("  GET  /api/stats      - view statistics");
    info!("  GET  /api/categories - view category totals");
    info!("  POST /api/donate     - add a new donation");
    info!("  POST /api/simulate   - simulate a donation");
    info!("Serving static files from {}", config.static_root.display());

    let config = web::Data::new(config);
    let ledger_state = web::Data::new(ledger_state);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .send_wildcard()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(config.clone())
            .app_data(ledger_state.clone())
            .service(services::donations::configure_routes())
            .default_service(web::route().to(services::static_files::process))
    })
        .bind(bind)?
        .run()
        .await
}
