// storefront/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;

use storefront::config::AppConfig;
use storefront::state::{self, AppState};
use storefront::telemetry;
use storefront::web::configure_app_routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Configuration decides the log format, so it is loaded before tracing is up.
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  telemetry::init_logging(app_config.log_format);

  tracing::info!("Starting storefront server...");

  let catalog = state::load_catalog(&app_config).context("Failed to load product catalog")?;
  tracing::info!(products = catalog.len(), "Catalog ready.");

  let server_address = (app_config.server_host.clone(), app_config.server_port);
  let app_state = AppState::new(app_config, catalog).context("Failed to initialize application state")?;

  tracing::info!("Attempting to bind server to {}:{}...", server_address.0, server_address.1);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(server_address.clone())
  .with_context(|| format!("Failed to bind {}:{}", server_address.0, server_address.1))?
  .run()
  .await
  .context("Server terminated with an error")
}
