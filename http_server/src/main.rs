use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use drive_time::contracts::calculate::DriveTimeCalculator;
use tracing_actix_web::TracingLogger;

use crate::app_container::Application;
use crate::config::SETTINGS_CONFIG;

mod app_container;
mod config;
mod errors;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("http_server");

    let calculator = DriveTimeCalculator::new();
    let server = &SETTINGS_CONFIG.server;

    HttpServer::new(move || {
        let app_container = Application::new(calculator.clone());
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .configure(routes::config)
            .app_data(web::Data::new(app_container))
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
    .context("Server failed to run")
}
