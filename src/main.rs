//! # Veterinary Practice Web Service
//!
//! REST backend for a small veterinary-practice management app: token-gated
//! JSON CRUD over the Pet and Appointment collections. Configures logging,
//! the document store pool, middleware, and route handling.

#![recursion_limit = "256"]

pub mod api;
pub mod config;
pub mod consts;
pub mod logger;
pub mod models;
pub mod repo;
pub mod rest;
pub mod utils;

use log::info;
use ntex::web;
use ntex_cors::Cors;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;

    // Open the document store; a missing or unreachable store aborts startup
    let sqlite_repo = repo::sqlite::SqlxSqliteRepo {
        db_pool: utils::setup_sqlite_db_pool().await?,
    };
    sqlite_repo.ensure_schema().await?;

    configure_and_run_server(sqlite_repo).await
}

/// Creates application state from the provided store handle
fn create_app_state(sqlite_repo: repo::sqlite::SqlxSqliteRepo) -> rest::AppState {
    rest::AppState {
        repo: Box::new(sqlite_repo),
    }
}

/// Configures and starts the web server
async fn configure_and_run_server(sqlite_repo: repo::sqlite::SqlxSqliteRepo) -> anyhow::Result<()> {
    let app_config = &*config::APP_CONFIG;
    let server_addr = (
        app_config.web_server_host.clone(),
        app_config.web_server_port,
    );

    info!(
        "starting server on {}:{} [env={}]",
        server_addr.0, server_addr.1, app_config.env
    );

    let server = web::server(move || {
        web::App::new()
            .wrap(
                Cors::new()
                    .allowed_methods(vec!["GET", "HEAD", "POST", "OPTIONS", "PUT", "DELETE"])
                    .allowed_origin("http://localhost:3000")
                    .finish(),
            )
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state(sqlite_repo.clone()))
            .configure(rest::routes::pets)
            .configure(rest::routes::appointments)
    });

    server
        .bind(server_addr)?
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
