//! Backend entry-point: loads settings, prepares the people store, and
//! serves the REST API.

mod server;

use actix_web::web;
use nearby_users::inbound::http::health::HealthState;
use nearby_users::outbound::persistence::{DbPool, PoolConfig, apply_migrations};
use nearby_users::settings::AppSettings;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};

fn config_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("invalid configuration: {err}"))
}

async fn build_server_config(settings: &AppSettings) -> std::io::Result<ServerConfig> {
    let config = ServerConfig::new(
        settings.bind_addr().map_err(config_error)?,
        settings.source_url().map_err(config_error)?,
        settings.source_timeout().map_err(config_error)?,
    );

    let Some(database_url) = settings.database_url().map_err(config_error)? else {
        return Ok(config);
    };

    let applied = apply_migrations(database_url.to_owned())
        .await
        .map_err(std::io::Error::other)?;
    info!(applied, "database migrations complete");

    let pool_config =
        PoolConfig::new(database_url).with_max_size(settings.pool_max_size().map_err(config_error)?);
    let pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os()).map_err(config_error)?;
    let config = build_server_config(&settings).await?;
    info!(bind_addr = %config.bind_addr, "starting server");

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
