//! HTTP server for the timesheet generator.
//!
//! Environment:
//! - `BCTDTS_CONFIG_DIR`: configuration directory (default `./config/bctd`)
//! - `BCTDTS_BIND`: listen address (default `0.0.0.0:8080`)
//! - `BCTDTS_API_SECRET`: rendering service secret
//! - `RUST_LOG`: log filter

use std::env;
use std::error::Error;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bctd_timesheet::api::{AppState, create_router};
use bctd_timesheet::config::ConfigLoader;
use bctd_timesheet::render::ConvertApiRenderer;

const DEFAULT_CONFIG_DIR: &str = "./config/bctd";
const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bctd_timesheet=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = env::var("BCTDTS_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let config = ConfigLoader::load(&config_dir)?.with_env_overrides();
    info!(
        config_dir = %config_dir,
        employees = config.directory().len(),
        "Configuration loaded"
    );

    let secret = match &config.secrets().api_secret {
        Some(secret) => secret.clone(),
        None => {
            warn!("No rendering secret configured, PDF requests will fail");
            String::new()
        }
    };
    let renderer = ConvertApiRenderer::new(config.organization().render.base_url.clone(), secret);

    let app = create_router(AppState::new(config, Arc::new(renderer)));

    let bind = env::var("BCTDTS_BIND").unwrap_or_else(|_| DEFAULT_BIND.into());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!(address = %bind, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}
