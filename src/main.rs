//! Service entry point.
//!
//! Composition root: builds the record store, the two lookup clients
//! and the enrichment service explicitly, then serves the REST API.

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vehicle_registry::api::rest::{AppState, create_router};
use vehicle_registry::application::services::VehicleService;
use vehicle_registry::config::ServiceConfig;
use vehicle_registry::infrastructure::lookups::{HttpAddressLookup, HttpPriceLookup};
use vehicle_registry::infrastructure::persistence::InMemoryVehicleRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::load().context("failed to load configuration")?;
    let retry = config.retry_policy();

    let repository = Arc::new(InMemoryVehicleRepository::new());
    let prices = Arc::new(
        HttpPriceLookup::new(&config.pricing.base_url, config.lookups.timeout_ms, retry)
            .context("failed to create pricing client")?,
    );
    let addresses = Arc::new(
        HttpAddressLookup::new(&config.maps.base_url, config.lookups.timeout_ms, retry)
            .context("failed to create maps client")?,
    );

    let service = Arc::new(VehicleService::new(repository, prices, addresses));
    let router = create_router(Arc::new(AppState { service }));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "vehicle registry listening");

    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}
