//! # hearthd — hearth daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Open the JSON file stores (users, devices, blobs)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use chrono::TimeDelta;
use tracing_subscriber::EnvFilter;

use hearth_adapter_http_axum::pages::PagesConfig;
use hearth_adapter_http_axum::state::AppState;
use hearth_adapter_storage_json::{JsonBlobStore, JsonDeviceRepository, JsonUserRepository};
use hearth_app::services::auth_service::AuthService;
use hearth_app::services::blob_service::BlobService;
use hearth_app::services::device_service::DeviceService;
use hearth_app::sessions::InMemorySessionStore;
use hearth_app::status::StatusTracker;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // File stores
    let user_repo = JsonUserRepository::open(&config.storage.users_file).await?;
    let device_repo = JsonDeviceRepository::open(&config.storage.devices_file).await?;
    let blob_store = JsonBlobStore::open(&config.storage.data_dir).await?;

    // Sessions and status
    let ttl = TimeDelta::seconds(i64::try_from(config.session.ttl_secs).unwrap_or(i64::MAX));
    let sessions = InMemorySessionStore::new(ttl);
    let status = Arc::new(StatusTracker::new());

    // Services
    let auth_service = AuthService::new(user_repo);
    let device_service = DeviceService::new(device_repo, Arc::clone(&status));
    let blob_service = BlobService::new(blob_store);

    // HTTP
    let state = AppState::new(
        auth_service,
        device_service,
        blob_service,
        sessions,
        status,
        PagesConfig {
            static_dir: config.assets.static_dir.clone(),
            public_dir: config.assets.public_dir.clone(),
        },
    );
    let app = hearth_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "hearthd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install ctrl-c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to install sigterm handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutting down");
}
