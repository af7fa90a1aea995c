//! # resmapd — resmap daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Construct the store client (adapter) from the configured endpoint and
//!   credential — once, before serving; it is read-only afterwards
//! - Construct the application service, injecting the store via the port
//!   trait
//! - Build the axum router and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use resmap_adapter_http_axum::router;
use resmap_adapter_http_axum::state::AppState;
use resmap_adapter_store_memory::MemoryResourceStore;
use resmap_adapter_store_rest::RestResourceStore;
use resmap_app::services::resource_service::ResourceService;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let bind_addr = config.bind_addr();

    let app = if config.store.in_memory {
        tracing::warn!("using the in-memory store; rows will not survive a restart");
        let service = ResourceService::new(MemoryResourceStore::new());
        router::build(AppState::new(service))
    } else {
        let store = RestResourceStore::new(config.store.url, config.store.key);
        let service = ResourceService::new(store);
        router::build(AppState::new(service))
    };

    tracing::info!(%bind_addr, "resmapd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
