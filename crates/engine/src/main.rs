//! PaySign Engine - Main entry point.
//!
//! Runs the engine against the in-memory host, driving the tick scheduler
//! from a Tokio interval until Ctrl-C, then flushes every active sign.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paysign_engine::infrastructure::{
    audit::TracingAuditLog,
    clock::SystemClock,
    config::AppConfig,
    in_memory::{InMemoryEconomy, InMemoryPermissions, InMemoryPlayers, InMemoryWorld},
};
use paysign_engine::{App, HostPorts};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paysign_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PaySign Engine");

    let config = AppConfig::from_env()?;
    tracing::info!(
        plugin_name = %config.plugin_name,
        allow_decimals = config.allow_decimals,
        default_delay = %config.default_delay,
        tick_millis = config.tick_interval.as_millis() as u64,
        "Configuration loaded"
    );

    let host = HostPorts {
        world: Arc::new(InMemoryWorld::new()),
        economy: Arc::new(InMemoryEconomy::new()),
        permissions: Arc::new(InMemoryPermissions::allow_all()),
        players: Arc::new(InMemoryPlayers::new()),
        audit: Some(Arc::new(TracingAuditLog::new(Arc::new(SystemClock::new())))),
    };
    let app = App::new(config.clone(), host);

    let mut ticker = tokio::time::interval(config.tick_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }
            result = &mut shutdown => {
                if let Err(e) = result {
                    tracing::error!(error = %e, "Failed to listen for shutdown signal");
                }
                break;
            }
        }
    }

    tracing::info!("Shutting down, flushing active pay signs");
    app.shutdown();
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
