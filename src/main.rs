//! Restaurant CRM server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use crm_api::AppState;
use crm_core::config::{AppConfig, DatabaseProvider};
use crm_core::error::AppError;
use crm_database::{CustomerStore, DatabasePool, InMemoryCustomerRepository, PgCustomerRepository};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `CRM_ENV` overlay and `CRM__*` variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CRM_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        provider = %config.database.provider,
        security_mode = ?config.security.mode,
        "Starting restaurant CRM"
    );

    // ── Step 1: Customer store ───────────────────────────────────
    let (store, pool): (Arc<dyn CustomerStore>, Option<DatabasePool>) =
        match config.database.provider {
            DatabaseProvider::Postgres => {
                let pool = DatabasePool::connect(&config.database).await?;
                if config.database.run_migrations {
                    crm_database::migration::run_migrations(pool.pool()).await?;
                }
                let repo = PgCustomerRepository::new(pool.pool().clone());
                (Arc::new(repo), Some(pool))
            }
            DatabaseProvider::Memory => {
                tracing::warn!("Using the in-memory customer store; data is lost on restart");
                (Arc::new(InMemoryCustomerRepository::new()), None)
            }
        };

    // ── Step 2: Credential, access policy and services ──────────
    let state = AppState::new(config, store)?;
    tracing::info!(
        username = %state.credential.username(),
        rules = state.policy.rules().len(),
        permit_all = state.policy.is_permit_all(),
        "Access policy ready"
    );

    // ── Step 3: Serve until shutdown ─────────────────────────────
    crm_api::run_server(state).await?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    Ok(())
}
