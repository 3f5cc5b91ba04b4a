//! Smart Hive API server
//!
//! Main entry point.

use smarthive::alert_bus::AlertBus;
use smarthive::alerta::AlertaService;
use smarthive::apiario::ApiarioService;
use smarthive::auth::AuthService;
use smarthive::colmeia::ColmeiaService;
use smarthive::registro::RegistroService;
use smarthive::state::{AppConfig, AppState};
use smarthive::web_api;
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smarthive=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Smart Hive API v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::default();
    tracing::info!(
        database_url = %config.database_url,
        host = %config.host,
        port = config.port,
        "Configuration loaded"
    );

    // Create database pool
    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connected");

    // Apply schema
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    // Initialize components
    let alert_bus = Arc::new(AlertBus::new());
    let auth = Arc::new(AuthService::new(pool.clone(), config.jwt_secret.clone()));
    let apiarios = Arc::new(ApiarioService::new(pool.clone()));
    let colmeias = Arc::new(ColmeiaService::new(pool.clone()));
    let alertas = Arc::new(AlertaService::new(pool.clone()));
    let registros = Arc::new(RegistroService::new(
        pool.clone(),
        alertas.clone(),
        alert_bus.clone(),
    ));
    tracing::info!("Services initialized");

    // Create application state
    let state = AppState {
        config,
        auth,
        apiarios,
        colmeias,
        registros,
        alertas,
        alert_bus,
    };

    // Create router
    let app = web_api::create_router(state.clone())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
