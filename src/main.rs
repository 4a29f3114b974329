//! PayTrack API server.
//!
//! Reads configuration from a TOML file (~/.config/paytrack/config.toml),
//! serves the REST API immediately and connects to MySQL in the background.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};

use paytrack::domain::RepositoryProvider;
use paytrack::{
    create_api_router, default_config_path, spawn_connect_with_retry, ApiState, AppConfig,
    DbHandle, SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("PAYTRACK_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg);
            error!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    info!("Starting PayTrack API server...");

    // Fails closed outside development
    let jwt_secret = app_cfg.jwt_secret()?;
    let jwt_config = paytrack::auth::JwtConfig::new(
        jwt_secret,
        app_cfg.jwt_expiration_hours(),
        "paytrack",
    );
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── Prometheus metrics (optional) ──────────────────────────
    if app_cfg.metrics.enabled {
        let addr: SocketAddr = format!("{}:{}", app_cfg.metrics.host, app_cfg.metrics.port)
            .parse()
            .map_err(|e| format!("invalid metrics address: {e}"))?;
        metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
            .map_err(|e| format!("failed to install Prometheus exporter: {e}"))?;
        info!("Prometheus metrics exposed on http://{}/metrics", addr);
    }

    // ── Database: serve first, connect in the background ───────
    let db_config = app_cfg.database_config();
    info!("Database: {}", db_config.url);

    let db = DbHandle::new();
    spawn_connect_with_retry(db_config, db.clone());

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // ── REST API server ────────────────────────────────────────
    let state = ApiState {
        repos,
        jwt_config,
        default_payment_method: app_cfg.default_payment_method(),
        environment: app_cfg.environment().to_string(),
        db,
    };
    let router = create_api_router(state, app_cfg.rate_limit_settings());

    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("PayTrack API server shutdown complete");
    Ok(())
}

fn init_tracing(cfg: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level));

    if cfg.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
