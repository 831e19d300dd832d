use salon_server::{AppState, build_router, logger};

use salon_auth::{RateLimitConfig, TokenIssuer};
use salon_db::JsonStore;

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = salon_config::Config::load()?;
    config.validate()?;
    let jwt_secret = config.auth.jwt_secret()?;

    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = salon_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting salon-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening document store: {}", database_path.display());
    let store = Arc::new(JsonStore::open(database_path).await?);

    let token_issuer = TokenIssuer::with_hs256(jwt_secret.as_bytes(), config.token_ttl());
    let rate_limit = RateLimitConfig {
        max_requests: config.auth.max_attempts,
        window_secs: config.auth.window_secs,
    };

    let app_state = AppState::new(store, token_issuer, rate_limit);

    // Forget throttle state for clients that have been quiet for a full window
    let limiter = app_state.rate_limiter.clone();
    let prune_every = std::time::Duration::from_secs(config.auth.window_secs.max(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(prune_every);
        loop {
            interval.tick().await;
            limiter.prune();
        }
    });

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
