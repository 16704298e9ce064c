//! AlgoRanking - Application Entry Point
//!
//! This is the main entry point for the AlgoRanking server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algoranking::{
    clients::HttpUsersClient,
    config::{CONFIG, DatabaseConfig, LogFormat},
    db::{
        self,
        repositories::{InMemorySubmissionRepository, PgSubmissionRepository, SubmissionRepository},
    },
    handlers,
    middleware::logging_middleware,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting AlgoRanking server...");

    let submissions = connect_store(&CONFIG.database).await?;

    tracing::info!(url = %CONFIG.users_service.url, "Using user directory");
    let users = HttpUsersClient::new(&CONFIG.users_service.url, CONFIG.users_service.timeout)?;

    // Create application state
    let state = AppState::new(submissions, Arc::new(users));

    // Build the router
    let app = Router::new()
        .merge(handlers::routes(state.clone()))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(CONFIG.server.request_timeout))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into());

    match CONFIG.server.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

/// Pick the submission store: Postgres when configured, memory otherwise
async fn connect_store(config: &DatabaseConfig) -> anyhow::Result<Arc<dyn SubmissionRepository>> {
    let Some(url) = config.url.as_deref() else {
        let store = match &config.seed_path {
            Some(path) => InMemorySubmissionRepository::from_json_file(path).await?,
            None => InMemorySubmissionRepository::default(),
        };
        tracing::warn!(
            submissions = store.len(),
            "DATABASE_URL not set, serving submissions from memory"
        );
        return Ok(Arc::new(store));
    };

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(url, config.max_connections).await?;
    db::test_connection(&pool).await?;

    tracing::info!("Running database migrations...");
    db::run_migrations(&pool).await?;

    Ok(Arc::new(PgSubmissionRepository::new(pool)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
