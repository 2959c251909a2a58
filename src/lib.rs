pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod reviews;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use config::{Config, StoreKind};
use db::{MemoryStore, PgStore};
use errors::AppError;
use middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware};
use state::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

/// The review routes wrapped in rate limiting, CORS and request tracing.
pub fn create_app(state: AppState, config: &Config) -> Result<Router, AppError> {
    let global_rate_limiter = create_global_rate_limiter();

    let app = Router::new()
        .merge(http::create_http_routes(state))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { "404 Not Found" });

    Ok(app)
}

async fn build_state(config: &Config) -> Result<AppState, AppError> {
    match config.store {
        StoreKind::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| AppError::EnvError("DATABASE_URL must be set".into()))?;

            let store = PgStore::connect(database_url, config.database_max_connections).await?;
            store.migrate().await?;
            Ok(AppState::with_store(Arc::new(store), &config.jwt_secret))
        }
        StoreKind::Memory => {
            tracing::warn!("Using the in-memory store, reviews are lost on restart");
            Ok(AppState::with_store(
                Arc::new(MemoryStore::new()),
                &config.jwt_secret,
            ))
        }
    }
}

pub async fn start_server() -> Result<(), AppError> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let state = build_state(&config).await?;
    let app = create_app(state, &config)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("Tour reviews server running at http://127.0.0.1:{}", config.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
