//! People API Server
//!
//! Stores person records (name, date of birth, derived age) and exposes
//! create/read/update/delete over HTTP.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{SeaOrmPersonRepository, SystemClock};
use app::PersonService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub person_service: Arc<PersonService<SeaOrmPersonRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Person records
        .route("/users", get(handlers::list_users))
        .route("/users/create", post(handlers::create_user))
        .route("/users/:id", put(handlers::update_user))
        .route("/user", delete(handlers::delete_user))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,people_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting people API...");

    // Load configuration
    let config = Config::from_env();

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    adapters::ensure_schema(&db)
        .await
        .context("Failed to create tables")?;
    tracing::info!("Database connected");

    let person_repo = Arc::new(SeaOrmPersonRepository::new(db));
    let person_service = Arc::new(PersonService::new(person_repo, Arc::new(SystemClock)));

    let app = router(AppState { person_service });

    let addr = config.addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
