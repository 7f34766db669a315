//! Team Site Backend
//!
//! Serves the public team website and its content-management panel from a
//! single JSON document persisted in SQLite.

mod admin;
mod api;
mod auth;
mod config;
mod errors;
mod images;
mod models;
mod query;
mod render;
mod repository;
mod storage;
mod store;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post},
    Router,
};
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use storage::SqliteKeyValueStore;
use store::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Team Site Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (TEAMSITE_API_PSK). Admin routes are open!");
    }

    // Load the site document
    let pool = storage::init_database(&config.db_path).await?;
    let store = Store::load(Arc::new(SqliteKeyValueStore::new(pool))).await;
    tracing::info!(
        "Loaded site data: {} team members, {} projects, {} completed",
        store.document().team.len(),
        store.document().projects.len(),
        store.document().completed.len()
    );

    let state = AppState {
        store: Arc::new(Mutex::new(store)),
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let psk = state.config.api_psk.clone();
    let max_upload_bytes = state.config.max_upload_bytes;

    // Content panel, PSK protected
    let admin_routes = Router::new()
        .route("/admin/team/image", post(api::upload_team_image))
        .route("/admin/team/form", post(api::submit_team_form))
        .route("/admin/team/{id}/edit", get(api::edit_team_member))
        .route(
            "/admin/{tab}",
            get(api::get_admin_tab).post(api::submit_admin_form),
        )
        .route("/admin/{tab}/{id}", delete(api::delete_admin_record))
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    let public_routes = Router::new()
        .route("/site", get(api::get_site))
        .route("/datastore", get(api::get_datastore));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", public_routes.merge(admin_routes))
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
