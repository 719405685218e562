//! Main server module - Axum setup and router configuration
//!
//! Starts an HTTP server with the content API under `/api` and,
//! optionally, the built front-end as static files at the root.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::db::Database;
use crate::error::ServerResult;
use crate::routes;
use crate::state::AppState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Run the server with the given configuration
pub async fn run_server(config: ServerConfig) -> ServerResult<()> {
    let bind_addr = config.bind_addr;

    info!("Opening database at {}", config.db_path.display());
    let db = Database::open(config.db_path.as_path())?;

    if config.admin_token.is_empty() {
        warn!("Admin token is not configured; login and mutations are disabled");
    }

    let state = AppState::new(db, config);
    let app = create_router(state);

    info!("Starting crucible-server on http://{}", bind_addr);

    let listener = TcpListener::bind(bind_addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create the Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS: local dev front-ends by default, everything when asked
    let cors = if state.config().cors_permissive {
        warn!("CORS: allowing any origin");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(tower_http::cors::AllowOrigin::list([
                "http://localhost:3000".parse().unwrap(),
                "http://localhost:5173".parse().unwrap(),
                "http://127.0.0.1:3000".parse().unwrap(),
                "http://127.0.0.1:5173".parse().unwrap(),
            ]))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Middleware stack
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors);

    let static_dir = state.config().static_dir.clone();

    // Build routes
    let mut app = Router::new()
        .nest("/api", api_routes())
        .with_state(state);

    // Serve the built front-end, falling back to index.html for SPA routes
    if let Some(dir) = static_dir {
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(middleware)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(routes::health_check))
        // Auth
        .route("/auth/login", post(routes::login))
        // Workshops
        .route(
            "/workshops",
            get(routes::list_workshops)
                .post(routes::create_workshop)
                .put(routes::update_workshop)
                .delete(routes::delete_workshop),
        )
        // Workshop examples
        .route(
            "/workshop-examples",
            get(routes::list_examples)
                .post(routes::create_example)
                .put(routes::update_example)
                .delete(routes::delete_example),
        )
        // Journal
        .route(
            "/journal",
            get(routes::list_journal_entries)
                .post(routes::create_journal_entry)
                .put(routes::update_journal_entry)
                .delete(routes::delete_journal_entry),
        )
        // About
        .route(
            "/about",
            get(routes::get_about).post(routes::upsert_about),
        )
        // Bookings
        .route(
            "/bookings",
            get(routes::list_bookings).post(routes::create_booking),
        )
        // Artists
        .route(
            "/artists",
            get(routes::list_artists)
                .post(routes::create_artist)
                .put(routes::update_artist)
                .delete(routes::delete_artist),
        )
        // Artworks
        .route(
            "/artworks",
            get(routes::list_artworks)
                .post(routes::create_artwork)
                .put(routes::update_artwork)
                .delete(routes::delete_artwork),
        )
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
