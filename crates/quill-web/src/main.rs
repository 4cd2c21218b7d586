//! quill-web - server-rendered web frontend for quillpad.

mod error;
mod handlers;
mod middleware;
mod render;

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quill_db::Database;

pub(crate) use error::ApiError;

/// Default listen port, kept from the original deployment.
const DEFAULT_PORT: u16 = 3000;

/// Application state shared across handlers.
#[derive(Clone)]
pub(crate) struct AppState {
    pub db: Database,
}

/// Build the application router.
///
/// The visit recorder wraps the whole router; it persists pageviews only
/// for the five page-rendering GET routes (see `middleware::visit_recorder`),
/// so mutations, assets, and unmatched paths never show up in analytics.
fn build_router(state: AppState, assets_dir: &str) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/", get(handlers::notes::index))
        .route("/analytics", get(handlers::analytics::analytics_report))
        .route("/notes", post(handlers::notes::create_note))
        .route("/notes/new", get(handlers::notes::new_note_form))
        .route(
            "/notes/:id",
            get(handlers::notes::show_note)
                .patch(handlers::notes::update_note)
                .delete(handlers::notes::delete_note),
        )
        .route("/notes/:id/edit", get(handlers::notes::edit_note_form))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::visit_recorder::record_visit,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "quill_web=debug,quill_db=debug,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/quillpad".to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let assets_dir = std::env::var("ASSETS_DIR")
        .unwrap_or_else(|_| "crates/quill-web/assets".to_string());

    // Connect to database
    info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;
    info!("Database connected");

    // Run pending database migrations on startup
    info!("Running database migrations...");
    db.migrate().await?;
    info!("Database migrations complete");

    let app = build_router(AppState { db }, &assets_dir);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!(%addr, "Listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
