// src/main.rs
use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod handlers;
mod models;
mod notify;
mod store;
mod validation;

pub use error::AppError;

use handlers::*;
use notify::{LogNotifier, Notifier};
use store::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub notifier: Arc<dyn Notifier>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(4000);

    // All state lives in memory for the process lifetime; nothing persists.
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        notifier: Arc::new(LogNotifier),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(root_handler))
        // Plan generation
        .route("/api/generate-schedule", post(generate_schedule_handler))
        // Progress and alerts
        .route("/api/update-tasks", post(update_tasks_handler))
        .route("/api/alert-parent", post(alert_parent_handler))
        .route("/api/update-marks", post(update_marks_handler))
        // Parent dashboard
        .route("/api/parent-overview", get(parent_overview_handler))
        .with_state(state)
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🚀 AI Study Planner backend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
