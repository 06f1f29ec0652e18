use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod mailer;
pub mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
pub mod repositories {
    pub mod recent_applications;
}

use handlers::contact_handlers;
use mailer::ApplicationMailer;
use repositories::recent_applications::RecentApplications;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    pub mailer: Arc<dyn ApplicationMailer>,
    pub recent_applications: RecentApplications,
}

impl AppState {
    pub fn new(mailer: Arc<dyn ApplicationMailer>, duplicate_window: Duration) -> Self {
        Self {
            mailer,
            recent_applications: RecentApplications::new(duplicate_window),
        }
    }
}

pub fn build_router(state: Arc<AppState>, frontend_dist: Option<&Path>) -> Router {
    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST, axum::http::Method::OPTIONS])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state);

    match frontend_dist {
        // Unknown paths get index.html so client-side routes like /contact load.
        Some(dist) => app.fallback_service(
            ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html"))),
        ),
        None => app,
    }
}
