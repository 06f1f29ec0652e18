use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use mallow_backend::config::Config;
use mallow_backend::mailer::SmtpMailer;
use mallow_backend::{build_router, AppState};

const PURGE_INTERVAL: Duration = Duration::from_secs(600);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let mailer = SmtpMailer::new(&config.smtp, &config.contact_sender, &config.contact_recipient)?;
    let state = Arc::new(AppState::new(Arc::new(mailer), config.duplicate_window));

    // Keep the duplicate guard from growing without bound
    let state_for_purge = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let purged = state_for_purge
                .recent_applications
                .purge_expired(chrono::Utc::now());
            if purged > 0 {
                tracing::debug!("purged {} expired applications", purged);
            }
        }
    });

    let app = build_router(state, config.frontend_dist.as_deref());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
