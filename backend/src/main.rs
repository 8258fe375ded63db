use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;

mod config {
    pub mod mail_config;
}
mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
mod utils {
    pub mod mailer;
    pub mod rate_limit;
}

use config::mail_config::MailConfig;
use handlers::contact_handlers;
use utils::mailer::{MailTransport, SmtpMailer};
use utils::rate_limit::ContactRateLimiter;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";
/// How often idle senders are dropped from the rate limiter.
const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

pub struct AppState {
    mailer: Arc<dyn MailTransport>,
    limiter: ContactRateLimiter,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(contact_handlers::health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Only report to sentry when a DSN is configured.
    let _guard = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let mail_config = MailConfig::from_env();
    if !mail_config.has_credentials() {
        tracing::warn!("EMAIL_USER or EMAIL_PASS not set, contact submissions will fail to send");
    }

    let state = Arc::new(AppState {
        mailer: Arc::new(SmtpMailer::new(mail_config)),
        limiter: ContactRateLimiter::default(),
    });

    let prune_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            prune_state.limiter.retain_recent();
            tracing::debug!("Rate limiter tracking {} senders", prune_state.limiter.len());
        }
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Contact backend listening on {}", bind_addr);

    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
