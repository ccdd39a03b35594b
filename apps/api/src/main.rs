mod config;
mod decode;
mod errors;
mod models;
mod nlp;
mod pipeline;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::decode::PdfTextDecoder;
use crate::nlp::{KeywordDensityScorer, NlpEngine};
use crate::pipeline::rules::AssessmentRules;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting O-1A assessment API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Rule tables and capabilities are built once and shared read-only
    let rules = Arc::new(AssessmentRules::default());
    let nlp = match config.scorer_jitter_seed {
        Some(seed) => {
            info!("Confidence jitter enabled (seed {seed})");
            NlpEngine {
                scorer: Arc::new(KeywordDensityScorer::with_jitter(seed)),
                ..NlpEngine::rule_based()
            }
        }
        None => NlpEngine::rule_based(),
    };
    let decoder = Arc::new(PdfTextDecoder);
    info!("Rule-based NLP capabilities initialized");

    let state = AppState {
        config: config.clone(),
        rules,
        decoder,
        nlp,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
