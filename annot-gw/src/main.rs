//! annot-gw (Annotation Gateway) - Ontology annotation recommendation service
//!
//! Accepts ecological-dataset metadata elements and returns ontology-term
//! annotation recommendations from a mock table or an external annotation
//! service, emails curated term proposals, and logs selection events.

use annot_common::config::{Overrides, Settings};
use annot_gw::{build_router, AppState};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Annotation recommendation gateway
#[derive(Parser, Debug)]
#[command(name = "annot-gw", version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "ANNOT_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address
    #[arg(long, env = "ANNOT_HOST")]
    host: Option<String>,

    /// Listen port
    #[arg(long, env = "ANNOT_PORT")]
    port: Option<u16>,

    /// Annotation service endpoint URL
    #[arg(long, env = "ANNOT_API_URL")]
    api_url: Option<String>,

    /// Serve recommendations from the static mock tables (true/false)
    #[arg(long, env = "ANNOT_USE_MOCK")]
    use_mock: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Annotation Gateway (annot-gw) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let cli = Cli::parse();
    let overrides = Overrides {
        host: cli.host,
        port: cli.port,
        annotation_api_url: cli.api_url,
        use_mock_recommendations: cli.use_mock,
    };
    let settings = Settings::resolve(&overrides, cli.config.as_deref());
    if settings.use_mock_recommendations {
        info!("Recommendation source: static mock tables");
    } else {
        info!("Recommendation source: {}", settings.annotation_api_url);
    }
    if settings.smtp.proposal_recipient.is_none() {
        info!("Proposal recipient not configured; proposal emails will be skipped");
    }

    let state = AppState::from_settings(&settings)?;
    let app = build_router(state);

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("annot-gw listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
