//! sms-server: SMS spam classification service.
//!
//! Loads the vectorizer and classifier artifacts once at startup and refuses
//! to start if either cannot be loaded.

use anyhow::Context;
use sms_core::SpamFilterConfig;
use sms_model::ClassifierAdapter;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sms_server=info,sms_model=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting sms-server v{}", env!("CARGO_PKG_VERSION"));

    let mut config = if let Some(config_path) = std::env::args().nth(1) {
        info!("Loading configuration from {}", config_path);
        SpamFilterConfig::from_file(Path::new(&config_path))?
    } else {
        info!("No config file specified, using defaults");
        SpamFilterConfig::default()
    };
    config.apply_env_overrides()?;
    config.validate()?;

    let classifier = ClassifierAdapter::from_config(&config.artifacts)
        .inspect_err(|e| error!(error = %e, "Failed to load model artifacts, refusing to serve"))
        .context("loading model artifacts")?;

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, sms_server::app(classifier)).await?;
    Ok(())
}
