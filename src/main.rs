//! Chain Registry Builder - Main Entry Point

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chain_registry_builder::infrastructure::driven_adapters::config::BuilderConfig;
use chain_registry_builder::infrastructure::driving_adapters::build_job;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chain_registry_builder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = BuilderConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Build and write the registry
    let entries = build_job::run(&config)?;
    tracing::info!(
        chains = entries.len(),
        path = %config.output.path.display(),
        "Registry build completed"
    );

    Ok(())
}
