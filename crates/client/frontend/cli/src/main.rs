//! Terminal client entry point.
use anyhow::Result;
use client_bootstrap::{ClientConfig, SessionBuilder};
use client_frontend_cli::{CliApp, ConsoleInterface, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    logging::setup_logging(&config.log_dir())?;

    tracing::info!("Starting investigation client");
    tracing::info!("Scenario root: {}", config.scenario_root.display());
    tracing::info!("Persistence: {}", config.enable_persistence);

    let builder = SessionBuilder::new(config);
    CliApp::new(builder, ConsoleInterface::stdio())?.run()
}
