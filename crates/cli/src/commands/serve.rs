//! `garcon serve` — Start the HTTP API server.

use garcon_config::AppConfig;
use tracing::info;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
        info!(port, "Port overridden from the command line");
    }

    let catalog = config.menu_catalog()?;

    println!("🍽️  Garçon Gateway");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Menu:      {} items", catalog.len());
    println!("   Chat:      {}", chat_mode(&config));

    info!(
        host = %config.gateway.host,
        port = config.gateway.port,
        menu_items = catalog.len(),
        "Gateway starting"
    );

    garcon_gateway::start(config).await?;

    info!("Gateway stopped");

    Ok(())
}

/// How general chat will answer, for the startup summary.
fn chat_mode(config: &AppConfig) -> &'static str {
    if config.has_api_key() {
        "LLM-backed general replies"
    } else {
        "canned general replies (no API key)"
    }
}
