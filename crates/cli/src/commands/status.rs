//! `garcon status` — Show configuration summary.

use garcon_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let catalog = config.menu_catalog()?;

    let ttl = match config.store.idle_ttl() {
        Some(d) => format!("{}s idle TTL", d.as_secs()),
        None => "no idle expiry".to_string(),
    };

    println!("🍽️  Garçon Status");
    println!("================");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Provider:     {}", config.responder.provider);
    println!("  Model:        {}", config.responder.model);
    println!("  Temperature:  {}", config.responder.temperature);
    println!("  Gateway:      {}:{}", config.gateway.host, config.gateway.port);
    println!("  Menu:         {} items", catalog.len());
    println!(
        "  Sessions:     up to {}, {}",
        config.store.max_sessions, ttl
    );
    println!(
        "  API key:      {}",
        if config.has_api_key() {
            "configured"
        } else {
            "not set (general chat uses canned replies)"
        }
    );

    // Check config file existence
    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — run `garcon init` first");
    }

    Ok(())
}
