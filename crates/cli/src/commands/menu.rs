//! `garcon menu` — Print the menu.

use garcon_config::AppConfig;
use garcon_engine::render;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let catalog = config.menu_catalog()?;

    println!("{}", render::menu_text(&catalog));

    Ok(())
}
