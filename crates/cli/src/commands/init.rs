//! `garcon init` — First-time setup.

use garcon_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");

    println!("🍽️  Garçon — First-Time Setup");
    println!("=============================\n");

    // Create the config directory
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    // Create the config file
    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run init.\n");
    } else {
        let default_toml = AppConfig::default_toml();
        std::fs::write(&config_path, &default_toml)?;
        println!("✅ Created config.toml at: {}", config_path.display());
        println!("\n📝 Next steps:");
        println!("   1. (Optional) add an OpenAI-compatible API key for general chat");
        println!("   2. (Optional) replace the built-in menu with your own [[menu]] entries");
        println!("   3. Run: garcon serve   (HTTP gateway + web UI)");
        println!("      Or:  garcon chat    (order at the terminal)\n");
    }

    println!("🎉 Setup complete!\n");

    Ok(())
}
