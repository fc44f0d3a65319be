//! `garcon chat` — Interactive or single-message ordering mode.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use garcon_config::AppConfig;
use garcon_core::SessionId;
use garcon_engine::OrderingEngine;
use garcon_store::{InMemoryCartStore, StoreLimits};

pub async fn run(
    message: Option<String>,
    session: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    // Without a key, general questions get the canned greeting; ordering,
    // menu, and cart commands work fully offline.
    if !config.has_api_key() {
        eprintln!();
        eprintln!("  Note: no API key configured. General chat will use a canned reply.");
        eprintln!();
    }

    let catalog = config.menu_catalog()?;
    let limits = StoreLimits {
        max_sessions: config.store.max_sessions,
        idle_ttl: config.store.idle_ttl(),
    };
    let store = Arc::new(InMemoryCartStore::with_limits(limits));
    let responder = Arc::new(garcon_responders::build_from_config(&config));
    let engine = OrderingEngine::new(catalog, store, responder);

    let session = match session {
        Some(id) => SessionId::new(id),
        None => SessionId::random(),
    };

    if let Some(msg) = message {
        // Single message mode
        eprint!("  Thinking...");
        let turn = engine.submit(&msg, &session).await?;
        eprint!("\r              \r");
        println!("{}", turn.reply);
    } else {
        interactive(&engine, &session, &config).await?;
    }

    Ok(())
}

async fn interactive(
    engine: &OrderingEngine,
    session: &SessionId,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║        Garçon — Interactive Ordering         ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Provider:  {}", config.responder.provider);
    println!("  Model:     {}", config.responder.model);
    println!("  Menu:      {} items", engine.catalog().len());
    println!("  Session:   {session}");
    println!();
    println!("  Ask for the menu, order dishes, view your cart, or confirm.");
    println!("  Type 'exit' or Ctrl+C to quit.");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("  You > ");
    use std::io::Write;
    std::io::stdout().flush()?;

    while let Some(line) = lines.next_line().await? {
        let message = line.trim();

        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }
        if message.is_empty() {
            print!("  You > ");
            std::io::stdout().flush()?;
            continue;
        }

        eprint!("  ...");

        match engine.submit(message, session).await {
            Ok(turn) => {
                eprint!("\r     \r");
                println!();
                // Print with a visible assistant prefix
                for line in turn.reply.lines() {
                    println!("  Garçon > {line}");
                }
                println!();
            }
            Err(e) => {
                eprint!("\r     \r");
                eprintln!("  [Error] {e}");
                println!();
            }
        }

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  Bon appétit! 👋");
    println!();

    Ok(())
}
