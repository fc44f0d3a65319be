//! Garçon CLI — the main entry point.
//!
//! Commands:
//! - `init`   — Write a starter config file
//! - `chat`   — Interactive ordering or single-message mode
//! - `serve`  — Start the HTTP gateway and web UI
//! - `menu`   — Print the menu
//! - `status` — Show configuration summary

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "garcon",
    about = "Garçon — conversational food ordering assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter configuration file
    Init,

    /// Order food at the terminal
    Chat {
        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,

        /// Reuse a fixed session id instead of a fresh one
        #[arg(long)]
        session: Option<String>,
    },

    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the menu
    Menu,

    /// Show configuration summary
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init => commands::init::run().await?,
        Commands::Chat { message, session } => commands::chat::run(message, session).await?,
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Menu => commands::menu::run().await?,
        Commands::Status => commands::status::run().await?,
    }

    Ok(())
}
