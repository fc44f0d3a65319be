//! Assemble the responder chain from configuration.

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use garcon_config::AppConfig;

use crate::fallback::FallbackResponder;
use crate::openai_compat::OpenAiCompatResponder;

/// Build the general-chat responder from configuration.
///
/// With an API key (or a keyless provider like Ollama) the chain gets an
/// LLM primary; without one it is empty and every general message gets
/// the canned greeting.
pub fn build_from_config(config: &AppConfig) -> FallbackResponder {
    let settings = &config.responder;
    let mut fallback = FallbackResponder::new("general-chat");

    let mut api_key = settings.api_key.clone().filter(|k| !k.is_empty());
    if api_key.is_none() && settings.provider == "ollama" {
        // Ollama doesn't need a real key
        api_key = Some("ollama".into());
    }

    match api_key {
        Some(key) => {
            let base_url = settings
                .api_url
                .clone()
                .unwrap_or_else(|| default_base_url(&settings.provider));

            info!(
                provider = %settings.provider,
                model = %settings.model,
                "General chat backed by LLM responder"
            );

            let primary = OpenAiCompatResponder::new(
                &settings.provider,
                base_url,
                key,
                &settings.model,
                settings.temperature,
            );
            fallback = fallback.add(Arc::new(primary), Duration::from_secs(settings.timeout_secs));
        }
        None => {
            warn!("No API key configured; general chat will use the canned greeting");
        }
    }

    fallback
}

/// Get the default base URL for well-known providers.
fn default_base_url(provider_name: &str) -> String {
    match provider_name {
        "openai" => "https://api.openai.com/v1".into(),
        "openrouter" => "https://openrouter.ai/api/v1".into(),
        "ollama" => "http://localhost:11434/v1".into(),
        "groq" => "https://api.groq.com/openai/v1".into(),
        _ => format!("https://{provider_name}.api.example.com/v1"),
    }
}
