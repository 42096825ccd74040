use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use secrecy::Secret;
use std::env;

/// Gemini API base used unless overridden (tests point this at a local mock).
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub greeting: GreetingConfig,
    pub google: GoogleConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// The single frontend origin allowed to call the API.
    pub allowed_origin: String,
}

#[derive(Debug, Clone)]
pub struct GreetingConfig {
    pub source: GreetingSource,
    pub message: String,
}

/// Where `/api/hello` gets its message from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingSource {
    Fixed,
    Gemini,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub text_model: String,
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("BACKEND_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .context("BACKEND_PORT must be a valid port number")?;

        let allowed_origin = env::var("BACKEND_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let source = match env::var("BACKEND_GREETING_SOURCE")
            .unwrap_or_else(|_| "fixed".to_string())
            .as_str()
        {
            "fixed" => GreetingSource::Fixed,
            "gemini" => GreetingSource::Gemini,
            other => bail!(
                "BACKEND_GREETING_SOURCE must be 'fixed' or 'gemini', got '{}'",
                other
            ),
        };

        let message = env::var("BACKEND_GREETING_MESSAGE")
            .unwrap_or_else(|_| "Hello from Axum! This is Koushik!".to_string());

        let api_key = env::var("GOOGLE_API_KEY").unwrap_or_default();
        if source == GreetingSource::Gemini && api_key.is_empty() {
            bail!("GOOGLE_API_KEY must be set when BACKEND_GREETING_SOURCE is 'gemini'");
        }

        let text_model =
            env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());
        let api_base_url = env::var("GEMINI_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            cors: CorsConfig { allowed_origin },
            greeting: GreetingConfig { source, message },
            google: GoogleConfig {
                api_key: Secret::new(api_key),
            },
            models: ModelConfig {
                text_model,
                api_base_url,
            },
        })
    }
}
