use hackutd_backend::config::{
    Config, CorsConfig, GoogleConfig, GreetingConfig, GreetingSource, ModelConfig, ServerConfig,
};
use hackutd_backend::startup::Application;
use secrecy::Secret;
use std::time::Duration;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the backend on a random port with the default fixed greeting.
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config()).await
    }

    /// Spawn the backend on a random port with a caller-supplied configuration.
    pub async fn spawn_with(config: Config) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build application");
        let port = app.port();

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(50)).await;

        Self {
            address: format!("http://127.0.0.1:{}", port),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        cors: CorsConfig {
            allowed_origin: TEST_ORIGIN.to_string(),
        },
        greeting: GreetingConfig {
            source: GreetingSource::Fixed,
            message: "Hello from Axum! This is Koushik!".to_string(),
        },
        google: GoogleConfig {
            api_key: Secret::new(String::new()),
        },
        models: ModelConfig {
            text_model: "gemini-2.0-flash".to_string(),
            api_base_url: "http://127.0.0.1:9".to_string(),
        },
    }
}
