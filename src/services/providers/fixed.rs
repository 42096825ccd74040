//! Fixed-text greeting provider.

use super::{GreetingProvider, ProviderError};
use async_trait::async_trait;

/// Greeting provider that returns a configured static message.
pub struct FixedGreeter {
    message: String,
}

impl FixedGreeter {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

#[async_trait]
impl GreetingProvider for FixedGreeter {
    async fn greeting(&self) -> Result<String, ProviderError> {
        Ok(self.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_message() {
        let greeter = FixedGreeter::new("Hi everyone!".to_string());
        assert_eq!(greeter.greeting().await.unwrap(), "Hi everyone!");
    }
}
