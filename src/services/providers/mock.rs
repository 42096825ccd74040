//! Mock provider implementation for testing.

use super::{GreetingProvider, ProviderError};
use async_trait::async_trait;

/// Mock greeting provider for testing.
pub struct MockGreeter {
    enabled: bool,
}

impl MockGreeter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl GreetingProvider for MockGreeter {
    async fn greeting(&self) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock greeting provider not enabled".to_string(),
            ));
        }

        Ok("Mock greeting".to_string())
    }
}
