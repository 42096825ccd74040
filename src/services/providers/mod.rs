//! Greeting provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction for the greeting source,
//! allowing easy swapping between different backends (fixed text, Gemini, mock).

pub mod fixed;
pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for greeting providers.
#[async_trait]
pub trait GreetingProvider: Send + Sync {
    /// Produce the greeting string.
    async fn greeting(&self) -> Result<String, ProviderError>;
}
