//! Service-layer abstractions.

pub mod providers;
