//! API configuration.

use clap::Parser;

/// Connection settings for the remote storefront API.
#[derive(Debug, Clone, Parser)]
pub struct ApiConfig {
    /// Base URL of the storefront API, without a trailing slash.
    #[clap(long, env = "STOREFRONT_API_URL")]
    pub base_url: String,

    /// API key appended to every request.
    #[clap(long, env = "STOREFRONT_API_KEY")]
    pub api_key: String,
}

impl ApiConfig {
    /// Build a configuration directly, bypassing CLI/env parsing.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}
