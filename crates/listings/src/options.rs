// ABOUTME: Configuration for the fetcher: timeout, User-Agent and extra headers.
// ABOUTME: FetcherBuilder provides a fluent API for constructing Fetcher instances.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::FetchError;
use crate::fetch::Fetcher;

/// Desktop Chrome identification sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Configuration options for the fetcher.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
    pub headers: HashMap<String, String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: HashMap::new(),
        }
    }
}

/// Builder for constructing Fetcher instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct FetcherBuilder {
    opts: FetchOptions,
}

impl FetcherBuilder {
    /// Create a new FetcherBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Add a custom header to every request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Fetcher with the configured options.
    pub fn build(self) -> Result<Fetcher, FetchError> {
        Fetcher::new(self.opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_browser_profile() {
        let opts = FetchOptions::default();
        assert_eq!(opts.timeout, Duration::from_secs(20));
        assert!(opts.user_agent.starts_with("Mozilla/5.0 (Windows NT 10.0; Win64; x64)"));
        assert!(opts.headers.is_empty());
    }

    #[test]
    fn builder_overrides_options() {
        let builder = FetcherBuilder::new()
            .timeout(Duration::from_secs(3))
            .user_agent("test-agent")
            .header("Accept-Language", "en-NZ");
        assert_eq!(builder.opts.timeout, Duration::from_secs(3));
        assert_eq!(builder.opts.user_agent, "test-agent");
        assert_eq!(
            builder.opts.headers.get("Accept-Language").map(String::as_str),
            Some("en-NZ")
        );
    }
}
