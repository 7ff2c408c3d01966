// ABOUTME: Blocking HTTP fetcher for a single results page.
// ABOUTME: Sends one GET with a browser User-Agent and timeout; non-success statuses are errors.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{info, warn};
use url::Url;

use crate::error::FetchError;
use crate::options::{FetchOptions, FetcherBuilder};

/// Fetches pages with a fixed set of options. Each instance owns its own client.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    opts: FetchOptions,
}

impl Fetcher {
    /// Create a Fetcher from options.
    pub fn new(opts: FetchOptions) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        for (key, value) in &opts.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| FetchError::config(format!("bad header name {key:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| FetchError::config(format!("bad header value for {key}: {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(FetchError::config)?;

        Ok(Self { client, opts })
    }

    /// Create a FetcherBuilder.
    pub fn builder() -> FetcherBuilder {
        FetcherBuilder::new()
    }

    /// The options this fetcher was built with.
    pub fn options(&self) -> &FetchOptions {
        &self.opts
    }

    /// GET `url` and return the body as text.
    ///
    /// Fails on an invalid URL, a transport error, a timeout, or any status
    /// outside 2xx. Nothing is retried.
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::invalid_url(url, e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FetchError::invalid_url(
                url,
                format!("unsupported scheme {}", parsed.scheme()),
            ));
        }

        let resp = self
            .client
            .get(parsed)
            .send()
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "connection failed");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().map_err(|e| FetchError::from_reqwest(url, e))?;
        info!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

/// Fetch `url` with default options.
pub fn fetch(url: &str) -> Result<String, FetchError> {
    Fetcher::new(FetchOptions::default())?.fetch(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_url() {
        let err = fetch("/searchresults.html").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = fetch("ftp://example.com/page").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn rejects_bad_header_name() {
        let err = Fetcher::builder().header("bad header", "x").build().unwrap_err();
        assert!(matches!(err, FetchError::Config { .. }));
        assert_eq!(err.url(), None);
    }
}
