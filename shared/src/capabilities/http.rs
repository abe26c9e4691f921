use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ConfigError, FetchError};

pub const MAX_URL_LENGTH: usize = 2048;

pub type HttpResult = crux_http::Result<crux_http::Response<Vec<u8>>>;

/// An absolute http(s) URL the shell can fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidatedUrl {
    url: Url,
}

impl ValidatedUrl {
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        Self::validate(&url).map(|url| Self { url })
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Resolves `path` against this URL the way a browser resolves a
    /// relative link (`./countries.json` against `https://site/app/`).
    pub fn join(&self, path: &str) -> Result<Self, ConfigError> {
        let joined = self.url.join(path).map_err(|e| ConfigError::InvalidUrl {
            url: Self::truncate_url(path),
            reason: e.to_string(),
        })?;
        Self::new(joined.to_string())
    }

    /// Appends query parameters, percent-encoding each value.
    pub fn with_query<'a>(&self, params: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut url = self.url.clone();
        url.query_pairs_mut().extend_pairs(params);
        Self { url }
    }

    fn validate(url: &str) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: Self::truncate_url(url),
            reason,
        };

        if url.trim().is_empty() {
            return Err(invalid("URL cannot be empty".to_string()));
        }

        if url.len() > MAX_URL_LENGTH {
            return Err(invalid(format!(
                "URL exceeds maximum length of {MAX_URL_LENGTH} bytes"
            )));
        }

        let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;

        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(invalid(format!(
                "invalid scheme '{scheme}', only 'http' and 'https' are allowed"
            )));
        }

        if parsed.host_str().is_none() {
            return Err(invalid("URL must have a host".to_string()));
        }

        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err(invalid("credentials in URL are not allowed".to_string()));
        }

        Ok(parsed)
    }

    fn truncate_url(url: &str) -> String {
        match url.char_indices().nth(100) {
            Some((cut, _)) => format!("{}...", &url[..cut]),
            None => url.to_string(),
        }
    }
}

impl std::fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collapses a shell HTTP result into the response body, treating transport
/// errors, non-2xx statuses and empty bodies alike as fetch failures.
pub fn read_body(result: HttpResult) -> Result<Vec<u8>, FetchError> {
    let mut response = result.map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: u16::from(status),
        });
    }

    match response.take_body() {
        Some(body) if !body.is_empty() => Ok(body),
        _ => Err(FetchError::EmptyBody),
    }
}
