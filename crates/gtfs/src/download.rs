//! Reference [`Downloader`] implementation, fetching feed archives and
//! realtime messages over HTTP.
//!
//! Grounded on `download_file` from the original `gtfs::lib` module:
//! the same `reqwest::Client` with a shared cookie jar, but returning
//! the body in memory rather than writing it to disk, and bounded by
//! [`DownloadOptions::max_size`]/`timeout` instead of running unbounded.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use storage::error::{CoreError, Result};
use storage::{DownloadOptions, Downloader};

/// HTTP-backed [`Downloader`]. Each instance owns one cookie jar, shared
/// across requests so a feed server that sets session cookies on the
/// first request is honored on subsequent ones.
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new() -> Self {
        let jar = Arc::new(Jar::default());
        let client = reqwest::Client::builder()
            .cookie_provider(jar)
            .build()
            .expect("building the default reqwest client never fails");
        Self { client }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

fn build_headers(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::try_from(name.as_str())
            .map_err(|error| CoreError::Validation(format!("invalid header name {name}: {error}")))?;
        let value = HeaderValue::try_from(value.as_str())
            .map_err(|error| CoreError::Validation(format!("invalid header value for {name}: {error}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn get(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        options: &DownloadOptions,
    ) -> Result<Vec<u8>> {
        let mut request = self.client.get(url).headers(build_headers(headers)?);
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(CoreError::backend)?;
        let response = response.error_for_status().map_err(CoreError::backend)?;

        if let (Some(max_size), Some(content_length)) = (options.max_size, response.content_length()) {
            if content_length > max_size {
                return Err(CoreError::Validation(format!(
                    "response from {url} is {content_length} bytes, exceeding the {max_size} byte limit"
                )));
            }
        }

        let bytes = response.bytes().await.map_err(CoreError::backend)?;
        if let Some(max_size) = options.max_size {
            if bytes.len() as u64 > max_size {
                return Err(CoreError::Validation(format!(
                    "response from {url} is {} bytes, exceeding the {max_size} byte limit",
                    bytes.len()
                )));
            }
        }

        Ok(bytes.to_vec())
    }
}
