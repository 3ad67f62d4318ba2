//! HTTP access to Open-Meteo with caching and retries.

use crate::request::cache::ResponseCache;
use crate::request::error::RequestError;
use crate::request::retry::RetryPolicy;
use crate::types::endpoint::CacheExpiry;
use log::{info, warn};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::path::Path;

/// Error body returned by Open-Meteo for invalid requests.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    reason: String,
}

pub struct HttpFetcher {
    client: Client,
    cache: ResponseCache,
    retry: RetryPolicy,
}

impl HttpFetcher {
    pub fn new(cache_dir: &Path, client: Client, retry: RetryPolicy) -> Self {
        Self {
            client,
            cache: ResponseCache::new(cache_dir),
            retry,
        }
    }

    /// Fetches the body for `base_url?pairs`, answering from the cache when a
    /// fresh entry exists and storing successful responses otherwise.
    pub async fn fetch(
        &self,
        base_url: &str,
        pairs: &[(&'static str, String)],
        expiry: CacheExpiry,
    ) -> Result<String, RequestError> {
        let url = self
            .client
            .get(base_url)
            .query(pairs)
            .build()
            .map_err(|e| RequestError::InvalidUrl(base_url.to_string(), e))?
            .url()
            .clone();
        let key = url.as_str();

        if let Some(body) = self.cache.get(key, expiry).await {
            return Ok(body);
        }

        let body = self.fetch_with_retry(&url).await?;
        if expiry != CacheExpiry::Disabled {
            if let Err(e) = self.cache.put(key, &body).await {
                warn!("Failed to cache response for {}: {}", key, e);
            }
        }
        Ok(body)
    }

    async fn fetch_with_retry(&self, url: &Url) -> Result<String, RequestError> {
        let max_attempts = self.retry.max_attempts();
        let mut attempt = 1;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_transient(&self.retry.retry_statuses) => {
                    if attempt >= max_attempts {
                        if attempt == 1 {
                            return Err(e);
                        }
                        return Err(RequestError::RetriesExhausted {
                            url: url.to_string(),
                            attempts: attempt,
                            last_error: Box::new(e),
                        });
                    }
                    let delay = self.retry.backoff(attempt);
                    warn!(
                        "Attempt {}/{} for {} failed ({}), retrying in {:?}",
                        attempt, max_attempts, url, e, delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once(&self, url: &Url) -> Result<String, RequestError> {
        info!("Requesting {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| RequestError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        if status.is_success() {
            return response
                .text()
                .await
                .map_err(|e| RequestError::Body(url.to_string(), e));
        }

        if status == StatusCode::BAD_REQUEST {
            if let Ok(text) = response.text().await {
                if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
                    return Err(RequestError::Api {
                        url: url.to_string(),
                        reason: body.reason,
                    });
                }
            }
        }

        Err(RequestError::HttpStatus {
            url: url.to_string(),
            status,
        })
    }
}
