//! HTTP client for talking to the search API

use super::transport::{HttpTransport, SearchResponse};
use super::user_agent::{accept_json, user_agent};
use crate::config::OutgoingSettings;
use crate::error::{Result, SearchError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed [`HttpTransport`]
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> anyhow::Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> anyhow::Result<Self> {
        let timeout = Duration::try_from_secs_f64(settings.request_timeout)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(accept_json()));
        for (key, value) in &settings.extra_headers {
            headers.insert(
                HeaderName::from_bytes(key.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        let mut builder = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent(settings.useragent_suffix.as_deref()))
            .default_headers(headers)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        Ok(Self {
            client: builder.build()?,
            timeout,
        })
    }

    /// Request timeout applied to every call
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn get(&self, url: &str) -> Result<SearchResponse> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(SearchError::transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(SearchError::transport)?;

        Ok(SearchResponse { status, body })
    }
}
