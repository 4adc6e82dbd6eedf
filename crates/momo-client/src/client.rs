//! Core HTTP client with connectivity pre-flight and body logging.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::connectivity::{AlwaysOnline, ConnectivityMonitor};
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::Response;

/// HTTP client for the MoMo API.
///
/// Every call is a single attempt: failures surface immediately and retry
/// policy is left to the caller. Before touching the wire the client consults
/// its [`ConnectivityMonitor`] and fails fast with a connectivity error when
/// offline, mirroring how a mobile client refuses to dial out without a
/// network path.
#[derive(Clone)]
pub struct MomoHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
    connectivity: Arc<dyn ConnectivityMonitor>,
}

impl std::fmt::Debug for MomoHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MomoHttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MomoHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_monitor(config, Arc::new(AlwaysOnline))
    }

    /// Create a new HTTP client with a custom connectivity monitor.
    pub fn with_monitor(
        config: ClientConfig,
        connectivity: Arc<dyn ConnectivityMonitor>,
    ) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            config,
            connectivity,
        })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, url)
    }

    /// Execute a request, mapping non-2xx responses to errors.
    #[instrument(skip(self, request), fields(method = ?request.method, url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        if !self.connectivity.is_connected() {
            info!("no network path available, call not attempted");
            return Err(Error::new(ErrorKind::Connectivity));
        }

        let response = self.execute_once(&request).await?;
        response.checked()
    }

    /// Execute a single request without error mapping.
    async fn execute_once(&self, request: &RequestBuilder) -> Result<Response> {
        let mut req = self.inner.request(request.method.to_reqwest(), &request.url);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(ref body) = request.body {
            if self.config.log_bodies {
                debug!(body = %body, "request body");
            }
            req = req.json(body);
        }

        debug!(method = ?request.method, url = %request.url, "sending request");

        let response = req.send().await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;

        if self.config.log_bodies {
            debug!(status, body = %body, "response received");
        } else if (200..300).contains(&status) {
            debug!(status, "response received");
        } else {
            info!(status, "non-success response");
        }

        Ok(Response::new(status, headers, body))
    }

    /// Execute a request and deserialize the JSON response.
    pub async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(request).await?;
        response.json()
    }
}
