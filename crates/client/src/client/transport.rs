//! Shared HTTP transport.
//!
//! Every module call goes through [`Transport::execute`], the single place
//! where transport and HTTP failures are translated into [`ApiError`]s.

use std::future::Future;

use chatline_core::envelope::parse_object;
use chatline_core::{
    ApiError, ApiModule, ApiResponse, CallFailure, DecodeError, HttpFailure, TransportFailure,
};
use reqwest::{Method, RequestBuilder};
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::Level;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// HTTP transport shared by every API module.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
    cancellation: Option<CancellationToken>,
}

impl Transport {
    /// Build a transport from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            cancellation: None,
        })
    }

    /// Resolve in-flight and future calls to `RequestCancelled` once `token` fires.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Replace the bearer token sent with each request.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request to an endpoint, authenticated when a token is set.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Issue a request and return the raw envelope object of a 2xx reply.
    pub async fn execute(
        &self,
        module: ApiModule,
        request: RequestBuilder,
    ) -> Result<Map<String, Value>> {
        let body = self
            .guarded(module, async {
                let response = self.send(module, request).await?;
                response.text().await.map_err(classify)
            })
            .await?;

        Ok(parse_object(&body)?)
    }

    /// Issue a request and return the raw bytes of a 2xx reply.
    pub async fn execute_bytes(&self, module: ApiModule, request: RequestBuilder) -> Result<Vec<u8>> {
        self.guarded(module, async {
            let response = self.send(module, request).await?;
            let bytes = response.bytes().await.map_err(classify)?;
            Ok::<_, CallFailure>(bytes.to_vec())
        })
        .await
    }

    /// Issue a request and decode its envelope, mapping `data` with `mapper`.
    pub async fn fetch<T, F>(
        &self,
        module: ApiModule,
        request: RequestBuilder,
        mapper: F,
    ) -> Result<ApiResponse<T>>
    where
        F: FnOnce(Value) -> std::result::Result<T, DecodeError>,
    {
        let raw = self.execute(module, request).await?;
        Ok(ApiResponse::decode(&raw, mapper)?)
    }

    /// Issue a request and decode its envelope, keeping `data` untyped.
    pub async fn fetch_raw(
        &self,
        module: ApiModule,
        request: RequestBuilder,
    ) -> Result<ApiResponse<Value>> {
        let raw = self.execute(module, request).await?;
        Ok(ApiResponse::decode_raw(&raw))
    }

    /// Send a request; non-2xx replies become HTTP failures.
    async fn send(
        &self,
        module: ApiModule,
        request: RequestBuilder,
    ) -> std::result::Result<reqwest::Response, CallFailure> {
        let request = request.build().map_err(classify)?;
        tracing::debug!(%module, method = %request.method(), url = %request.url(), "sending request");

        let response = self.http.execute(request).await.map_err(classify)?;
        let status = response.status();
        tracing::debug!(%module, status = status.as_u16(), "received response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(CallFailure::Http(HttpFailure::from_text(status.as_u16(), &body)))
    }

    /// Run a call, racing it against cancellation and translating any failure.
    async fn guarded<T>(
        &self,
        module: ApiModule,
        call: impl Future<Output = std::result::Result<T, CallFailure>>,
    ) -> Result<T> {
        let outcome = match &self.cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(CallFailure::Transport(TransportFailure::Cancelled)),
                    outcome = call => outcome,
                }
            }
            None => call.await,
        };

        outcome.map_err(|failure| {
            let error = module.translate(failure);
            if failure_level(&error) == Level::WARN {
                tracing::warn!(%module, %error, "API call failed");
            } else {
                tracing::debug!(%module, %error, "API call cancelled");
            }
            ClientError::Api(error)
        })
    }
}

/// Log level for a failed call. Silent failures stay out of the default log.
fn failure_level(error: &ApiError) -> Level {
    if error.is_silent() {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Classify a reqwest error into a call failure.
///
/// Timeouts are checked first: a connect timeout is both.
fn classify(error: reqwest::Error) -> CallFailure {
    if error.is_timeout() {
        CallFailure::Transport(TransportFailure::Timeout)
    } else if error.is_connect() {
        CallFailure::Transport(TransportFailure::ConnectionFailed)
    } else {
        CallFailure::Other(error.to_string())
    }
}
