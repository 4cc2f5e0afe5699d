/*
[INPUT]:  HTTP configuration (base URL, timeouts) and request interceptors
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, Request, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::http::{GatewayError, Result};
use crate::types::ErrorResponse;

/// Default base URL for the Gateway API
pub const DEFAULT_BASE_URL: &str = "https://dev.api.gateway.tech";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Hook run on every outgoing request before it is sent
///
/// `route` is the endpoint path the caller asked for, without query string.
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    async fn intercept(&self, route: &str, request: &mut Request) -> Result<()>;
}

/// Main HTTP client for the Gateway API
#[derive(Clone)]
pub struct GatewayClient {
    http_client: Client,
    base_url: Url,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl GatewayClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against an explicit base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            interceptors: Vec::new(),
        })
    }

    /// Register an interceptor; interceptors run in registration order
    pub fn with_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint
    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build request builder for an endpoint
    pub fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Run interceptors and send a prepared request
    pub async fn execute(&self, route: &str, builder: RequestBuilder) -> Result<Response> {
        let mut request = builder.build()?;
        let route = route.split('?').next().unwrap_or(route);

        let request_id = Uuid::new_v4().to_string();
        request
            .headers_mut()
            .insert(REQUEST_ID_HEADER, HeaderValue::from_str(&request_id)?);

        for interceptor in &self.interceptors {
            interceptor.intercept(route, &mut request).await?;
        }

        debug!(
            method = %request.method(),
            route,
            request_id = %request_id,
            "sending request"
        );

        Ok(self.http_client.execute(request).await?)
    }

    /// Send a prepared request and decode the JSON body
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        route: &str,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(route, builder).await?;
        decode_response(response).await
    }

    /// Send `body` (if any) to `endpoint` and decode the JSON response
    pub async fn send<B, T>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut builder = self.request(method, endpoint)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send_json(endpoint, builder).await
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.send::<(), T>(Method::GET, endpoint, None).await
    }

    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, endpoint, Some(body)).await
    }
}

impl fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.base_url.as_str())
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|err| err.error)
            .unwrap_or(body);
        return Err(GatewayError::api_error(status, message));
    }

    serde_json::from_str(&body).map_err(|e| {
        GatewayError::InvalidResponse(format!("unexpected body for status {status}: {e}"))
    })
}

/// Attaches a static API key as the bearer token
#[derive(Clone)]
pub struct ApiKeyAuth {
    api_key: String,
}

impl ApiKeyAuth {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyAuth").finish_non_exhaustive()
    }
}

#[async_trait]
impl RequestInterceptor for ApiKeyAuth {
    async fn intercept(&self, _route: &str, request: &mut Request) -> Result<()> {
        let value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))?;
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}
