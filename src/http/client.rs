//! API client core
//!
//! Builds requests against the configured base URL and decodes responses:
//! - Every request carries accept, user agent and bearer headers
//! - Status >= 400 always decodes as a structured API error
//! - Exchanges race the caller's cancellation token
//! - No retries: a failed exchange fails the call

use crate::auth::{Authenticator, Credential};
use crate::cancel::CancellationToken;
use crate::config::{ClientConfig, TOKEN_ENV};
use crate::error::{ApiError, Error, ErrorResponse, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

const JSON: &str = "application/json";

/// Transport metadata of a completed exchange
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
}

/// A decoded response body together with its transport metadata
#[derive(Debug, Clone)]
pub struct Decoded<T> {
    /// The decoded body
    pub value: T,
    /// Status and headers
    pub meta: ResponseMeta,
}

/// Client for the Up API
///
/// Cheap to clone and safe to share across tasks: configuration is read-only
/// after construction and each call builds its own request state.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    user_agent: HeaderValue,
    authenticator: Authenticator,
    max_pages: Option<usize>,
}

impl Client {
    /// Create a client for the production API with default settings
    pub fn new(token: impl Into<Credential>) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a client from `UP_TOKEN` and `UP_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| Error::missing_field(TOKEN_ENV))?;
        Self::with_config(token, ClientConfig::from_env())
    }

    /// Create a client with custom configuration
    pub fn with_config(token: impl Into<Credential>, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Self::with_http_client(token, config, http)
    }

    /// Create a client around a caller-built transport
    ///
    /// The transport's own timeout and TLS settings apply; `config.timeout`
    /// is not used.
    pub fn with_http_client(
        token: impl Into<Credential>,
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Result<Self> {
        let credential = token.into();
        if credential.is_blank() {
            return Err(Error::missing_field(TOKEN_ENV));
        }

        let authenticator = Authenticator::new(credential);
        if authenticator.header_value().is_none() {
            return Err(Error::config("token contains characters not allowed in a header"));
        }

        if config.max_pages == Some(0) {
            return Err(Error::config(
                "max_pages must be at least 1; use no_page_limit to remove the cap",
            ));
        }

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| Error::config(format!("invalid user agent: {}", config.user_agent)))?;

        Ok(Self {
            http,
            base_url: config.parsed_base_url()?,
            user_agent,
            authenticator,
            max_pages: config.max_pages,
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &reqwest::Client {
        &self.http
    }

    /// The URL every relative path resolves against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Maximum pages one list call may fetch
    pub fn max_pages(&self) -> Option<usize> {
        self.max_pages
    }

    /// Resolve a relative path, or pass an absolute URL through
    pub fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Build an absolute endpoint URL from path segments
    ///
    /// Each segment is percent-encoded on its own, so IDs can never escape
    /// into neighbouring segments or the query.
    pub fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config("base URL cannot be used as a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }

    /// Build a request without performing any I/O
    ///
    /// `path` may carry a query string. A present `body` is serialized to JSON
    /// and sent with a JSON content type.
    pub fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.resolve(path)?;

        let mut req = self
            .http
            .request(method, url)
            .header(ACCEPT, JSON)
            .header(USER_AGENT, self.user_agent.clone());
        req = self.authenticator.apply(req);

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(Error::Encode)?;
            req = req.header(CONTENT_TYPE, JSON).body(payload);
        }

        Ok(req.build()?)
    }

    /// Build a body-less GET request
    pub fn get_request(&self, path: &str) -> Result<Request> {
        self.new_request::<()>(Method::GET, path, None)
    }

    /// Send a request and decode a success body into `T`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &CancellationToken,
        request: Request,
    ) -> Result<Decoded<T>> {
        let (meta, body) = self.exchange(ctx, request).await?;
        let value = serde_json::from_slice(&body)?;
        Ok(Decoded { value, meta })
    }

    /// Send a request whose success body carries nothing of interest
    pub async fn execute_no_content(
        &self,
        ctx: &CancellationToken,
        request: Request,
    ) -> Result<ResponseMeta> {
        let (meta, _) = self.exchange(ctx, request).await?;
        Ok(meta)
    }

    /// GET `path` and decode the body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        ctx: &CancellationToken,
        path: &str,
    ) -> Result<T> {
        let request = self.get_request(path)?;
        Ok(self.execute(ctx, request).await?.value)
    }

    /// Send the request, read the whole body and classify the status
    async fn exchange(
        &self,
        ctx: &CancellationToken,
        request: Request,
    ) -> Result<(ResponseMeta, Bytes)> {
        let method = request.method().clone();
        let url = request.url().clone();

        let (meta, body) = self.send(ctx, request).await?;
        debug!("{} {} -> {}", method, url, meta.status.as_u16());

        if meta.status.as_u16() >= 400 {
            return Err(decode_api_error(meta.status, &body));
        }

        Ok((meta, body))
    }

    /// Perform the transport step under the caller's token
    ///
    /// The response is consumed in full here, so the connection is released
    /// before any decoding happens.
    async fn send(
        &self,
        ctx: &CancellationToken,
        request: Request,
    ) -> Result<(ResponseMeta, Bytes)> {
        let transfer = async {
            let response = self.http.execute(request).await?;
            let meta = ResponseMeta {
                status: response.status(),
                headers: response.headers().clone(),
            };
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((meta, body))
        };

        match ctx.run(transfer).await? {
            Ok(exchange) => Ok(exchange),
            Err(err) => {
                // A transport failure that coincides with the token firing is
                // reported as the cancellation.
                ctx.check()?;
                Err(Error::Http(err))
            }
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("credential", self.authenticator.credential())
            .field("max_pages", &self.max_pages)
            .finish_non_exhaustive()
    }
}

/// Turn an error response into [`Error::Api`], keeping the status if the
/// body is not the documented error shape
fn decode_api_error(status: StatusCode, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(parsed) => {
            let err = ApiError::new(status.as_u16(), parsed);
            warn!("API error {}: {}", status.as_u16(), err);
            Error::Api(err)
        }
        Err(source) => {
            warn!("HTTP {} with undecodable error body", status.as_u16());
            Error::UndecodableErrorBody {
                status: status.as_u16(),
                source,
            }
        }
    }
}
