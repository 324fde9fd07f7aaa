//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod endpoints;
mod sender;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{Credentials, SendSmsResponse, SenderId, ValidationError};
use crate::transport::{SendOutcome, TransportError};

pub use endpoints::{DEFAULT_BASE_URL, EndpointPaths, Endpoints};
pub use sender::Sender;

/// Timeout applied to every request unless overridden by the builder.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

struct HttpResponse {
    status: u16,
    body: Option<Box<dyn ResponseBody>>,
}

/// A response body that must be released exactly once after use.
trait ResponseBody: Send {
    fn read_to_string(&mut self) -> BoxFuture<'_, Result<String, BoxError>>;

    fn close(self: Box<Self>) -> Result<(), BoxError>;
}

trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    fn into_response(response: reqwest::Response) -> HttpResponse {
        let status = response.status().as_u16();
        let body: Option<Box<dyn ResponseBody>> = if response.content_length() == Some(0) {
            None
        } else {
            Some(Box::new(ReqwestBody {
                response: Some(response),
            }))
        };
        HttpResponse { status, body }
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self.client.get(url).timeout(self.timeout).send().await?;
            Ok(Self::into_response(response))
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .timeout(self.timeout)
                .form(&params)
                .send()
                .await?;
            Ok(Self::into_response(response))
        })
    }
}

struct ReqwestBody {
    response: Option<reqwest::Response>,
}

impl ResponseBody for ReqwestBody {
    fn read_to_string(&mut self) -> BoxFuture<'_, Result<String, BoxError>> {
        Box::pin(async move {
            let Some(response) = self.response.take() else {
                return Err("response body was already read".into());
            };
            Ok(response.text().await?)
        })
    }

    fn close(self: Box<Self>) -> Result<(), BoxError> {
        // Dropping an unread response returns its connection to reqwest.
        drop(self.response);
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsCountryClient`] and [`Sender`].
///
/// Body release failures are never dropped: on their own they surface as
/// [`SmsCountryError::BodyClose`], and on top of another failure as
/// [`SmsCountryError::WithCloseError`], which keeps both.
pub enum SmsCountryError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, body read errors).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The gateway answered without a body, or with a blank one.
    #[error("empty response from server")]
    EmptyResponse,

    /// The gateway answered a send call with something other than an acceptance.
    #[error("Error sending SMS. Response: {body}")]
    Rejected { body: String },

    /// Balance response did not start with a decimal number.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// Caller-supplied arguments were rejected before any request was made.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The builder was given a base URL that does not parse.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[source] url::ParseError),

    /// Releasing the response body failed after the call otherwise succeeded.
    #[error("response body close error: {0}")]
    BodyClose(#[source] BoxError),

    /// The call failed and releasing the response body failed as well.
    #[error("{error}; response body close error: {close}")]
    WithCloseError {
        #[source]
        error: Box<SmsCountryError>,
        close: BoxError,
    },
}

impl SmsCountryError {
    /// The error that made the call fail, looking through [`SmsCountryError::WithCloseError`].
    pub fn primary(&self) -> &SmsCountryError {
        match self {
            Self::WithCloseError { error, .. } => error.primary(),
            other => other,
        }
    }

    /// The body release failure carried by this error, if any.
    pub fn close_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::BodyClose(close) | Self::WithCloseError { close, .. } => Some(&**close),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmsCountryClient`].
///
/// Use this when you need a different base URL (for example a plain `http` deployment),
/// timeout, or user-agent.
pub struct SmsCountryClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl SmsCountryClientBuilder {
    /// Create a builder with the default endpoint and a 60 second timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override scheme and host, e.g. `http://api.smscountry.com`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeout applied to each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsCountryClient`].
    pub fn build(self) -> Result<SmsCountryClient, SmsCountryError> {
        url::Url::parse(&self.base_url).map_err(SmsCountryError::InvalidEndpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| SmsCountryError::Transport(Box::new(err)))?;

        Ok(SmsCountryClient::with_transport(
            self.credentials,
            Endpoints::new(self.base_url),
            Arc::new(ReqwestTransport {
                client,
                timeout: self.timeout,
            }),
        ))
    }
}

#[derive(Clone)]
/// SMSCountry HTTP API client.
///
/// Holds the account credentials and a shared HTTP connection pool. Cloning is cheap, and
/// every [`Sender`] created from a client shares its pool. Messages are sent through a
/// [`Sender`]; the client itself only answers balance queries.
pub struct SmsCountryClient {
    credentials: Credentials,
    endpoints: Endpoints,
    balance_url: String,
    http: Arc<dyn HttpTransport>,
}

impl SmsCountryClient {
    /// Create a client for the default endpoint with a 60 second timeout.
    ///
    /// For more customization, use [`SmsCountryClient::builder`].
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_transport(
            Credentials::new(user, password),
            Endpoints::default(),
            Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                timeout: DEFAULT_TIMEOUT,
            }),
        )
    }

    /// Start building a client with custom settings.
    pub fn builder(
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> SmsCountryClientBuilder {
        SmsCountryClientBuilder::new(Credentials::new(user, password))
    }

    fn with_transport(
        credentials: Credentials,
        endpoints: Endpoints,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        let balance_url = format!(
            "{}?{}",
            endpoints.balance_url(),
            crate::transport::encode_balance_query(&credentials)
        );
        Self {
            credentials,
            endpoints,
            balance_url,
            http,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Create a [`Sender`] that sends as `sender_id` through this client.
    pub fn sender(&self, sender_id: impl Into<SenderId>) -> Sender {
        Sender::new(self.clone(), sender_id.into())
    }

    /// Query the account balance.
    ///
    /// The gateway answers with plain text such as `123.45 units`; the leading number is
    /// returned.
    ///
    /// Errors:
    /// - [`SmsCountryError::Transport`] when the request or body read fails,
    /// - [`SmsCountryError::EmptyResponse`] for a missing or blank body,
    /// - [`SmsCountryError::Parse`] when the leading token is not a number.
    pub async fn balance(&self) -> Result<f64, SmsCountryError> {
        debug!(endpoint = self.endpoints.paths().balance, "querying balance");
        let response = self
            .http
            .get(&self.balance_url)
            .await
            .map_err(SmsCountryError::Transport)?;
        debug!(status = response.status, "balance response received");

        read_body(response, |body| {
            crate::transport::decode_balance_response(body).map_err(|err| match err {
                TransportError::Empty => SmsCountryError::EmptyResponse,
                err => SmsCountryError::Parse(Box::new(err)),
            })
        })
        .await
    }

    async fn send_form(
        &self,
        url: String,
        params: Vec<(String, String)>,
    ) -> Result<SendSmsResponse, SmsCountryError> {
        let response = self
            .http
            .post_form(&url, params)
            .await
            .map_err(SmsCountryError::Transport)?;
        debug!(status = response.status, url = %url, "send response received");

        read_body(response, |body| {
            match crate::transport::decode_send_response(body) {
                SendOutcome::Accepted(body) => Ok(SendSmsResponse { body }),
                SendOutcome::Rejected(body) => {
                    warn!(response = %body, "gateway rejected SMS");
                    Err(SmsCountryError::Rejected { body })
                }
                SendOutcome::Empty => Err(SmsCountryError::EmptyResponse),
            }
        })
        .await
    }
}

impl fmt::Debug for SmsCountryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmsCountryClient")
            .field("credentials", &self.credentials)
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

/// Read the whole body, interpret it, then release it. The body is closed on every path
/// that obtained one.
async fn read_body<T>(
    response: HttpResponse,
    interpret: impl FnOnce(&str) -> Result<T, SmsCountryError>,
) -> Result<T, SmsCountryError> {
    let Some(mut body) = response.body else {
        return Err(SmsCountryError::EmptyResponse);
    };

    let outcome = match body.read_to_string().await {
        Ok(text) => interpret(&text),
        Err(err) => Err(SmsCountryError::Transport(err)),
    };
    merge_close_result(outcome, body.close())
}

fn merge_close_result<T>(
    outcome: Result<T, SmsCountryError>,
    closed: Result<(), BoxError>,
) -> Result<T, SmsCountryError> {
    match (outcome, closed) {
        (outcome, Ok(())) => outcome,
        (Ok(_), Err(close)) => {
            warn!(error = %close, "failed to close response body");
            Err(SmsCountryError::BodyClose(close))
        }
        (Err(error), Err(close)) => {
            warn!(error = %close, "failed to close response body after failed call");
            Err(SmsCountryError::WithCloseError {
                error: Box::new(error),
                close,
            })
        }
    }
}
