//! The B2 client and its lazily authorized session.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, trace};

use b2_core::{
    ApiError, Credentials, Error, HttpRequest, HttpResponse, Result, Session, Transport,
};

use crate::config::ClientConfig;
use crate::transport::ReqwestTransport;

/// Client for the B2 API.
///
/// The client authorizes itself on first use and keeps the session for every
/// later call. Cloning is cheap and clones share the session.
///
/// Errors are never retried. When a call fails with an expired token, call
/// [`B2Client::authorize_account`] and try again.
///
/// # Example
///
/// ```no_run
/// use b2_client::B2Client;
/// use b2_core::Credentials;
///
/// # async fn example() -> b2_core::Result<()> {
/// let client = B2Client::new(Credentials::new("key-id", "application-key"))?;
/// for bucket in client.list_buckets(&Default::default()).await? {
///     println!("{}", bucket.bucket_name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct B2Client<T = ReqwestTransport> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    transport: T,
    credentials: Credentials,
    config: ClientConfig,
    session: RwLock<Option<Session>>,
}

impl<T> Clone for B2Client<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl B2Client<ReqwestTransport> {
    /// Create a client with the default configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(transport, credentials, config)
    }
}

impl<T: Transport> B2Client<T> {
    /// Create a client that sends requests through `transport`.
    pub fn with_transport(
        transport: T,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(Inner {
                transport,
                credentials,
                config,
                session: RwLock::new(None),
            }),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Snapshot of the current session, if authorized.
    pub async fn session(&self) -> Option<Session> {
        self.inner.session.read().await.clone()
    }

    /// Return the session, authorizing first if there is none.
    ///
    /// Concurrent first callers wait on the session lock, so only one
    /// authorization request is made.
    pub async fn ensure_authorized(&self) -> Result<Session> {
        if let Some(session) = self.inner.session.read().await.as_ref() {
            return Ok(session.clone());
        }

        let mut guard = self.inner.session.write().await;
        if let Some(session) = guard.as_ref() {
            return Ok(session.clone());
        }

        let session = self.request_authorization().await?;
        *guard = Some(session.clone());
        Ok(session)
    }

    /// Authorize again and replace the stored session.
    ///
    /// If authorization fails the stored session is dropped.
    pub async fn authorize_account(&self) -> Result<Session> {
        let mut guard = self.inner.session.write().await;
        *guard = None;

        let session = self.request_authorization().await?;
        *guard = Some(session.clone());
        Ok(session)
    }

    /// Forget the session; the next call authorizes again.
    pub async fn clear_session(&self) {
        *self.inner.session.write().await = None;
    }

    #[instrument(skip(self), fields(key_id = %self.inner.credentials.key_id()))]
    async fn request_authorization(&self) -> Result<Session> {
        info!("Authorizing account");

        let request = HttpRequest::get(self.inner.config.authorize_url()?)
            .header("Authorization", self.inner.credentials.basic_auth_header());
        let response = self.inner.transport.send(request).await?;

        if let Some(err) = ApiError::from_response(response.status, &response.body) {
            return Err(Error::AuthorizationFailed(err));
        }

        let session: Session = serde_json::from_slice(&response.body)?;
        debug!(
            account_id = %session.account_id,
            api_url = %session.api_url,
            "Account authorized"
        );
        Ok(session)
    }

    /// POST a JSON body to an API endpoint, authorizing first if needed.
    pub(crate) async fn call<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let session = self.ensure_authorized().await?;
        self.call_with(&session, endpoint, body).await
    }

    /// POST a JSON body using an already obtained session.
    pub(crate) async fn call_with<B, R>(&self, session: &Session, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(endpoint, "B2 API call");

        let request = HttpRequest::post(session.api_url.endpoint_url(endpoint))
            .header("Authorization", session.token.as_str())
            .json(body)?;
        let response = self.send(request).await?;

        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Send a request and turn error statuses into classified errors.
    pub(crate) async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = self.inner.transport.send(request).await?;
        trace!(status = response.status, "B2 response");

        match ApiError::from_response(response.status, &response.body) {
            Some(err) => Err(Error::Api(err)),
            None => Ok(response),
        }
    }

    /// Page size to request, after validating a per-call override.
    pub(crate) fn page_size(&self, requested: Option<u32>) -> Result<u32> {
        match requested {
            None => Ok(self.inner.config.page_size),
            Some(size) if (1..=crate::config::MAX_PAGE_SIZE).contains(&size) => Ok(size),
            Some(size) => Err(Error::invalid_argument(format!(
                "page size must be between 1 and {}, got {}",
                crate::config::MAX_PAGE_SIZE,
                size
            ))),
        }
    }
}

impl<T> fmt::Debug for B2Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("B2Client")
            .field("credentials", &self.inner.credentials)
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
