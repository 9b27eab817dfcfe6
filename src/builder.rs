use std::borrow::Cow;
use std::time::Duration;

/// Errors that may occur while building a [`Client`](crate::Client).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no base URL was provided.
    #[error("no base url provided")]
    BaseUrlMissing,
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// Builder for constructing a [`Client`](crate::Client) with custom
/// configuration.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<Cow<'static, str>>,
    client_builder: Option<reqwest::ClientBuilder>,
    credentials: crate::Credentials,
    timeout: Option<Duration>,
    accept_invalid_certs: bool,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            client_builder: None,
            credentials: crate::Credentials::Anonymous,
            timeout: None,
            accept_invalid_certs: false,
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured from environment variables.
    ///
    /// - `ARTIFACTORY_URL` for the base URL.
    /// - `ARTIFACTORY_TOKEN` or `ARTIFACTORY_USERNAME`/`ARTIFACTORY_PASSWORD`
    ///   for credentials, see [`Credentials::from_env`](crate::Credentials::from_env).
    /// - `ARTIFACTORY_TIMEOUT` for a request timeout, in milliseconds.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("ARTIFACTORY_URL").ok().map(Cow::Owned),
            client_builder: None,
            credentials: crate::Credentials::from_env()
                .unwrap_or(crate::Credentials::Anonymous),
            timeout: std::env::var("ARTIFACTORY_TIMEOUT")
                .ok()
                .and_then(|value| value.parse::<u64>().ok())
                .map(Duration::from_millis),
            accept_invalid_certs: false,
        }
    }
}

impl ClientBuilder {
    /// Sets the base URL of the Artifactory instance, without a trailing slash.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = Some(base_url.into());
    }

    /// Sets the base URL and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Sets the credentials attached to every request.
    pub fn set_credentials(&mut self, credentials: crate::Credentials) {
        self.credentials = credentials;
    }

    /// Sets the credentials and returns the modified builder.
    pub fn with_credentials(mut self, credentials: crate::Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Sets a timeout applied to every request. There is no timeout by
    /// default; a hung request blocks its caller until the transport gives up.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Sets the request timeout and returns the modified builder.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    /// Disables TLS certificate validation.
    ///
    /// Internal Artifactory instances frequently run with self-signed
    /// certificates; this is the explicit opt-out for talking to them.
    /// Certificates are validated by default, and opting out makes the
    /// connection vulnerable to man-in-the-middle attacks.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BaseUrlMissing`] when no base URL was set.
    /// Returns [`Error::Reqwest`] when the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let base_url = self.base_url.ok_or(Error::BaseUrlMissing)?;
        let base_url = match base_url {
            Cow::Borrowed(value) => Cow::Borrowed(value.trim_end_matches('/')),
            Cow::Owned(mut value) => {
                while value.ends_with('/') {
                    value.pop();
                }
                Cow::Owned(value)
            }
        };
        let mut builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if self.accept_invalid_certs {
            tracing::warn!("tls certificate validation is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }
        Ok(crate::Client {
            base_url,
            credentials: self.credentials,
            inner: builder.build()?,
        })
    }
}
