//! Credentials attached to every outgoing request as an
//! `Authorization: Basic {token}` header.

use base64::Engine;

/// The different kinds of credentials used for authentication.
///
/// The basic token is carried pre-encoded and is never decoded or validated
/// by the client; it is forwarded verbatim in the `Authorization` header.
#[derive(Clone, Debug)]
pub enum Credentials {
    /// A base64-encoded `username:password` pair.
    Basic(String),
    /// No `Authorization` header is sent.
    Anonymous,
}

impl Credentials {
    /// Creates credentials from an already base64-encoded `username:password`
    /// token.
    pub fn basic_token<S: Into<String>>(token: S) -> Self {
        Self::Basic(token.into())
    }

    /// Creates credentials from a plain username and password, encoding them
    /// on the spot.
    pub fn basic(username: &str, password: &str) -> Self {
        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{username}:{password}"));
        Self::Basic(token)
    }

    /// Creates credentials based on environment variables.
    ///
    /// When `ARTIFACTORY_TOKEN` is set, it is used as the pre-encoded token.
    /// When `ARTIFACTORY_USERNAME` and `ARTIFACTORY_PASSWORD` are set, they
    /// are encoded into one. If none are set, `None` is returned.
    pub fn from_env() -> Option<Self> {
        if let Ok(token) = std::env::var("ARTIFACTORY_TOKEN") {
            Some(Self::Basic(token))
        } else if let (Ok(username), Ok(password)) = (
            std::env::var("ARTIFACTORY_USERNAME"),
            std::env::var("ARTIFACTORY_PASSWORD"),
        ) {
            Some(Self::basic(&username, &password))
        } else {
            None
        }
    }

    pub(crate) fn header_value(&self) -> Option<String> {
        match self {
            Self::Basic(token) => Some(format!("Basic {token}")),
            Self::Anonymous => None,
        }
    }
}
