//! Client library for the [Artifactory REST API](https://jfrog.com/help/r/jfrog-rest-apis).
//!
//! The [`Client`] forwards storage operations (info lookup, existence check,
//! upload, download, folder create/delete, item move) to a remote Artifactory
//! instance and relays its responses. All the logic of consequence (storage,
//! checksums, move semantics) lives server side; this crate only builds the
//! requests and interprets status codes.
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = artifactory::Client::new(
//!     "https://artifactory.example.com/artifactory",
//!     artifactory::Credentials::basic("admin", "password"),
//! )?;
//! let info = client.get_file_info("libs-release-local", "org/acme/app-1.0.jar").await?;
//! println!("md5: {:?}", info.checksums.and_then(|sums| sums.md5));
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

pub mod builder;
pub mod credentials;
pub mod entry;
pub mod error;
pub mod file;
pub mod folder;
pub mod moveops;
mod request;

pub use builder::ClientBuilder;
pub use credentials::Credentials;
pub use error::Error;

/// The default user agent sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub type Result<T> = std::result::Result<T, Error>;

/// Client for the Artifactory REST API.
///
/// Holds the base URL and the pre-encoded credentials; both are immutable for
/// the lifetime of the client. Cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) base_url: Cow<'static, str>,
    pub(crate) credentials: Credentials,
    pub(crate) inner: reqwest::Client,
}

impl Client {
    /// Creates a client with the default configuration.
    ///
    /// Use [`ClientBuilder`] to set a timeout or to opt out of TLS
    /// certificate validation.
    pub fn new(
        base_url: impl Into<Cow<'static, str>>,
        credentials: Credentials,
    ) -> std::result::Result<Self, builder::Error> {
        ClientBuilder::default()
            .with_base_url(base_url)
            .with_credentials(credentials)
            .build()
    }
}
