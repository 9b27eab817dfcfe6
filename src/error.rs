//! The errors returned by the client operations.

use std::path::PathBuf;

/// All the possible errors returned by the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection, DNS, or TLS failure before a response was received.
    #[error("transport failure")]
    Transport(#[source] reqwest::Error),
    /// A response was received but its status was outside the success set
    /// for the operation. Carries the response body, parsed when possible,
    /// and the requested URL to aid diagnosis.
    #[error("unexpected status {status} from {url}: {message}")]
    UnexpectedStatus {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
        url: String,
    },
    /// The local upload source does not exist. Checked before any network
    /// call.
    #[error("upload source not found: {0}")]
    SourceNotFound(PathBuf),
    /// The parent directory of the download destination does not exist.
    /// Checked before any network call.
    #[error("destination directory missing for {0}")]
    DestinationDirMissing(PathBuf),
    /// The remote path already exists and the upload was not forced. No
    /// write was issued.
    #[error("{repo}/{path} already exists and upload was not forced")]
    AlreadyExists { repo: String, path: String },
    /// The digest of the downloaded file does not match the server-reported
    /// one. The file is left on disk.
    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
    /// The server reported no md5 to verify against.
    #[error("server reported no md5 checksum")]
    ChecksumMissing,
    /// Unable to decode a success response body.
    #[error("unable to decode the response body")]
    ResponseFormat(#[source] serde_json::Error),
    /// Error while writing a downloaded file to disk.
    #[error("unable to write the downloaded file")]
    Download(#[source] std::io::Error),
    /// Error while reading a local upload source.
    #[error("unable to read the upload source")]
    Upload(#[source] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

impl Error {
    /// The HTTP status code carried by [`Error::UnexpectedStatus`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
