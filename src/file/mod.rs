//! Operations on individual files: info lookup, existence check, upload,
//! download, delete.

use std::path::{Path, PathBuf};

pub mod delete;
pub mod download;
pub mod exists;
pub mod get_info;
pub mod upload;

/// Where the content of an upload comes from.
#[derive(Clone, Debug)]
pub enum UploadSource {
    /// A file on the local file system. Must exist before the upload starts.
    Local(PathBuf),
    /// A URL whose response body is fetched and streamed through as the
    /// upload body.
    Remote(String),
}

impl UploadSource {
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local(path.into())
    }

    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote(url.into())
    }
}

impl From<PathBuf> for UploadSource {
    fn from(value: PathBuf) -> Self {
        Self::Local(value)
    }
}

impl From<&Path> for UploadSource {
    fn from(value: &Path) -> Self {
        Self::Local(value.to_path_buf())
    }
}
