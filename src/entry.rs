//! The payload structures returned by the storage endpoints.
//!
//! These are relayed to the caller without interpretation; the client itself
//! only reads [`Checksums::md5`] during verified downloads and
//! [`ItemInfo::children`] when moving folder contents.

/// Checksums reported by the server for a stored file.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Checksums {
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
}

/// A child entry of a folder, as listed by the storage-info endpoint.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct ChildEntry {
    /// Separator-prefixed name, relative to the parent folder.
    pub uri: String,
    pub folder: bool,
}

impl ChildEntry {
    /// The base name of the entry, without the leading separator.
    pub fn name(&self) -> &str {
        self.uri.trim_start_matches('/')
    }
}

/// Storage information for a file or a folder.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct ItemInfo {
    pub uri: String,
    pub repo: Option<String>,
    pub path: Option<String>,
    pub created: Option<String>,
    #[serde(rename = "createdBy")]
    pub created_by: Option<String>,
    #[serde(rename = "lastModified")]
    pub last_modified: Option<String>,
    #[serde(rename = "modifiedBy")]
    pub modified_by: Option<String>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
    #[serde(rename = "downloadUri")]
    pub download_uri: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
    /// Reported as a string on the wire; passed through uninterpreted.
    pub size: Option<String>,
    pub checksums: Option<Checksums>,
    #[serde(rename = "originalChecksums")]
    pub original_checksums: Option<Checksums>,
    /// Only present on folder info.
    pub children: Option<Vec<ChildEntry>>,
}

/// Metadata returned when an item is created on the server (upload or folder
/// creation). Folder creation frequently answers 201 with no body at all;
/// [`CreatedEntry::empty`] stands in for that case.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct CreatedEntry {
    pub uri: Option<String>,
    pub repo: Option<String>,
    pub path: Option<String>,
    pub created: Option<String>,
    #[serde(rename = "createdBy")]
    pub created_by: Option<String>,
    #[serde(rename = "downloadUri")]
    pub download_uri: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
    pub size: Option<String>,
    pub checksums: Option<Checksums>,
    #[serde(rename = "originalChecksums")]
    pub original_checksums: Option<Checksums>,
}

impl CreatedEntry {
    pub(crate) fn empty() -> Self {
        Self::default()
    }
}
