//! Operations on folders: info listing, creation, deletion, archive
//! download.
//!
//! Remote folder paths always carry a trailing separator before being
//! templated into a URL; every operation here normalizes its input, so
//! calling with or without the separator yields the identical request.

pub mod create;
pub mod delete;
pub mod download;
pub mod get_info;

/// The archive format served by the folder download endpoint.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ArchiveType {
    #[default]
    Zip,
    Tar,
    TarGz,
    Tgz,
}

impl ArchiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Tar => "tar",
            Self::TarGz => "tar.gz",
            Self::Tgz => "tgz",
        }
    }
}
