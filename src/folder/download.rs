use std::path::Path;

use super::ArchiveType;
use crate::error::Error;
use crate::file::download::destination_dir_exists;

impl crate::Client {
    /// Downloads a folder as an archive to a local destination.
    ///
    /// Fails with [`Error::DestinationDirMissing`] before any network call
    /// when the destination's parent directory does not exist. Issues
    /// `GET /api/archive/download/{repo}/{path}?archiveType={type}` and
    /// streams the 200 body to the destination.
    pub async fn download_folder(
        &self,
        repo: &str,
        path: &str,
        destination: impl AsRef<Path>,
        archive_type: ArchiveType,
    ) -> crate::Result<String> {
        let destination = destination.as_ref();
        if !destination_dir_exists(destination) {
            return Err(Error::DestinationDirMissing(destination.to_path_buf()));
        }
        let res = self
            .get_stream(
                self.archive_url(repo, path),
                &[("archiveType", archive_type.as_str())],
            )
            .await?;
        self.stream_to_file(res, destination).await?;
        Ok(format!(
            "downloaded {repo}/{path} as {} to {}",
            archive_type.as_str(),
            destination.display()
        ))
    }
}
