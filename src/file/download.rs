use std::io::Write;
use std::path::Path;

use crate::error::Error;

/// The parent of a bare relative file name is the current directory.
pub(crate) fn destination_dir_exists(destination: &Path) -> bool {
    match destination.parent() {
        Some(parent) => parent.as_os_str().is_empty() || parent.is_dir(),
        None => false,
    }
}

impl crate::Client {
    pub(crate) async fn stream_to_file(
        &self,
        mut res: reqwest::Response,
        destination: &Path,
    ) -> crate::Result<()> {
        let mut file = std::fs::File::create(destination).map_err(Error::Download)?;
        while let Some(chunk) = res.chunk().await? {
            file.write_all(chunk.as_ref()).map_err(Error::Download)?;
        }
        file.flush().map_err(Error::Download)
    }

    /// Downloads a file to a local destination.
    ///
    /// Fails with [`Error::DestinationDirMissing`] before any network call
    /// when the destination's parent directory does not exist. Issues
    /// `GET /{repo}/{path}` and streams the 200 body to the destination.
    ///
    /// With `verify_checksum` set, the file's storage info is fetched after
    /// the write completes and an MD5 digest of the written file is compared
    /// to the server-reported one: a mismatch fails with
    /// [`Error::ChecksumMismatch`], leaving the file on disk. The returned
    /// message names the verified digest.
    pub async fn download_file(
        &self,
        repo: &str,
        path: &str,
        destination: impl AsRef<Path>,
        verify_checksum: bool,
    ) -> crate::Result<String> {
        let destination = destination.as_ref();
        if !destination_dir_exists(destination) {
            return Err(Error::DestinationDirMissing(destination.to_path_buf()));
        }
        let res = self.get_stream(self.item_url(repo, path), &[]).await?;
        self.stream_to_file(res, destination).await?;
        if !verify_checksum {
            return Ok(format!("downloaded {repo}/{path} to {}", destination.display()));
        }
        let info = self.get_file_info(repo, path).await?;
        let expected = info
            .checksums
            .and_then(|sums| sums.md5)
            .ok_or(Error::ChecksumMissing)?;
        let contents = std::fs::read(destination).map_err(Error::Download)?;
        let actual = format!("{:x}", md5::compute(&contents));
        if actual == expected {
            Ok(format!(
                "downloaded {repo}/{path} to {}, verified md5 {expected}",
                destination.display()
            ))
        } else {
            Err(Error::ChecksumMismatch { expected, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Client, Credentials};

    fn client(server: &mockito::Server) -> Client {
        Client::new(server.url(), Credentials::basic_token("dG9rZW4=")).unwrap()
    }

    #[tokio::test]
    async fn writes_the_body_to_disk() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/libs-release-local/org/acme/app-1.0.jar")
            .match_header("authorization", "Basic dG9rZW4=")
            .with_status(200)
            .with_body("artifact-content")
            .create_async()
            .await;
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("app-1.0.jar");
        client(&server)
            .download_file("libs-release-local", "org/acme/app-1.0.jar", &destination, false)
            .await
            .unwrap();
        assert_eq!(std::fs::read(&destination).unwrap(), b"artifact-content");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn missing_destination_dir_fails_before_any_request() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let error = client(&server)
            .download_file(
                "libs-release-local",
                "org/acme/app-1.0.jar",
                "/nonexistent/app-1.0.jar",
                false,
            )
            .await
            .unwrap_err();
        assert!(matches!(error, crate::Error::DestinationDirMissing(_)));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn verified_download_names_the_digest() {
        let mut server = mockito::Server::new_async().await;
        // md5("artifact-content")
        let digest = "95639c83887e2bc02c6809a0c2b97bb4";
        let get = server
            .mock("GET", "/libs-release-local/org/acme/app-1.0.jar")
            .with_status(200)
            .with_body("artifact-content")
            .create_async()
            .await;
        let info = server
            .mock("GET", "/api/storage/libs-release-local/org/acme/app-1.0.jar")
            .with_status(200)
            .with_body(format!(
                r#"{{"uri": "any", "checksums": {{"md5": "{digest}"}}}}"#
            ))
            .create_async()
            .await;
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("app-1.0.jar");
        let message = client(&server)
            .download_file("libs-release-local", "org/acme/app-1.0.jar", &destination, true)
            .await
            .unwrap();
        assert!(message.contains(digest));
        get.assert_async().await;
        info.assert_async().await;
    }

    #[tokio::test]
    async fn checksum_mismatch_leaves_the_file_on_disk() {
        let mut server = mockito::Server::new_async().await;
        let _get = server
            .mock("GET", "/libs-release-local/org/acme/app-1.0.jar")
            .with_status(200)
            .with_body("tampered-content")
            .create_async()
            .await;
        let _info = server
            .mock("GET", "/api/storage/libs-release-local/org/acme/app-1.0.jar")
            .with_status(200)
            .with_body(r#"{"uri": "any", "checksums": {"md5": "95639c83887e2bc02c6809a0c2b97bb4"}}"#)
            .create_async()
            .await;
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("app-1.0.jar");
        let error = client(&server)
            .download_file("libs-release-local", "org/acme/app-1.0.jar", &destination, true)
            .await
            .unwrap_err();
        match error {
            crate::Error::ChecksumMismatch { expected, actual } => {
                assert_eq!(expected, "95639c83887e2bc02c6809a0c2b97bb4");
                assert_ne!(expected, actual);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(std::fs::read(&destination).unwrap(), b"tampered-content");
    }

    #[tokio::test]
    async fn unexpected_status_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/libs-release-local/org/acme/app-1.0.jar")
            .with_status(404)
            .with_body(r#"{"errors":[{"status":404,"message":"Resource not found"}]}"#)
            .create_async()
            .await;
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("app-1.0.jar");
        let error = client(&server)
            .download_file("libs-release-local", "org/acme/app-1.0.jar", &destination, false)
            .await
            .unwrap_err();
        assert_eq!(error.status(), Some(404));
        assert!(!destination.exists());
        m.assert_async().await;
    }
}
