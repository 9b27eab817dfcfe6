use super::UploadSource;
use crate::entry::CreatedEntry;
use crate::error::Error;
use crate::request::expect_status;

impl crate::Client {
    /// Uploads a file to a remote path.
    ///
    /// The source is either a local file, read from disk, or a remote URL
    /// whose response body is streamed through. A local source that does not
    /// exist fails with [`Error::SourceNotFound`] before any network call.
    ///
    /// Unless `force` is set, the remote path is checked first and an
    /// existing item fails the upload with [`Error::AlreadyExists`] without
    /// issuing any write.
    ///
    /// The content is sent as `PUT /{repo}/{path}` and succeeds only on a
    /// 201 response, relaying the creation metadata.
    pub async fn upload_file(
        &self,
        repo: &str,
        path: &str,
        source: impl Into<UploadSource>,
        force: bool,
    ) -> crate::Result<CreatedEntry> {
        let source = source.into();
        if let UploadSource::Local(local) = &source {
            if !local.is_file() {
                return Err(Error::SourceNotFound(local.clone()));
            }
        }
        if !force && self.path_exists(repo, path).await? {
            return Err(Error::AlreadyExists {
                repo: repo.to_string(),
                path: path.to_string(),
            });
        }
        let body = match source {
            UploadSource::Local(local) => {
                let content = std::fs::read(&local).map_err(Error::Upload)?;
                reqwest::Body::from(bytes::Bytes::from(content))
            }
            UploadSource::Remote(url) => {
                tracing::debug!("fetching upload source from {url}");
                // The source URL is foreign, so no Authorization header here.
                let res = self.inner.get(&url).send().await?;
                let res = expect_status(res, reqwest::StatusCode::OK).await?;
                reqwest::Body::wrap_stream(res.bytes_stream())
            }
        };
        self.put_created(self.item_url(repo, path), body)
            .await
            .map(|entry| entry.unwrap_or_else(CreatedEntry::empty))
    }
}
