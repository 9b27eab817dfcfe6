use reqwest::StatusCode;

use crate::error::Error;

impl crate::Client {
    /// Checks whether a remote path exists.
    ///
    /// Issues `HEAD /{repo}/{path}`: 200 means the item exists, 404 means it
    /// does not, and any other status is an error.
    ///
    /// ```rust,no_run
    /// # use artifactory::{Client, Credentials};
    /// # let client = Client::new("https://artifactory.example.com", Credentials::Anonymous).unwrap();
    /// # tokio_test::block_on(async {
    /// if client.path_exists("libs-release-local", "org/acme/app-1.0.jar").await.unwrap() {
    ///     println!("already deployed");
    /// }
    /// # })
    /// ```
    pub async fn path_exists(&self, repo: &str, path: &str) -> crate::Result<bool> {
        let url = self.item_url(repo, path);
        match self.head_status(url.clone()).await? {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            other => Err(Error::UnexpectedStatus {
                status: other.as_u16(),
                message: other
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
                body: None,
                url,
            }),
        }
    }
}
