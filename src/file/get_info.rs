use crate::entry::ItemInfo;

impl crate::Client {
    /// Fetches the storage information of a file.
    ///
    /// Calls `GET /api/storage/{repo}/{path}` and succeeds only on a 200
    /// response, relaying the info payload as is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) when the request
    /// never reached the server, and
    /// [`Error::UnexpectedStatus`](crate::Error::UnexpectedStatus) for any
    /// status other than 200.
    pub async fn get_file_info(&self, repo: &str, path: &str) -> crate::Result<ItemInfo> {
        self.get_json(self.storage_url(repo, path)).await
    }
}
