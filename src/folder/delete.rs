use crate::request::ensure_dir_path;

impl crate::Client {
    /// Deletes a folder and everything under it.
    ///
    /// Same delete operation as [`delete_file`](crate::Client::delete_file),
    /// after normalizing the path to carry a trailing separator.
    pub async fn delete_folder(&self, repo: &str, path: &str) -> crate::Result<()> {
        self.delete_no_content(self.item_url(repo, &ensure_dir_path(path)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Client, Credentials};

    #[tokio::test]
    async fn trailing_separator_is_not_doubled() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/libs-release-local/org/acme/nightly/")
            .with_status(204)
            .expect(2)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::basic_token("dG9rZW4=")).unwrap();
        client
            .delete_folder("libs-release-local", "org/acme/nightly")
            .await
            .unwrap();
        client
            .delete_folder("libs-release-local", "org/acme/nightly/")
            .await
            .unwrap();
        m.assert_async().await;
    }
}
