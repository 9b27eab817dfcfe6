impl crate::Client {
    /// Deletes a file.
    ///
    /// Issues `DELETE /{repo}/{path}` and succeeds only on a 204 response.
    pub async fn delete_file(&self, repo: &str, path: &str) -> crate::Result<()> {
        self.delete_no_content(self.item_url(repo, path)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Client, Credentials};

    #[tokio::test]
    async fn success() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/libs-release-local/org/acme/app-1.0.jar")
            .match_header("authorization", "Basic dG9rZW4=")
            .with_status(204)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::basic_token("dG9rZW4=")).unwrap();
        client
            .delete_file("libs-release-local", "org/acme/app-1.0.jar")
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn missing_item_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/libs-release-local/org/acme/app-1.0.jar")
            .with_status(404)
            .with_body(r#"{"errors":[{"status":404,"message":"Unable to find item"}]}"#)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::basic_token("dG9rZW4=")).unwrap();
        let error = client
            .delete_file("libs-release-local", "org/acme/app-1.0.jar")
            .await
            .unwrap_err();
        assert_eq!(error.status(), Some(404));
        m.assert_async().await;
    }
}
