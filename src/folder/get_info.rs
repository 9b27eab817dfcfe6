use crate::entry::ItemInfo;
use crate::request::ensure_dir_path;

impl crate::Client {
    /// Fetches the storage information of a folder, children included.
    ///
    /// Same endpoint as [`get_file_info`](crate::Client::get_file_info),
    /// after normalizing the path to carry a trailing separator.
    pub async fn get_folder_info(&self, repo: &str, path: &str) -> crate::Result<ItemInfo> {
        self.get_json(self.storage_url(repo, &ensure_dir_path(path)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Client, Credentials};

    const BODY: &str = r#"{
    "uri": "https://artifactory.example.com/api/storage/libs-release-local/org/acme",
    "repo": "libs-release-local",
    "path": "/org/acme",
    "created": "2023-03-14T13:54:13.507Z",
    "children": [
        { "uri": "/app-1.0.jar", "folder": false },
        { "uri": "/nightly", "folder": true }
    ]
}"#;

    #[tokio::test]
    async fn lists_children() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/api/storage/libs-release-local/org/acme/")
            .with_status(200)
            .with_body(BODY)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::basic_token("dG9rZW4=")).unwrap();
        let result = client
            .get_folder_info("libs-release-local", "org/acme")
            .await
            .unwrap();
        let children = result.children.unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name(), "app-1.0.jar");
        assert!(children[1].folder);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn trailing_separator_is_not_doubled() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/api/storage/libs-release-local/org/acme/")
            .with_status(200)
            .with_body(BODY)
            .expect(2)
            .create_async()
            .await;
        let client = Client::new(server.url(), Credentials::basic_token("dG9rZW4=")).unwrap();
        client
            .get_folder_info("libs-release-local", "org/acme")
            .await
            .unwrap();
        client
            .get_folder_info("libs-release-local", "org/acme/")
            .await
            .unwrap();
        m.assert_async().await;
    }
}
