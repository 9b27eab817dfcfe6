use crate::entry::CreatedEntry;
use crate::request::ensure_dir_path;

impl crate::Client {
    /// Creates a folder.
    ///
    /// Issues `PUT /{repo}/{path}/` with an empty body and succeeds only on
    /// a 201 response. The server may answer with creation metadata or with
    /// no body at all.
    pub async fn create_folder(&self, repo: &str, path: &str) -> crate::Result<CreatedEntry> {
        self.put_created(self.item_url(repo, &ensure_dir_path(path)), reqwest::Body::from(""))
        .await
        .map(|entry| entry.unwrap_or_else(CreatedEntry::empty))
    }
}
