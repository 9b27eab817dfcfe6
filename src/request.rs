//! Endpoint URL builders and the request helpers shared by every operation.
//!
//! Each endpoint of the REST API gets its own builder function taking
//! structured parameters and returning a concrete URL, so there is no
//! stringly-typed template table to keep in sync with the call sites.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};

use crate::error::Error;

/// Normalizes a remote folder path to carry exactly one trailing separator.
pub(crate) fn ensure_dir_path(path: &str) -> String {
    format!("{}/", path.trim_end_matches('/'))
}

/// Remote paths are joined onto `{base}/{repo}`, so a leading separator
/// would produce a double slash in the URL.
fn trim_path(path: &str) -> &str {
    path.trim_start_matches('/')
}

impl crate::Client {
    /// `{base}/api/storage/{repo}/{path}` — file and folder info.
    pub(crate) fn storage_url(&self, repo: &str, path: &str) -> String {
        format!("{}/api/storage/{}/{}", self.base_url, repo, trim_path(path))
    }

    /// `{base}/{repo}/{path}` — existence check, upload, download, create,
    /// delete.
    pub(crate) fn item_url(&self, repo: &str, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, repo, trim_path(path))
    }

    /// `{base}/api/archive/download/{repo}/{path}` — folder archive
    /// download; the archive type goes in the `archiveType` query parameter.
    pub(crate) fn archive_url(&self, repo: &str, path: &str) -> String {
        format!(
            "{}/api/archive/download/{}/{}",
            self.base_url,
            repo,
            trim_path(path)
        )
    }

    /// `{base}/api/move/{srcRepo}/{srcPath}` — item move; the destination
    /// goes in the `to` query parameter, `dry=1` when validating only.
    pub(crate) fn move_url(&self, src_repo: &str, src_path: &str) -> String {
        format!(
            "{}/api/move/{}/{}",
            self.base_url,
            src_repo,
            trim_path(src_path)
        )
    }
}

impl crate::Client {
    pub(crate) fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let req = self.inner.request(method, url);
        match self.credentials.header_value() {
            Some(value) => req.header(AUTHORIZATION, value),
            None => req,
        }
    }

    /// GET expecting 200 with a JSON body.
    #[tracing::instrument(name = "get", skip(self))]
    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> crate::Result<T> {
        let res = self.request(Method::GET, &url).send().await?;
        let res = expect_status(res, StatusCode::OK).await?;
        read_json(res).await
    }

    /// GET expecting 200, leaving the body to be streamed by the caller.
    #[tracing::instrument(name = "get", skip(self, query))]
    pub(crate) async fn get_stream(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> crate::Result<reqwest::Response> {
        let res = self
            .request(Method::GET, &url)
            .query(query)
            .send()
            .await?;
        expect_status(res, StatusCode::OK).await
    }

    /// HEAD, returning the raw status for the caller to interpret.
    #[tracing::instrument(name = "head", skip(self))]
    pub(crate) async fn head_status(&self, url: String) -> crate::Result<StatusCode> {
        let res = self.request(Method::HEAD, &url).send().await?;
        tracing::debug!("responded with status {:?}", res.status());
        Ok(res.status())
    }

    /// PUT expecting 201; the JSON body is optional on the wire.
    #[tracing::instrument(name = "put", skip(self, body))]
    pub(crate) async fn put_created<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        body: reqwest::Body,
    ) -> crate::Result<Option<T>> {
        let res = self.request(Method::PUT, &url).body(body).send().await?;
        let res = expect_status(res, StatusCode::CREATED).await?;
        read_optional_json(res).await
    }

    /// DELETE expecting 204.
    #[tracing::instrument(name = "delete", skip(self))]
    pub(crate) async fn delete_no_content(&self, url: String) -> crate::Result<()> {
        let res = self.request(Method::DELETE, &url).send().await?;
        expect_status(res, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    /// POST expecting 200; the JSON body is optional on the wire.
    #[tracing::instrument(name = "post", skip(self, query))]
    pub(crate) async fn post_ok<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> crate::Result<Option<T>> {
        let res = self
            .request(Method::POST, &url)
            .query(query)
            .send()
            .await?;
        let res = expect_status(res, StatusCode::OK).await?;
        read_optional_json(res).await
    }
}

/// Passes the response through when its status matches, otherwise turns it
/// into an [`Error::UnexpectedStatus`] carrying the body and the URL.
pub(crate) async fn expect_status(
    res: reqwest::Response,
    expected: StatusCode,
) -> crate::Result<reqwest::Response> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    if status == expected {
        return Ok(res);
    }
    let url = res.url().to_string();
    let raw = res.text().await.unwrap_or_default();
    let body: Option<serde_json::Value> = serde_json::from_str(&raw).ok();
    let message = body
        .as_ref()
        .and_then(server_message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        });
    Err(Error::UnexpectedStatus {
        status: status.as_u16(),
        message,
        body,
        url,
    })
}

/// Error bodies look like `{"errors":[{"status":404,"message":"..."}]}`.
fn server_message(body: &serde_json::Value) -> Option<String> {
    body.get("errors")?
        .get(0)?
        .get("message")?
        .as_str()
        .map(String::from)
}

async fn read_json<T: serde::de::DeserializeOwned>(res: reqwest::Response) -> crate::Result<T> {
    let bytes = res.bytes().await?;
    serde_json::from_slice(&bytes).map_err(Error::ResponseFormat)
}

async fn read_optional_json<T: serde::de::DeserializeOwned>(
    res: reqwest::Response,
) -> crate::Result<Option<T>> {
    let bytes = res.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(Error::ResponseFormat)
}

#[cfg(test)]
mod tests {
    use super::ensure_dir_path;
    use crate::{Client, Credentials};

    fn client() -> Client {
        Client::new(
            "https://artifactory.example.com",
            Credentials::basic_token("dG9rZW4="),
        )
        .unwrap()
    }

    #[test]
    fn dir_path_normalization_is_idempotent() {
        assert_eq!(ensure_dir_path("a/b"), "a/b/");
        assert_eq!(ensure_dir_path("a/b/"), "a/b/");
        assert_eq!(ensure_dir_path(&ensure_dir_path("a/b")), "a/b/");
    }

    #[test]
    fn urls_never_carry_double_slashes() {
        let client = client();
        assert_eq!(
            client.storage_url("libs-release", "/org/acme/app.jar"),
            "https://artifactory.example.com/api/storage/libs-release/org/acme/app.jar"
        );
        assert_eq!(
            client.item_url("libs-release", "org/acme/app.jar"),
            "https://artifactory.example.com/libs-release/org/acme/app.jar"
        );
        assert_eq!(
            client.archive_url("libs-release", "org/acme"),
            "https://artifactory.example.com/api/archive/download/libs-release/org/acme"
        );
        assert_eq!(
            client.move_url("libs-release", "/org/acme/app.jar"),
            "https://artifactory.example.com/api/move/libs-release/org/acme/app.jar"
        );
    }
}
