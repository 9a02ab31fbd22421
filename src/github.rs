use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::{
    error::{TemplateError, Result},
    source::TemplateSource,
    types::{FileContent, ListingEntry},
};

/// GitHub-backed template source
///
/// Lists directories through the GitHub contents API and downloads
/// templates from the `download_url` each listing entry carries
/// (raw.githubusercontent.com for public repositories).
#[derive(Clone)]
pub struct GitHubSource {
    client: Client,
    user_agent: String,
}

impl GitHubSource {
    /// Create a new GitHub source
    ///
    /// GitHub refuses API requests without a `User-Agent`, so one is
    /// always set on the underlying client.
    pub fn new(user_agent: &str) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            user_agent: user_agent.to_string(),
        }
    }

    /// Check if a status is a rate limit response
    fn is_rate_limit_error(&self, status: StatusCode) -> bool {
        status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS
    }

    /// Turn a non-success response into the matching error
    async fn status_error(&self, url: &str, response: Response) -> TemplateError {
        match response.status() {
            StatusCode::NOT_FOUND => TemplateError::NotFound {
                url: url.to_string(),
            },
            status if self.is_rate_limit_error(status) => {
                let message = response.text().await.unwrap_or_else(|_| {
                    "GitHub API rate limit exceeded".to_string()
                });
                TemplateError::RateLimited { message }
            }
            status => TemplateError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            },
        }
    }
}

#[async_trait]
impl TemplateSource for GitHubSource {
    async fn list_directory(&self, endpoint: &str) -> Result<Vec<ListingEntry>> {
        debug!(endpoint, "requesting directory listing");

        let response = self.client
            .get(endpoint)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(self.status_error(endpoint, response).await);
        }

        // Decode from the full body so malformed JSON surfaces as a serde error
        let body = response.bytes().await?;
        let entries: Vec<ListingEntry> = serde_json::from_slice(&body)?;
        debug!(endpoint, count = entries.len(), "decoded directory listing");
        Ok(entries)
    }

    async fn fetch_file(&self, url: &str) -> Result<FileContent> {
        debug!(url, "downloading template");

        let response = self.client.get(url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(self.status_error(url, response).await);
        }

        let content = response.bytes().await?;
        Ok(FileContent { content })
    }

    fn identifier(&self) -> String {
        format!("github ({})", self.user_agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryType;

    fn source() -> GitHubSource {
        GitHubSource::new("gitignore-resolver-tests")
    }

    #[tokio::test]
    async fn test_list_directory() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/contents")
            .match_header("user-agent", "gitignore-resolver-tests")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"name":"Go.gitignore","type":"file","path":"Go.gitignore",
                     "download_url":"https://raw.example/Go.gitignore"},
                    {"name":"Global","type":"dir","path":"Global","download_url":null}]"#,
            )
            .create_async()
            .await;

        let entries = source()
            .list_directory(&format!("{}/contents", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Go.gitignore");
        assert_eq!(entries[1].entry_type, EntryType::Dir);
    }

    #[tokio::test]
    async fn test_list_directory_malformed_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/contents")
            .with_status(200)
            .with_body("{\"not\": \"a list\"}")
            .create_async()
            .await;

        let result = source()
            .list_directory(&format!("{}/contents", server.url()))
            .await;

        assert!(matches!(result, Err(TemplateError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/contents")
            .with_status(403)
            .with_body("API rate limit exceeded")
            .create_async()
            .await;

        let result = source()
            .list_directory(&format!("{}/contents", server.url()))
            .await;

        match result {
            Err(TemplateError::RateLimited { message }) => {
                assert_eq!(message, "API rate limit exceeded");
            }
            other => panic!("Expected RateLimited error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_file() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/raw/Go.gitignore")
            .with_status(200)
            .with_body("*.exe\n")
            .create_async()
            .await;

        let url = format!("{}/raw/Go.gitignore", server.url());
        let file = source().fetch_file(&url).await.unwrap();

        assert_eq!(file.content, bytes::Bytes::from("*.exe\n"));
    }

    #[tokio::test]
    async fn test_fetch_file_status_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;
        let _mock = server
            .mock("GET", "/broken")
            .with_status(500)
            .create_async()
            .await;

        let missing = format!("{}/missing", server.url());
        match source().fetch_file(&missing).await {
            Err(TemplateError::NotFound { url }) => assert_eq!(url, missing),
            other => panic!("Expected NotFound error, got {:?}", other),
        }

        assert!(matches!(
            source().fetch_file(&format!("{}/broken", server.url())).await,
            Err(TemplateError::UnexpectedStatus { status: 500, .. })
        ));
    }
}
