//! Task Commands
//!
//! HTTP binding for the task feed.

use async_trait::async_trait;

use super::TaskSource;
use crate::config::FeedConfig;
use crate::error::LoadError;
use crate::models::Task;

/// Fetches tasks with a single GET against the configured URL
#[derive(Debug, Clone)]
pub struct HttpTaskSource {
    client: reqwest::Client,
    url: String,
}

impl HttpTaskSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(reqwest::Client::new(), config.tasks_url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl TaskSource for HttpTaskSource {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, LoadError> {
        log::info!("[FEED] GET {}", self.url);
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = response.text().await?;
        parse_tasks(&body)
    }
}

/// Decode a feed body into tasks, keeping the feed order
pub fn parse_tasks(body: &str) -> Result<Vec<Task>, LoadError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn test_parse_feed_array() {
        let body = r#"[
            {"userId":1,"id":1,"title":"delectus aut autem","completed":false},
            {"userId":1,"id":2,"title":"quis ut nam facilis","completed":true}
        ]"#;

        let tasks = parse_tasks(body).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[1].title, "quis ut nam facilis");
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_tasks("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_object_body() {
        let err = parse_tasks(r#"{"error":"rate limited"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_parse_rejects_truncated_body() {
        let err = parse_tasks(r#"[{"id":1,"title":"Buy"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_parse_rejects_non_numeric_id() {
        let err = parse_tasks(r#"[{"id":"one","title":"Buy milk"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_parse_negative_and_large_ids() {
        let tasks = parse_tasks(r#"[{"id":-1,"title":"a"},{"id":5000000000,"title":"b"}]"#).unwrap();
        assert_eq!(tasks, vec![Task::new(-1, "a"), Task::new(5_000_000_000, "b")]);
    }

    // ========================
    // HTTP against a local one-shot server
    // ========================

    /// Answer a single request with `status_line` and `body`, return its URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/todos", addr)
    }

    /// Bypass any proxy from the environment so requests reach loopback
    fn source_for(url: String) -> HttpTaskSource {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpTaskSource::new(client, FeedConfig::new(url).tasks_url)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once("200 OK", r#"[{"userId":1,"id":1,"title":"Buy milk"},{"id":2,"title":"Walk dog"}]"#).await;

        let tasks = source_for(url).fetch_tasks().await.unwrap();
        assert_eq!(tasks, vec![Task::new(1, "Buy milk"), Task::new(2, "Walk dog")]);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_keeps_code() {
        let url = serve_once("503 Service Unavailable", "").await;

        let err = source_for(url).fetch_tasks().await.unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 503 }));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let url = serve_once("200 OK", "<html>maintenance</html>").await;

        let err = source_for(url).fetch_tasks().await.unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source_for(format!("http://{}/todos", addr)).fetch_tasks().await.unwrap_err();
        assert!(matches!(err, LoadError::Request(_)));
    }
}
