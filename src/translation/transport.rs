//! HTTP transport used by the translation client.

use async_trait::async_trait;
use reqwest::{Client, Method};

use super::error::TransportError;

/// Sends a request and returns the raw response body.
///
/// Parameters always travel on the query string, whatever the method.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn request(&self, method: Method, url: &str, query: &str)
    -> Result<String, TransportError>;
}

/// Default transport backed by [`reqwest`].
///
/// Non-success statuses are reported as [`TransportError::Status`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing client, e.g. one configured with a timeout or proxy.
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        query: &str,
    ) -> Result<String, TransportError> {
        let full_url = if query.is_empty() {
            url.to_string()
        } else {
            format!("{url}?{query}")
        };

        let response = self
            .client
            .request(method.clone(), &full_url)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                method: method.to_string(),
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::TranslationClient;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const ACCESS_KEY: &str = "HOHilKG4n7hzKc9xWRrZMfO5xvZpgcvBM1gCebf";

    fn transport() -> ReqwestTransport {
        ReqwestTransport::with_client(Client::builder().no_proxy().build().unwrap())
    }

    /// Accepts one connection, answers with `status` and `body`, and yields
    /// the request line that was received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();

            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();

            String::from_utf8_lossy(&head)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (base_url, handle)
    }

    #[tokio::test]
    async fn test_post_carries_query_on_url() {
        let (base_url, server) = serve_once("200 OK", r#"{"data":{}}"#).await;

        let body = transport()
            .request(Method::POST, &format!("{base_url}/v2"), "q=a+b&key=k")
            .await
            .unwrap();

        assert_eq!(body, r#"{"data":{}}"#);
        assert_eq!(server.await.unwrap(), "POST /v2?q=a+b&key=k HTTP/1.1");
    }

    #[tokio::test]
    async fn test_get_without_query() {
        let (base_url, server) = serve_once("200 OK", "{}").await;

        transport()
            .request(Method::GET, &format!("{base_url}/languages"), "")
            .await
            .unwrap();

        assert_eq!(server.await.unwrap(), "GET /languages HTTP/1.1");
    }

    #[tokio::test]
    async fn test_non_success_status_keeps_body() {
        let (base_url, server) = serve_once("400 Bad Request", r#"{"error":1}"#).await;
        let url = format!("{base_url}/v2");

        let err = transport()
            .request(Method::POST, &url, "key=secret&q=x")
            .await
            .unwrap_err();
        server.await.unwrap();

        match err {
            TransportError::Status {
                method,
                url: reported_url,
                status,
                body,
            } => {
                assert_eq!(method, "POST");
                assert_eq!(reported_url, url);
                assert_eq!(status, 400);
                assert_eq!(body, r#"{"error":1}"#);
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_client_reports_bad_status_as_translation_error() {
        let (base_url, server) = serve_once("400 Bad Request", r#"{"error":1}"#).await;
        let client = TranslationClient::with_transport(ACCESS_KEY, transport())
            .unwrap()
            .with_endpoint(base_url.as_str());

        let err = client
            .translate(["a b", "c"], "pt", None)
            .await
            .unwrap_err();

        assert_eq!(
            server.await.unwrap(),
            format!("POST /?q=a+b&q=c&key={ACCESS_KEY}&target=pt HTTP/1.1")
        );
        assert_eq!(err.code(), 4);
        let message = err.to_string();
        assert!(message.starts_with("Translation error: "));
        assert!(message.contains("`400` response: {\"error\":1}"));
        assert!(!message.contains(ACCESS_KEY));
    }

    #[tokio::test]
    async fn test_connection_failure_is_http_without_key() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/languages", listener.local_addr().unwrap());
        drop(listener);

        let err = transport()
            .request(Method::GET, &url, &format!("key={ACCESS_KEY}&target=pt"))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Http(_)));
        assert!(!err.to_string().contains(ACCESS_KEY));
    }
}
