use reqwest::Client as HttpClient;
use super::models::{ApiError, DataPoint};
use tracing::{debug, warn};

/// Anything that can produce the fuel price history
pub trait PriceSource {
    async fn get_prices(&self) -> Result<Vec<DataPoint>, ApiError>;
}

/// Client for the tanka.se price history endpoint
pub struct TankaClient {
    http_client: HttpClient,
    url: String,
}

impl TankaClient {
    pub const DEFAULT_URL: &'static str = "https://tanka.se/api/prices";

    /// Create a client against a custom endpoint
    pub fn with_url(url: String) -> Self {
        Self::with_http_client(url, HttpClient::new())
    }

    /// Create a client with a preconfigured HTTP client (for testing)
    pub fn with_http_client(url: String, http_client: HttpClient) -> Self {
        Self { http_client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PriceSource for TankaClient {
    /// GET /api/prices
    ///
    /// # Returns
    /// * `Ok(Vec<DataPoint>)` - Rows in the order the server sent them
    /// * `Err(ApiError)` - Transport or decoding failure
    async fn get_prices(&self) -> Result<Vec<DataPoint>, ApiError> {
        debug!("GET {}", self.url);

        let response = self.http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Request failed: {}", e)))?;

        // The body is decoded whatever the status; an error page fails decoding
        let status = response.status();
        if !status.is_success() {
            warn!("{} answered with status {}", self.url, status);
        }

        response
            .json::<Vec<DataPoint>>()
            .await
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse response ({}): {}", status, e)))
    }
}

/// Fetch the price history, treating any failure as "no data"
///
/// The error is logged and dropped; callers always get a (possibly empty)
/// sequence to chart.
pub async fn fetch_or_empty<S: PriceSource>(source: &S) -> Vec<DataPoint> {
    match source.get_prices().await {
        Ok(points) => {
            debug!("Fetched {} price rows", points.len());
            points
        }
        Err(e) => {
            warn!("Failed to fetch price history, charting no data: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    struct FailingSource;

    impl PriceSource for FailingSource {
        async fn get_prices(&self) -> Result<Vec<DataPoint>, ApiError> {
            Err(ApiError::Request("connection refused".to_string()))
        }
    }

    /// Serve exactly one canned HTTP response on a local port
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
        let addr = listener.local_addr().expect("no local addr");

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}/api/prices", addr)
    }

    fn local_client(url: String) -> TankaClient {
        let http_client = HttpClient::builder()
            .no_proxy()
            .build()
            .expect("client build failed");
        TankaClient::with_http_client(url, http_client)
    }

    #[test]
    fn test_default_url() {
        let client = TankaClient::with_url(TankaClient::DEFAULT_URL.to_string());
        assert_eq!(client.url(), "https://tanka.se/api/prices");
    }

    #[tokio::test]
    async fn test_fetch_or_empty_swallows_errors() {
        let points = fetch_or_empty(&FailingSource).await;
        assert!(points.is_empty());
    }

    #[tokio::test]
    async fn test_get_prices_decodes_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"date":"2023-01-01","95":18.5,"e85":15.2,"diesel":19.9,"hvo100":20.1},{"date":"2023-01-02","95":18.7,"e85":15.1,"diesel":20.0,"hvo100":20.3}]"#,
        )
        .await;

        let points = local_client(url).get_prices().await.expect("fetch failed");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, "2023-01-01");
        assert_eq!(points[1].petrol95, 18.7);
    }

    #[tokio::test]
    async fn test_error_status_without_json_is_a_decode_error() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable", "down").await;

        let err = local_client(url).get_prices().await.unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_error_status_with_json_body_still_decodes() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found",
            r#"[{"date":"2023-01-01","95":18.5,"e85":15.2,"diesel":19.9,"hvo100":20.1}]"#,
        )
        .await;

        let points = fetch_or_empty(&local_client(url)).await;
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].diesel, 19.9);
    }

    #[tokio::test]
    async fn test_get_prices_rejects_malformed_json() {
        let url = serve_once("HTTP/1.1 200 OK", "<html>not json</html>").await;

        let client = local_client(url);
        let err = client.get_prices().await.unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_no_data() {
        // Grab a free port, then close it so the connection is refused
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
            listener.local_addr().expect("no local addr")
        };

        let client = local_client(format!("http://{}/api/prices", addr));
        assert!(matches!(client.get_prices().await, Err(ApiError::Request(_))));
        assert!(fetch_or_empty(&client).await.is_empty());
    }
}
