//! Local HTTP responder used by tests in place of the Open-Meteo servers.

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub(crate) struct MockServer {
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Request targets (path and query) received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Serves one canned `(status, body)` per connection, in order, repeating the last.
pub(crate) async fn serve(responses: Vec<(u16, String)>) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();
    tokio::spawn(async move {
        let mut served = 0usize;
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let (status, body) = responses[served.min(responses.len() - 1)].clone();
            served += 1;

            let mut buf = vec![0u8; 8192];
            let mut head = Vec::new();
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(len) => head.extend_from_slice(&buf[..len]),
                }
            }
            let head = String::from_utf8_lossy(&head);
            if let Some(target) = head.split_whitespace().nth(1) {
                if let Ok(mut seen) = seen.lock() {
                    seen.push(target.to_string());
                }
            }

            let reply = format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(reply.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });
    MockServer {
        base: format!("http://{}", addr),
        requests,
    }
}

pub(crate) fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// A single-location Open-Meteo response whose `key` block holds `rows` samples
/// of every variable. Variable `n` at row `r` has the value `n * 100 + r`.
pub(crate) fn response_body(
    key: &str,
    start: i64,
    interval: i64,
    rows: usize,
    variables: &[&str],
) -> String {
    let time: Vec<i64> = (0..rows as i64).map(|i| start + i * interval).collect();
    let mut block = serde_json::Map::new();
    block.insert("time".to_string(), serde_json::json!(time));
    for (n, variable) in variables.iter().enumerate() {
        let values: Vec<f64> = (0..rows).map(|r| (n * 100 + r) as f64).collect();
        block.insert(variable.to_string(), serde_json::json!(values));
    }

    let mut body = serde_json::Map::new();
    body.insert("latitude".to_string(), serde_json::json!(38.75));
    body.insert("longitude".to_string(), serde_json::json!(-90.44));
    body.insert("elevation".to_string(), serde_json::json!(165.0));
    body.insert("utc_offset_seconds".to_string(), serde_json::json!(-18000));
    body.insert("timezone".to_string(), serde_json::json!("America/Chicago"));
    body.insert("timezone_abbreviation".to_string(), serde_json::json!("CDT"));
    body.insert(key.to_string(), serde_json::Value::Object(block));
    serde_json::Value::Object(body).to_string()
}

/// A client pointed at `server`, caching into `cache_dir`, without retries.
pub(crate) async fn test_client(server: &MockServer, cache_dir: &std::path::Path) -> crate::OpenMeteo {
    crate::OpenMeteo::custom()
        .cache_folder(cache_dir.to_path_buf())
        .http_client(local_client())
        .retry_policy(crate::RetryPolicy::none())
        .forecast_url(server.url("/v1/forecast"))
        .archive_url(server.url("/v1/archive"))
        .call()
        .await
        .unwrap()
}
