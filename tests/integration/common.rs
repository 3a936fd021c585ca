//! Shared test fixtures

use async_trait::async_trait;
use ratio_signal::feed::{PricePair, PriceSource, StaticPriceSource};
use ratio_signal::notify::{Notifier, NotifyError};
use ratio_signal::runner::Runner;
use ratio_signal::signal::SignalEngine;
use ratio_signal::state::JsonFileStore;
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Notifier that keeps every message it was asked to send
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records messages but reports every delivery as failed
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(text.to_string());
        if self.fail {
            let err = reqwest::Client::new()
                .get("not a url")
                .build()
                .unwrap_err();
            return Err(NotifyError::Http(err));
        }
        Ok(())
    }
}

pub fn prices(xau: Decimal, xag: Decimal) -> StaticPriceSource {
    StaticPriceSource::new(PricePair::new(xau, xag).unwrap())
}

pub fn runner(
    source: impl PriceSource + 'static,
    notifier: &RecordingNotifier,
    state_path: &Path,
) -> Runner {
    Runner::new(
        Box::new(source),
        Box::new(notifier.clone()),
        Box::new(JsonFileStore::new(state_path)),
        SignalEngine::default(),
    )
}

/// Serve one canned HTTP response on a local port; the handle yields the raw request
pub async fn serve_once(
    response: String,
) -> (std::net::SocketAddr, tokio::task::JoinHandle<String>) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        // Headers, then as much body as Content-Length announces
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request).to_lowercase();
            if let Some(end) = text.find("\r\n\r\n") {
                let body_len = text[..end]
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if request.len() >= end + 4 + body_len {
                    break;
                }
            }
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (addr, handle)
}

/// Minimal HTTP/1.1 response with a JSON body
pub fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )
}
