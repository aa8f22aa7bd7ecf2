use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::trace;

use super::transport::{ApiRequest, ApiResponse, Transport, TransportError};

/// [`Transport`] over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("flora-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.http.request(request.method, &url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let res = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError(format!("request to {url} timed out"))
            } else {
                TransportError(e.to_string())
            }
        })?;
        let status = res.status();
        let text = res.text().await.map_err(|e| TransportError(e.to_string()))?;
        trace!(%status, bytes = text.len(), "Response body received");
        Ok(ApiResponse::new(status, ApiResponse::parse_body(&text)))
    }
}
