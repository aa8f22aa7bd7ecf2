use http::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use super::envelope::{decode, unwrap_envelope};
use super::error::ApiError;
use super::transport::{ApiRequest, Transport};
use crate::session::SessionStore;

/// Authenticated access to the API.
///
/// Attaches the session's bearer token to every request. A 401 clears the
/// session before [`ApiError::Unauthorized`] is returned.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: Arc<SessionStore>,
}

impl ApiClient {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, session: Arc<SessionStore>) -> Self {
        Self { transport, session }
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(Method::GET, path, None).await?;
        decode(body)
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_json(Method::PUT, path, body).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_json(Method::PATCH, path, body).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let body = self.send(Method::DELETE, path, None).await?;
        unwrap_envelope(body).map(drop)
    }

    /// Write calls only check for rejection; the payload is ignored since
    /// screens refetch after every write.
    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.send(method, path, Some(body)).await?;
        unwrap_envelope(response).map(drop)
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        let request = ApiRequest {
            method: method.clone(),
            path: path.to_string(),
            body,
            bearer: self.session.token().await,
        };
        debug!(%method, path, "API request");

        let response = self.transport.execute(request).await.map_err(|e| {
            warn!(%method, path, "No response from server: {}", e);
            ApiError::Network(e.0)
        })?;

        if response.status.is_success() {
            debug!(%method, path, status = response.status.as_u16(), "API response");
            return Ok(response.body);
        }
        if response.status == StatusCode::UNAUTHORIZED {
            self.session.invalidate().await;
        }
        let err = ApiError::from_status(response.status, &response.body);
        warn!(%method, path, status = response.status.as_u16(), "API call failed: {}", err);
        Err(err)
    }
}
