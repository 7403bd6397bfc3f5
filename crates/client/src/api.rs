//! HTTP client for the backend collections.
//!
//! Every entity lives under `{base_url}/{collection}`: `GET` lists,
//! `POST` creates, `DELETE /{id}` removes. Failures are reported once;
//! there are no retries.

use cineweb_core::models::{Deletable, Resource};

use crate::config::ClientConfig;

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct CinemaApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never got an HTTP response (DNS, refused, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status code.
    #[error("Backend returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A success response whose body did not match the expected shape.
    #[error("Failed to decode backend response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Status code of a server error; `None` for transport and decode failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

impl CinemaApi {
    /// Create a client for the backend at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Build a client with the configured base URL and request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /{collection}`: every record, in backend order.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        tracing::debug!(collection = R::PATH, "Listing records");

        let response = self.client.get(self.collection_url::<R>()).send().await?;

        Self::parse_response(response).await
    }

    /// `POST /{collection}` with a JSON body; returns the stored record.
    pub async fn create<R: Resource>(&self, payload: &R::New) -> Result<R, ApiError> {
        tracing::debug!(collection = R::PATH, "Creating record");

        let response = self
            .client
            .post(self.collection_url::<R>())
            .json(payload)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `DELETE /{collection}/{id}`. The response body is ignored.
    pub async fn delete<R: Deletable>(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!(collection = R::PATH, id, "Deleting record");

        let response = self
            .client
            .delete(format!("{}/{}", self.collection_url::<R>(), id))
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    fn collection_url<R: Resource>(&self) -> String {
        format!("{}/{}", self.base_url, R::PATH)
    }

    /// Pass a success response through; turn anything else into
    /// [`ApiError::Status`] carrying the body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
