//! # HTTP Transport
//!
//! reqwest-backed [`ChatTransport`] for native hosts.

use async_trait::async_trait;
use reqwest::Client;
use shared::{ChatRequest, ChatResponse};

use super::ChatTransport;
use crate::config::WidgetConfig;
use crate::error::{AppError, Result};

/// POSTs chat requests as JSON to `{api_url}/api/chat`.
///
/// The underlying client keeps a connection pool, so one transport should be
/// shared for the lifetime of the host.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport for the configured backend.
    ///
    /// No request timeout is set: a hung backend leaves the exchange pending
    /// until the connection itself fails.
    ///
    /// # Errors
    ///
    /// [`AppError::Config`] if the TLS backend cannot be initialised.
    pub fn new(config: &WidgetConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("docs-tutor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &WidgetConfig) -> Self {
        Self {
            client,
            endpoint: config.chat_endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpTransport {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Chat network error");
                AppError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Chat request rejected");
            return Err(AppError::Status(status.as_u16()));
        }

        // Read the body first so a malformed payload is reported as a decode
        // failure rather than a transport one.
        let body = response.bytes().await?;
        let parsed = serde_json::from_slice::<ChatResponse>(&body).map_err(|e| {
            tracing::error!(error = %e, "Chat response parse error");
            AppError::from(e)
        })?;

        tracing::debug!(duration_ms = start.elapsed().as_millis() as u64, "Chat response received");
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_targets_chat_endpoint() {
        let transport = HttpTransport::new(&WidgetConfig::new("http://localhost:9000/")).unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:9000/api/chat");
    }
}
