//! Browser transport for the chat endpoint (fetch via gloo-net)

use async_trait::async_trait;
use gloo_net::http::Request;
use lib_core::{AppError, ChatTransport, Result, WidgetConfig};
use shared::{ChatRequest, ChatResponse};

/// POSTs chat requests with `fetch`. No retries and no timeout: a hung
/// request keeps the panel busy until the browser settles it.
#[derive(Clone, Debug)]
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            endpoint: config.chat_endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ChatTransport for FetchTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| AppError::Network(format!("failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| {
                log::error!("Chat request to {} failed: {:?}", self.endpoint, e);
                AppError::Network(e.to_string())
            })?;

        if !response.ok() {
            log::warn!("Chat backend returned status {}", response.status());
            return Err(AppError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        serde_json::from_str::<ChatResponse>(&body).map_err(|e| {
            log::error!("Chat response is not valid JSON: {}", e);
            AppError::from(e)
        })
    }
}
