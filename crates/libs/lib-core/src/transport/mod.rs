//! # Chat Transport
//!
//! The seam between the conversation core and an HTTP stack. Implementations
//! perform exactly one request per call: no retries, no timeout of their own.
//! Any non-2xx status or unparseable body is an error.
//!
//! - [`http::HttpTransport`] - reqwest, for native hosts (feature `http-client`)
//! - the browser widget ships a gloo-net implementation

use async_trait::async_trait;
use shared::{ChatRequest, ChatResponse};

use crate::error::Result;

#[cfg(feature = "http-client")]
pub mod http;

/// One request/response exchange with the chat backend.
///
/// Futures are not required to be `Send`: the widget runs on a single-threaded
/// event loop.
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

#[async_trait(?Send)]
impl<T: ChatTransport + ?Sized> ChatTransport for std::rc::Rc<T> {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        (**self).send(request).await
    }
}
