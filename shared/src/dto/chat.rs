//! # Chat Data Transfer Objects
//!
//! Request and response structures for the `POST /api/chat` endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque conversation identifier issued by the backend.
///
/// The backend is free to issue any JSON value as the id; whichever shape it
/// sends is kept as-is and echoed back on the next request. Integers and
/// strings get their own variants, anything else is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionId {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionId::Number(n) => write!(f, "{}", n),
            SessionId::Text(s) => f.write_str(s),
            SessionId::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for SessionId {
    fn from(id: i64) -> Self {
        SessionId::Number(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        SessionId::Text(id.to_string())
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        SessionId::Text(id)
    }
}

/// One user turn sent to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Message text exactly as typed (not trimmed)
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    /// Page text the user highlighted before asking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_text: Option<String>,
    /// Chapter/page scope for retrieval, e.g. `module-1/nodes`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_slug: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_id: None,
            selected_text: None,
            chapter_slug: None,
        }
    }
}

/// Successful answer from the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    pub response: String,
    /// Citation slugs in the order the backend ranked them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}
