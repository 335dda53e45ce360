//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the chat backend.
//!
//! ## Module Organization
//!
//! - [`chat`] - Chat exchange request, response and session identifier
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/chat
//! Content-Type: application/json
//!
//! {
//!   "message": "What is a node?",
//!   "selected_text": "A node is a process that performs computation.",
//!   "chapter_slug": "module-1/nodes"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "session_id": 42,
//!   "response": "A node is...",
//!   "sources": ["module-1/nodes"]
//! }
//! ```

pub mod chat;

pub use chat::*;
