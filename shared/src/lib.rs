//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the tutor clients (browser widget and
//! terminal host) and the external chat backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::chat`]**: Chat exchange request/response and the opaque session id
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_source_label`]**: Render a citation slug for display
//!   - **[`utils::selection_preview`]**: Truncated preview of captured selection text
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//!
//! ## Usage in a Client
//!
//! ```rust,ignore
//! use shared::dto::chat::{ChatRequest, ChatResponse};
//! use shared::utils::format_source_label;
//!
//! let request = ChatRequest::new("What is a node?");
//!
//! let response: ChatResponse = reqwest::Client::new()
//!     .post("http://localhost:8000/api/chat")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//!
//! for source in response.sources.unwrap_or_default() {
//!     println!("{}", format_source_label(&source));
//! }
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
