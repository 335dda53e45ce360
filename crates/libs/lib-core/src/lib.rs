//! # Core Library
//!
//! The client-side conversational core of the docs tutor: session state, the
//! single-flight conversation client, selection capture and configuration.
//!
//! Nothing in here touches the DOM or a particular HTTP stack. Hosts plug in a
//! [`transport::ChatTransport`] and a [`conversation::SessionHandle`]; the browser
//! widget uses gloo-net and Leptos signals, the terminal host uses reqwest and a
//! `RefCell`.

pub mod config;
pub mod conversation;
pub mod error;
pub mod model;
pub mod selection;
pub mod transport;

// Re-export commonly used types
pub use config::WidgetConfig;
pub use conversation::{ConversationClient, SendOutcome, SessionHandle};
pub use error::{AppError, Result};
pub use model::{PanelState, PendingExchange, Role, Session, Turn};
pub use selection::{capture_selection, SelectionObserver, SelectionSource};
pub use transport::ChatTransport;

#[cfg(feature = "http-client")]
pub use transport::http::HttpTransport;
