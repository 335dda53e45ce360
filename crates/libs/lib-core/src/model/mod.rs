//! # Conversation Model
//!
//! - [`turn`] - one user or assistant message
//! - [`session`] - the running conversation and its exchange bookkeeping
//! - [`panel`] - open/closed state of the chat panel

pub mod panel;
pub mod session;
pub mod turn;

pub use panel::PanelState;
pub use session::{PendingExchange, SendOutcome, Session};
pub use turn::{Role, Turn, APOLOGY_TEXT};
