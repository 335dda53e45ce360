//! UI Components

pub mod chat_panel;
pub mod chat_widget;
pub mod message;

pub use chat_panel::ChatPanel;
pub use chat_widget::ChatWidget;
pub use message::{TurnBubble, TypingIndicator, WelcomeMessage};
