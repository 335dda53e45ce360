//! Browser services

pub mod chat;
pub mod selection;

pub use chat::FetchTransport;
pub use selection::SelectionListener;
