//! Widget utilities

pub mod constants;
pub mod host;
pub mod url;
