//! # Widget Configuration
//!
//! Read-only inputs supplied by the host at mount time: the backend base URL and
//! an optional chapter/page identifier that scopes retrieval. The core never
//! mutates or persists them.
//!
//! Browser hosts build a [`WidgetConfig`] from the mount element; terminal hosts
//! use [`WidgetConfig::from_env`]:
//!
//! ```rust,no_run
//! use lib_core::config::WidgetConfig;
//!
//! let config = WidgetConfig::from_env()?;
//! println!("talking to {}", config.chat_endpoint());
//! # Ok::<(), lib_core::AppError>(())
//! ```

use std::env;

use crate::error::{AppError, Result};

/// Local development backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path of the chat endpoint below the API base URL.
pub const CHAT_PATH: &str = "/api/chat";

/// Environment variable holding the API base URL.
pub const ENV_API_URL: &str = "TUTOR_API_URL";

/// Environment variable holding the chapter slug.
pub const ENV_CHAPTER_SLUG: &str = "TUTOR_CHAPTER_SLUG";

/// Host-supplied configuration for one widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Backend base URL, e.g. `http://localhost:8000`
    pub api_url: String,

    /// Page or chapter the widget is mounted on, e.g. `module-1/nodes`
    pub chapter_slug: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            chapter_slug: None,
        }
    }
}

impl WidgetConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            chapter_slug: None,
        }
    }

    pub fn with_chapter_slug(mut self, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        self.chapter_slug = if slug.trim().is_empty() { None } else { Some(slug) };
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `TUTOR_API_URL` falls back to [`DEFAULT_API_URL`]; a blank
    /// `TUTOR_CHAPTER_SLUG` counts as unset.
    pub fn from_env() -> Result<Self> {
        let api_url = match env::var(ENV_API_URL) {
            Ok(url) => url,
            Err(env::VarError::NotPresent) => DEFAULT_API_URL.to_string(),
            Err(e) => return Err(AppError::Config(format!("{} is not valid unicode: {}", ENV_API_URL, e))),
        };

        let mut config = Self::new(api_url);
        if let Ok(slug) = env::var(ENV_CHAPTER_SLUG) {
            config = config.with_chapter_slug(slug);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(AppError::Config("API URL must not be empty".to_string()));
        }

        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or_else(|| AppError::Config(format!("API URL must start with http:// or https://, got {}", url)))?;

        if rest.trim_matches('/').is_empty() {
            return Err(AppError::Config(format!("API URL has no host: {}", url)));
        }

        Ok(())
    }

    /// Full URL of the chat endpoint.
    pub fn chat_endpoint(&self) -> String {
        format!("{}{}", self.api_url.trim().trim_end_matches('/'), CHAT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = WidgetConfig::default();
        assert_eq!(config.chat_endpoint(), "http://localhost:8000/api/chat");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chat_endpoint_trailing_slash() {
        let config = WidgetConfig::new("https://tutor.example.com/");
        assert_eq!(config.chat_endpoint(), "https://tutor.example.com/api/chat");
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(WidgetConfig::new("").validate().is_err());
        assert!(WidgetConfig::new("localhost:8000").validate().is_err());
        assert!(WidgetConfig::new("http://").validate().is_err());
        assert!(WidgetConfig::new("ftp://example.com").validate().is_err());
    }

    #[test]
    fn test_blank_chapter_slug_is_unset() {
        let config = WidgetConfig::default().with_chapter_slug("  ");
        assert_eq!(config.chapter_slug, None);

        let config = WidgetConfig::default().with_chapter_slug("module-2/topics");
        assert_eq!(config.chapter_slug.as_deref(), Some("module-2/topics"));
    }
}
