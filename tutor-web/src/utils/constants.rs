//! Application constants

// Host page integration
pub const MOUNT_ELEMENT_ID: &str = "docs-tutor";
pub const ATTR_API_URL: &str = "data-api-url";
pub const ATTR_CHAPTER_SLUG: &str = "data-chapter-slug";

/// Documentation pages live below this path; the rest of the path is the chapter slug.
pub const DOCS_PATH_PREFIX: &str = "/docs/";

// Panel copy
pub const PANEL_TITLE: &str = "AI Tutor";
pub const WELCOME_GREETING: &str = "👋 Hi! I'm your AI tutor.";
pub const WELCOME_PROMPT: &str = "Ask me anything about the textbook content!";
pub const SELECTION_HINT: &str = "💡 I can see you've selected some text. Ask me about it!";
pub const INPUT_PLACEHOLDER: &str = "Ask a question...";
