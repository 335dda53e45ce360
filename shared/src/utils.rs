//! # Shared Utility Functions
//!
//! Display helpers used by both the browser widget and the terminal host.
//!
//! ## Source Citations
//!
//! Backend citations are slugs of the form `module-<n>/<topic>`:
//! - [`format_source_label`] - Human-readable label for a citation slug
//!
//! ## Selection Preview
//!
//! - [`selection_preview`] - First characters of a captured selection with ellipsis
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_source_label;
//!
//! assert_eq!(format_source_label("module-1/nodes"), "Module 1 › nodes");
//! ```

/// Number of characters shown in the selection banner.
pub const SELECTION_PREVIEW_CHARS: usize = 50;

/// Format a citation slug for display.
///
/// Rewrites the first `module-` to `Module ` and the first `/` to ` › `.
/// Slugs in any other shape pass through with only the matching rewrite applied.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_source_label;
///
/// assert_eq!(format_source_label("module-3/urdf"), "Module 3 › urdf");
/// assert_eq!(format_source_label("glossary"), "glossary");
/// ```
pub fn format_source_label(source: &str) -> String {
    source
        .replacen("module-", "Module ", 1)
        .replacen('/', " › ", 1)
}

/// Preview of a captured selection for the banner: the first
/// [`SELECTION_PREVIEW_CHARS`] characters followed by `...`.
///
/// Truncation is by character, never splitting a multi-byte code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::selection_preview;
///
/// assert_eq!(selection_preview("short text"), "short text...");
/// ```
pub fn selection_preview(text: &str) -> String {
    let head: String = text.chars().take(SELECTION_PREVIEW_CHARS).collect();
    format!("{}...", head)
}
