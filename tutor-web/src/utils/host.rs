//! Host integration: build the widget configuration from the page.

use lib_core::config::{WidgetConfig, DEFAULT_API_URL};
use web_sys::Element;

use super::constants::{ATTR_API_URL, ATTR_CHAPTER_SLUG};
use super::url::{chapter_slug_from_path, current_path};

/// Read configuration from the mount element's data attributes, falling back
/// to the page path for the chapter slug.
pub fn read_widget_config(mount: Option<&Element>) -> WidgetConfig {
    let api_url = mount.and_then(|el| el.get_attribute(ATTR_API_URL));
    let chapter_slug = mount.and_then(|el| el.get_attribute(ATTR_CHAPTER_SLUG));
    resolve_config(api_url, chapter_slug, current_path().as_deref())
}

/// Combine the raw host inputs into a valid configuration.
///
/// An unusable API URL falls back to [`DEFAULT_API_URL`] with a warning; an
/// explicit chapter slug wins over the one derived from `page_path`.
pub fn resolve_config(api_url: Option<String>, chapter_slug: Option<String>, page_path: Option<&str>) -> WidgetConfig {
    let mut config = match api_url {
        Some(url) if !url.trim().is_empty() => WidgetConfig::new(url.trim()),
        _ => WidgetConfig::default(),
    };

    if let Err(e) = config.validate() {
        log::warn!("{}; using {}", e, DEFAULT_API_URL);
        config = WidgetConfig::default();
    }

    let slug = chapter_slug
        .filter(|slug| !slug.trim().is_empty())
        .or_else(|| page_path.and_then(chapter_slug_from_path));

    match slug {
        Some(slug) => config.with_chapter_slug(slug),
        None => config,
    }
}
