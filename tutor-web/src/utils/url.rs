//! URL helpers for reading the page location

use super::constants::DOCS_PATH_PREFIX;

/// Path of the current page, e.g. `/docs/module-1/nodes/`.
pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// Derive a chapter slug from a documentation page path.
///
/// `/docs/module-1/nodes/` becomes `module-1/nodes`. Paths outside
/// [`DOCS_PATH_PREFIX`] have no slug. Percent-encoded segments are decoded.
pub fn chapter_slug_from_path(path: &str) -> Option<String> {
    let rest = path.strip_prefix(DOCS_PATH_PREFIX)?;
    let slug = rest.trim_matches('/');
    if slug.is_empty() {
        return None;
    }

    Some(
        urlencoding::decode(slug)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| slug.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_slug_from_docs_path() {
        assert_eq!(chapter_slug_from_path("/docs/module-1/nodes").as_deref(), Some("module-1/nodes"));
        assert_eq!(chapter_slug_from_path("/docs/module-1/nodes/").as_deref(), Some("module-1/nodes"));
        assert_eq!(chapter_slug_from_path("/docs/intro%20page").as_deref(), Some("intro page"));
    }

    #[test]
    fn test_no_slug_outside_docs() {
        assert_eq!(chapter_slug_from_path("/"), None);
        assert_eq!(chapter_slug_from_path("/docs/"), None);
        assert_eq!(chapter_slug_from_path("/blog/release-notes"), None);
    }
}
