//! Navigation target resolution.

use url::{ParseError, Position, Url};

/// Where a navigation target ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Same-origin location (pathname + search + hash) handled in-app
    Internal(String),
    /// URL that leaves the application with a full page load
    External(String),
}

/// Resolves `to` against `origin` + `current` with WHATWG URL semantics
///
/// Targets carrying a scheme are external as written. Relative targets that
/// land on another origin (`//cdn.example.com/x`) are external too.
///
/// # Examples
///
/// ```
/// use wayfinder::resolve::{resolve, Resolved};
///
/// let next = resolve("http://localhost", "/a/b?x=1", "../c").unwrap();
/// assert_eq!(next, Resolved::Internal("/c".to_string()));
///
/// let hash = resolve("http://localhost", "/a/b?x=1", "#top").unwrap();
/// assert_eq!(hash, Resolved::Internal("/a/b?x=1#top".to_string()));
/// ```
pub fn resolve(origin: &str, current: &str, to: &str) -> Result<Resolved, ParseError> {
    if Url::parse(to).is_ok() {
        return Ok(Resolved::External(to.to_string()));
    }

    let base = Url::parse(origin)?.join(current)?;
    let target = base.join(to)?;

    if target.origin() != base.origin() {
        return Ok(Resolved::External(target.to_string()));
    }

    Ok(Resolved::Internal(target[Position::BeforePath..].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal(to: &str) -> Resolved {
        resolve("http://localhost", "/docs/guide/intro?v=2#top", to).unwrap()
    }

    #[test]
    fn test_absolute_path() {
        assert_eq!(internal("/foo"), Resolved::Internal("/foo".into()));
    }

    #[test]
    fn test_sibling_and_parent() {
        assert_eq!(internal("setup"), Resolved::Internal("/docs/guide/setup".into()));
        assert_eq!(internal("./setup"), Resolved::Internal("/docs/guide/setup".into()));
        assert_eq!(internal("../api"), Resolved::Internal("/docs/api".into()));
    }

    #[test]
    fn test_query_only_drops_hash() {
        assert_eq!(internal("?q=1"), Resolved::Internal("/docs/guide/intro?q=1".into()));
    }

    #[test]
    fn test_hash_only_keeps_query() {
        assert_eq!(
            internal("#faq"),
            Resolved::Internal("/docs/guide/intro?v=2#faq".into())
        );
    }

    #[test]
    fn test_scheme_is_external() {
        assert_eq!(
            internal("https://example.com/x"),
            Resolved::External("https://example.com/x".into())
        );
        assert_eq!(
            internal("mailto:team@example.com"),
            Resolved::External("mailto:team@example.com".into())
        );
    }

    #[test]
    fn test_protocol_relative_is_external() {
        assert_eq!(
            internal("//cdn.example.com/app.js"),
            Resolved::External("http://cdn.example.com/app.js".into())
        );
    }

    #[test]
    fn test_same_origin_protocol_relative_is_internal() {
        assert_eq!(internal("//localhost/home"), Resolved::Internal("/home".into()));
    }

    #[test]
    fn test_malformed_origin() {
        assert!(resolve("not a url", "/", "/x").is_err());
    }
}
