//! Location and pattern string utilities
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Splits a location into its path, search and hash parts
///
/// The search part keeps its leading `?` and the hash part its leading `#`,
/// so concatenating the three parts yields the input again. A `?` that
/// appears after the `#` belongs to the hash.
///
/// # Examples
///
/// ```
/// use wayfinder::path::split_location;
///
/// assert_eq!(split_location("/a?x=1#y"), ("/a", "?x=1", "#y"));
/// assert_eq!(split_location("/a#y?z"), ("/a", "", "#y?z"));
/// assert_eq!(split_location("/a"), ("/a", "", ""));
/// ```
pub fn split_location(location: &str) -> (&str, &str, &str) {
    let (before_hash, hash) = match location.find('#') {
        Some(idx) => location.split_at(idx),
        None => (location, ""),
    };

    let (path, search) = match before_hash.find('?') {
        Some(idx) => before_hash.split_at(idx),
        None => (before_hash, ""),
    };

    (path, search, hash)
}

/// Returns only the path portion of a location
///
/// Query string and fragment never participate in pattern matching.
///
/// # Examples
///
/// ```
/// use wayfinder::path::pathname;
///
/// assert_eq!(pathname("/a?x=1#y"), "/a");
/// assert_eq!(pathname("?x=1"), "");
/// ```
pub fn pathname(location: &str) -> &str {
    split_location(location).0
}

/// Canonicalizes a raw location read from the environment
///
/// An empty location means "the root" and becomes `/`.
///
/// # Examples
///
/// ```
/// use wayfinder::path::canonical_location;
///
/// assert_eq!(canonical_location(""), "/");
/// assert_eq!(canonical_location("/users?page=2"), "/users?page=2");
/// ```
pub fn canonical_location(raw: &str) -> &str {
    if raw.is_empty() {
        "/"
    } else {
        raw
    }
}

/// Removes trailing slashes from a pattern
///
/// Returns a borrowed slice of the input (zero allocations). A pattern
/// made only of slashes collapses to the root pattern `/` so that it keeps
/// matching the root location.
///
/// # Examples
///
/// ```
/// use wayfinder::path::trim_trailing_slashes;
///
/// assert_eq!(trim_trailing_slashes("/users/"), "/users");
/// assert_eq!(trim_trailing_slashes("/users//"), "/users");
/// assert_eq!(trim_trailing_slashes("///"), "/");
/// assert_eq!(trim_trailing_slashes("/users"), "/users");
/// ```
pub fn trim_trailing_slashes(pattern: &str) -> &str {
    let trimmed = pattern.trim_end_matches('/');

    if trimmed.is_empty() && !pattern.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Percent-decodes a captured parameter value
///
/// Values that do not decode to valid UTF-8 are returned unchanged; matching
/// never fails because of a malformed escape.
///
/// # Examples
///
/// ```
/// use wayfinder::path::decode_param;
///
/// assert_eq!(decode_param("hello%20world"), "hello world");
/// assert_eq!(decode_param("%E2%9C%93"), "✓");
/// assert_eq!(decode_param("%FF"), "%FF");
/// ```
pub fn decode_param(raw: &str) -> Cow<'_, str> {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(raw),
    }
}
