//! Path pattern compilation and matching.
//!
//! A pattern such as `/providers/:id` or `/docs/*` is tokenized once into a
//! [`Segment`] list and matched by a hand-rolled backtracking matcher. The
//! semantics are those of an anchored expression in which `:name` is a greedy
//! `[^/]+` group and `*` is a greedy `.*` group; no regex engine is involved,
//! so literal text never needs escaping.
//!
//! ```
//! use wayfinder::pattern::match_location;
//!
//! let m = match_location(Some("/providers/:id"), "/providers/42?tab=reviews").unwrap();
//! assert!(m.matches);
//! assert_eq!(m.params.get("id"), Some("42"));
//! ```

mod cache;
pub mod parser;
pub mod segment;

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::PatternError;
use crate::path::{decode_param, pathname, trim_trailing_slashes};

pub use cache::{cached_pattern_count, compile};
pub use parser::{calculate_priority, parse_segments, ParsedPattern, MAX_PATTERN_LENGTH};
pub use segment::{tokenize, Segment};

// ============================================================================
// Params
// ============================================================================

/// Captured route parameters in pattern order
///
/// Values are percent-decoded. Lookups are linear, which is faster than
/// hashing for the handful of parameters a route declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Creates an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value captured for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a value was captured for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates `(name, value)` pairs in pattern order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parameter names in pattern order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, name: String, value: String) {
        self.0.push((name, value));
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Serializes as a map, preserving pattern order
impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ============================================================================
// MatchResult
// ============================================================================

/// Result of matching a pattern against a location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Whether the pattern matched
    pub matches: bool,
    /// Named parameters captured by the match (empty on a miss)
    pub params: Params,
    /// Text captured by the last wildcard, if the pattern has one
    pub rest: Option<String>,
}

impl MatchResult {
    /// A failed match
    pub fn miss() -> Self {
        Self::default()
    }

    /// An unconditional match with no parameters
    pub fn always() -> Self {
        Self {
            matches: true,
            ..Self::default()
        }
    }
}

// ============================================================================
// Pattern
// ============================================================================

/// A compiled route pattern
///
/// Build one with [`compile`] to share the process-wide cache, or with
/// [`Pattern::parse`] for a standalone copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
    param_keys: Vec<String>,
    has_wildcard: bool,
    priority: usize,
}

impl Pattern {
    /// Compiles pattern text without consulting the cache
    ///
    /// Trailing slashes are stripped before tokenizing.
    ///
    /// # Errors
    ///
    /// - [`PatternError::TooLong`] if the text exceeds [`MAX_PATTERN_LENGTH`]
    /// - [`PatternError::DuplicateParam`] if a `:name` repeats
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        parser::check_length(source)?;

        let trimmed = trim_trailing_slashes(source);
        let parsed = parse_segments(source, tokenize(trimmed))?;

        let depth = trimmed.matches('/').count();
        let priority = calculate_priority(parsed.has_wildcard, parsed.param_keys.len(), depth);

        Ok(Self {
            source: source.to_string(),
            segments: parsed.segments,
            param_keys: parsed.param_keys,
            has_wildcard: parsed.has_wildcard,
            priority,
        })
    }

    /// The pattern text as written by the author
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in order of appearance
    pub fn param_keys(&self) -> &[String] {
        &self.param_keys
    }

    pub fn has_wildcard(&self) -> bool {
        self.has_wildcard
    }

    /// Specificity score, lower is more specific (see [`calculate_priority`])
    pub fn priority(&self) -> usize {
        self.priority
    }

    /// Whether this pattern is the bare `*`, which matches every location
    pub fn is_catch_all(&self) -> bool {
        self.segments == [Segment::Wildcard]
    }

    /// Matches a location, ignoring its query string and fragment
    pub fn matches(&self, location: &str) -> MatchResult {
        self.match_path(pathname(location))
    }

    /// Matches a bare path (no query string or fragment stripping)
    pub fn match_path(&self, path: &str) -> MatchResult {
        let mut captures = Vec::with_capacity(self.param_keys.len() + 1);
        if !match_segments(&self.segments, path, &mut captures) {
            return MatchResult::miss();
        }

        let mut result = MatchResult::always();
        let capturing = self.segments.iter().filter(|s| s.is_capture());

        for (segment, raw) in capturing.zip(captures) {
            let value = decode_param(raw).into_owned();
            match segment {
                Segment::Param(name) => result.params.push(name.clone(), value),
                Segment::Wildcard => result.rest = Some(value),
                Segment::Literal(_) => {}
            }
        }

        result
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Backtracking matcher over segments
///
/// Parameters and wildcards try their longest candidate first and shrink on
/// failure, which reproduces leftmost-greedy regex captures.
fn match_segments<'p>(segments: &[Segment], path: &'p str, captures: &mut Vec<&'p str>) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        return path.is_empty();
    };

    match first {
        Segment::Literal(text) => path
            .strip_prefix(text.as_str())
            .is_some_and(|remaining| match_segments(rest, remaining, captures)),
        Segment::Param(_) => {
            let limit = path.find('/').unwrap_or(path.len());
            try_captures(rest, path, (1..=limit).rev(), captures)
        }
        Segment::Wildcard => try_captures(rest, path, (0..=path.len()).rev(), captures),
    }
}

fn try_captures<'p>(
    rest: &[Segment],
    path: &'p str,
    ends: impl Iterator<Item = usize>,
    captures: &mut Vec<&'p str>,
) -> bool {
    for end in ends.filter(|&end| path.is_char_boundary(end)) {
        captures.push(&path[..end]);
        if match_segments(rest, &path[end..], captures) {
            return true;
        }
        captures.pop();
    }
    false
}

/// Matches an optional pattern against a location
///
/// A missing or empty pattern matches unconditionally; this is how a route
/// without a path renders on every location.
///
/// # Examples
///
/// ```
/// use wayfinder::pattern::match_location;
///
/// assert!(match_location(None, "/anything").unwrap().matches);
/// assert!(match_location(Some("/a"), "/a?x=1#y").unwrap().matches);
/// assert!(!match_location(Some("/a"), "/b").unwrap().matches);
/// ```
pub fn match_location(pattern: Option<&str>, location: &str) -> Result<MatchResult, PatternError> {
    match pattern.filter(|p| !p.is_empty()) {
        None => Ok(MatchResult::always()),
        Some(pattern) => Ok(compile(pattern)?.matches(location)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_static() {
        let pattern = Pattern::parse("/about").unwrap();
        assert!(pattern.match_path("/about").matches);
        assert!(!pattern.match_path("/about/team").matches);
        assert!(!pattern.match_path("/abou").matches);
    }

    #[test]
    fn test_trailing_slash_on_pattern_is_ignored() {
        let pattern = Pattern::parse("/about/").unwrap();
        assert!(pattern.match_path("/about").matches);
    }

    #[test]
    fn test_root_pattern() {
        let pattern = Pattern::parse("/").unwrap();
        assert!(pattern.match_path("/").matches);
        assert!(!pattern.match_path("/x").matches);
    }

    #[test]
    fn test_param_requires_one_character() {
        let pattern = Pattern::parse("/users/:id").unwrap();
        assert!(!pattern.match_path("/users/").matches);
    }

    #[test]
    fn test_param_does_not_cross_slash() {
        let pattern = Pattern::parse("/users/:id").unwrap();
        assert!(!pattern.match_path("/users/1/2").matches);
    }

    #[test]
    fn test_greedy_param_backtracks() {
        let pattern = Pattern::parse("/files/:name.:ext").unwrap();
        let result = pattern.match_path("/files/archive.tar.gz");
        assert!(result.matches);
        assert_eq!(result.params.get("name"), Some("archive.tar"));
        assert_eq!(result.params.get("ext"), Some("gz"));
    }

    #[test]
    fn test_wildcard_captures_rest() {
        let pattern = Pattern::parse("/docs/*").unwrap();
        let result = pattern.match_path("/docs/guide/intro");
        assert!(result.matches);
        assert!(result.params.is_empty());
        assert_eq!(result.rest.as_deref(), Some("guide/intro"));
    }

    #[test]
    fn test_wildcard_may_be_empty() {
        let pattern = Pattern::parse("/docs/*").unwrap();
        assert_eq!(pattern.match_path("/docs/").rest.as_deref(), Some(""));
        assert!(!pattern.match_path("/docs").matches);
    }

    #[test]
    fn test_wildcard_before_param_keeps_alignment() {
        let pattern = Pattern::parse("/*/edit/:id").unwrap();
        let result = pattern.match_path("/a/b/edit/7");
        assert!(result.matches);
        assert_eq!(result.params.get("id"), Some("7"));
        assert_eq!(result.rest.as_deref(), Some("a/b"));
    }

    #[test]
    fn test_multibyte_paths() {
        let pattern = Pattern::parse("/tags/:tag").unwrap();
        let result = pattern.match_path("/tags/café");
        assert_eq!(result.params.get("tag"), Some("café"));
    }

    #[test]
    fn test_is_catch_all() {
        assert!(Pattern::parse("*").unwrap().is_catch_all());
        assert!(!Pattern::parse("/docs/*").unwrap().is_catch_all());
    }

    #[test]
    fn test_params_serialize_in_order() {
        let params: Params = [("b", "2"), ("a", "1")].into_iter().collect();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"b":"2","a":"1"}"#);
    }

    #[test]
    fn test_empty_pattern_matches_always() {
        assert_eq!(match_location(Some(""), "/x").unwrap(), MatchResult::always());
    }
}
