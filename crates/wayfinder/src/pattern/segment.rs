//! Pattern tokenizing into typed segments
//!
//! Pure functional tokenizing of route pattern text into a segment AST.
//! All functions are **pure**: same input → same output, no side effects.

/// One piece of a compiled route pattern
///
/// Functional sum type for pattern matching route text.
///
/// # Examples
///
/// ```
/// use wayfinder::pattern::{tokenize, Segment};
///
/// let segments = tokenize("/users/:id/*");
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Literal("/users/".to_string()),
///         Segment::Param("id".to_string()),
///         Segment::Literal("/".to_string()),
///         Segment::Wildcard,
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Text matched byte-for-byte
    Literal(String),
    /// Named parameter `:name`, matches one or more characters other than `/`
    Param(String),
    /// Wildcard `*`, matches any run of characters including `/` (may be empty)
    Wildcard,
}

impl Segment {
    /// Returns the parameter name for [`Segment::Param`]
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Param(name) => Some(name),
            _ => None,
        }
    }

    /// Whether this segment produces a capture during matching
    pub fn is_capture(&self) -> bool {
        matches!(self, Segment::Param(_) | Segment::Wildcard)
    }
}

/// Characters allowed in a parameter name
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenizes pattern text into segments (pure function)
///
/// # Tokenizing Rules
///
/// 1. **Parameter**: `:` followed by one or more `[A-Za-z0-9_]`
/// 2. **Wildcard**: `*`
/// 3. **Literal**: anything else, including a `:` with no name after it
///
/// Adjacent literal characters are merged into a single [`Segment::Literal`].
///
/// # Examples
///
/// ```
/// use wayfinder::pattern::{tokenize, Segment};
///
/// // Parameters may share a path segment with literal text
/// assert_eq!(
///     tokenize("/files/:name.:ext"),
///     vec![
///         Segment::Literal("/files/".to_string()),
///         Segment::Param("name".to_string()),
///         Segment::Literal(".".to_string()),
///         Segment::Param("ext".to_string()),
///     ]
/// );
///
/// // A bare colon is literal text
/// assert_eq!(tokenize("/a:/b"), vec![Segment::Literal("/a:/b".to_string())]);
/// ```
pub fn tokenize(pattern: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek().copied().is_some_and(is_name_char) => {
                flush_literal(&mut literal, &mut segments);

                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    if !is_name_char(next) {
                        break;
                    }
                    name.push(next);
                    chars.next();
                }
                segments.push(Segment::Param(name));
            }
            '*' => {
                flush_literal(&mut literal, &mut segments);
                segments.push(Segment::Wildcard);
            }
            _ => literal.push(c),
        }
    }

    flush_literal(&mut literal, &mut segments);
    segments
}

fn flush_literal(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_static() {
        assert_eq!(tokenize("/about"), vec![Segment::Literal("/about".to_string())]);
    }

    #[test]
    fn test_tokenize_param() {
        assert_eq!(
            tokenize("/providers/:id"),
            vec![
                Segment::Literal("/providers/".to_string()),
                Segment::Param("id".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_bare_wildcard() {
        assert_eq!(tokenize("*"), vec![Segment::Wildcard]);
    }

    #[test]
    fn test_tokenize_wildcard_then_param() {
        assert_eq!(
            tokenize("/*/:id"),
            vec![
                Segment::Literal("/".to_string()),
                Segment::Wildcard,
                Segment::Literal("/".to_string()),
                Segment::Param("id".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_param_name_stops_at_punctuation() {
        assert_eq!(
            tokenize("/:user_id-:slug"),
            vec![
                Segment::Literal("/".to_string()),
                Segment::Param("user_id".to_string()),
                Segment::Literal("-".to_string()),
                Segment::Param("slug".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_regex_metacharacters_are_literal() {
        assert_eq!(
            tokenize("/a.b+(c)"),
            vec![Segment::Literal("/a.b+(c)".to_string())]
        );
    }

    #[test]
    fn test_segment_helpers() {
        assert_eq!(Segment::Param("id".to_string()).param_name(), Some("id"));
        assert_eq!(Segment::Wildcard.param_name(), None);
        assert!(Segment::Wildcard.is_capture());
        assert!(!Segment::Literal("/".to_string()).is_capture());
    }
}
