//! Pattern parsing and priority calculation
//!
//! Pure functional parsers that turn tokenized pattern text into the parts of
//! a compiled [`Pattern`](super::Pattern).
//! All functions are **pure**: same input → same output, no side effects.

use crate::error::PatternError;

use super::segment::Segment;

/// Maximum allowed length for a pattern string in bytes
pub const MAX_PATTERN_LENGTH: usize = 1024;

/// Depth beyond which catch-all patterns stop gaining specificity
const MAX_DEPTH: usize = 64;

/// Internal state accumulator for fold-based parsing
///
/// All mutations are local to the fold accumulator.
#[derive(Default)]
struct ParseState {
    segments: Vec<Segment>,
    param_keys: Vec<String>,
    has_wildcard: bool,
}

impl ParseState {
    /// Adds a literal segment
    fn with_literal(mut self, text: String) -> Self {
        self.segments.push(Segment::Literal(text));
        self
    }

    /// Adds a named parameter, rejecting repeated names
    fn with_param(mut self, pattern: &str, name: String) -> Result<Self, PatternError> {
        if self.param_keys.contains(&name) {
            return Err(PatternError::DuplicateParam {
                pattern: pattern.to_string(),
                name,
            });
        }

        self.param_keys.push(name.clone());
        self.segments.push(Segment::Param(name));
        Ok(self)
    }

    /// Adds a wildcard segment
    fn with_wildcard(mut self) -> Self {
        self.segments.push(Segment::Wildcard);
        self.has_wildcard = true;
        self
    }
}

/// Output of [`parse_segments`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    /// Segments in pattern order
    pub segments: Vec<Segment>,
    /// Parameter names in order of appearance
    pub param_keys: Vec<String>,
    /// Whether any segment is a wildcard
    pub has_wildcard: bool,
}

/// Folds tokenized segments into a parsed pattern (pure function)
///
/// `pattern` is only used for error messages.
///
/// # Examples
///
/// ```
/// use wayfinder::pattern::{parse_segments, tokenize};
///
/// let parsed = parse_segments("/users/:id", tokenize("/users/:id")).unwrap();
/// assert_eq!(parsed.param_keys, vec!["id".to_string()]);
/// assert!(!parsed.has_wildcard);
///
/// // Repeated parameter names are rejected
/// assert!(parse_segments("/:id/:id", tokenize("/:id/:id")).is_err());
/// ```
pub fn parse_segments(
    pattern: &str,
    tokens: Vec<Segment>,
) -> Result<ParsedPattern, PatternError> {
    let state = tokens
        .into_iter()
        .try_fold(ParseState::default(), |state, token| match token {
            Segment::Literal(text) => Ok(state.with_literal(text)),
            Segment::Param(name) => state.with_param(pattern, name),
            Segment::Wildcard => Ok(state.with_wildcard()),
        })?;

    Ok(ParsedPattern {
        segments: state.segments,
        param_keys: state.param_keys,
        has_wildcard: state.has_wildcard,
    })
}

/// Rejects patterns exceeding [`MAX_PATTERN_LENGTH`]
pub fn check_length(pattern: &str) -> Result<(), PatternError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            len: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }
    Ok(())
}

/// Calculates pattern priority for specificity ordering (pure function)
///
/// Lower number = more specific.
///
/// # Priority Order
///
/// 1. **Static patterns** → 0
/// 2. **Parametric patterns** → `params + depth + 1`
/// 3. **Wildcard patterns** → 1000+, deeper catch-alls first
///
/// # Examples
///
/// ```
/// use wayfinder::pattern::calculate_priority;
///
/// // Static pattern: highest priority
/// assert_eq!(calculate_priority(false, 0, 2), 0);
///
/// // One parameter at depth 2
/// assert_eq!(calculate_priority(false, 1, 2), 4);
///
/// // A nested catch-all outranks the root catch-all
/// assert!(calculate_priority(true, 0, 2) < calculate_priority(true, 0, 0));
/// ```
pub fn calculate_priority(has_wildcard: bool, param_count: usize, depth: usize) -> usize {
    if has_wildcard {
        1000 + MAX_DEPTH.saturating_sub(depth)
    } else if param_count > 0 {
        param_count + depth + 1
    } else {
        0
    }
}
