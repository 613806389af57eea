//! Process-wide memo of compiled patterns.
//!
//! Patterns are static author input, so the cache is never evicted: each
//! distinct pattern text is compiled exactly once for the life of the process.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use super::Pattern;
use crate::error::PatternError;

static PATTERNS: Lazy<RwLock<HashMap<String, Arc<Pattern>>>> = Lazy::new(Default::default);

/// Compiles a pattern, reusing the cached copy for text seen before
///
/// Failed compilations are not cached.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use wayfinder::pattern::compile;
///
/// let first = compile("/users/:id").unwrap();
/// let second = compile("/users/:id").unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
pub fn compile(pattern: &str) -> Result<Arc<Pattern>, PatternError> {
    let cached = PATTERNS
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(pattern)
        .cloned();
    if let Some(hit) = cached {
        return Ok(hit);
    }

    let compiled = Arc::new(Pattern::parse(pattern)?);
    tracing::debug!(
        pattern,
        params = ?compiled.param_keys(),
        priority = compiled.priority(),
        "compiled route pattern"
    );

    let mut patterns = PATTERNS
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    Ok(Arc::clone(
        patterns.entry(pattern.to_string()).or_insert(compiled),
    ))
}

/// Number of distinct patterns compiled so far
pub fn cached_pattern_count() -> usize {
    PATTERNS
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .len()
}
