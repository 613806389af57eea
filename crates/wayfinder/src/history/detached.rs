use super::History;

/// Backend for contexts with no environment
///
/// Reports no location and ignores every write, so a router built on it sits
/// at `/` and treats navigation as a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedHistory;

impl History for DetachedHistory {
    fn location(&self) -> Option<String> {
        None
    }

    fn origin(&self) -> Option<String> {
        None
    }

    fn push(&self, _location: &str) {}

    fn replace(&self, _location: &str) {}

    fn assign(&self, _url: &str) {}

    fn length(&self) -> usize {
        0
    }
}
