//! Request tokens for discarding superseded search responses.
//!
//! Searches are never cancelled, so two overlapping searches for the same view
//! can finish in either order. The last search to *begin* wins: its token is
//! the only one [`RequestTracker::is_current`] accepts for that view.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::view::ViewKind;

/// Identifies one issued request. Tokens are unique across all views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: u64,
    latest: HashMap<ViewKind, RequestToken>,
}

impl RequestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new request on `view`, superseding earlier ones.
    pub fn begin(&mut self, view: ViewKind) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.latest.insert(view, token);
        token
    }

    /// Whether `token` is the most recent request begun for `view`.
    #[must_use]
    pub fn is_current(&self, view: ViewKind, token: RequestToken) -> bool {
        self.latest.get(&view) == Some(&token)
    }

    /// Forget requests for `view` so no outstanding response is accepted.
    pub fn reset(&mut self, view: ViewKind) {
        self.latest.remove(&view);
    }

    /// Forget requests for every view. Tokens keep counting up, so nothing
    /// issued before the reset can become current again.
    pub fn reset_all(&mut self) {
        self.latest.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_request_supersedes_earlier() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin(ViewKind::Browse);
        let second = tracker.begin(ViewKind::Browse);
        assert!(!tracker.is_current(ViewKind::Browse, first));
        assert!(tracker.is_current(ViewKind::Browse, second));
    }

    #[test]
    fn views_are_tracked_independently() {
        let mut tracker = RequestTracker::new();
        let browse = tracker.begin(ViewKind::Browse);
        let map = tracker.begin(ViewKind::Map);
        assert_ne!(browse, map);
        assert!(tracker.is_current(ViewKind::Browse, browse));
        assert!(tracker.is_current(ViewKind::Map, map));
        assert!(!tracker.is_current(ViewKind::Map, browse));
    }

    #[test]
    fn reset_rejects_outstanding_tokens() {
        let mut tracker = RequestTracker::new();
        let token = tracker.begin(ViewKind::Map);
        tracker.reset(ViewKind::Map);
        assert!(!tracker.is_current(ViewKind::Map, token));
    }

    #[test]
    fn reset_all_rejects_tokens_for_every_view() {
        let mut tracker = RequestTracker::new();
        let browse = tracker.begin(ViewKind::Browse);
        let detail = tracker.begin(ViewKind::Detail);
        tracker.reset_all();
        assert!(!tracker.is_current(ViewKind::Browse, browse));
        assert!(!tracker.is_current(ViewKind::Detail, detail));

        let fresh = tracker.begin(ViewKind::Browse);
        assert!(fresh > detail);
        assert!(tracker.is_current(ViewKind::Browse, fresh));
    }
}
