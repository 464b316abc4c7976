use chrono::{DateTime, Utc};

/// One stay on a page. Either the tab being hidden for good (`pagehide`) or
/// the in-app route change may end it, whichever comes first; the other is
/// then a no-op.
#[derive(Debug)]
pub struct PageVisit {
    started: DateTime<Utc>,
    ended: bool,
}

impl PageVisit {
    pub fn new(started: DateTime<Utc>) -> Self {
        Self { started, ended: false }
    }

    /// Whole seconds spent, or `None` if the visit was already ended.
    pub fn end(&mut self, now: DateTime<Utc>) -> Option<i64> {
        if self.ended {
            return None;
        }
        self.ended = true;
        Some((now - self.started).num_seconds().max(0))
    }
}
