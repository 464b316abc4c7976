#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionVariant {
    Fade,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Scale,
}

impl TransitionVariant {
    /// CSS class prefix; the stylesheet defines `-enter` and `-exit` keyframes.
    pub fn class_prefix(&self) -> &'static str {
        match self {
            TransitionVariant::Fade => "page-fade",
            TransitionVariant::SlideUp => "page-slide-up",
            TransitionVariant::SlideDown => "page-slide-down",
            TransitionVariant::SlideLeft => "page-slide-left",
            TransitionVariant::SlideRight => "page-slide-right",
            TransitionVariant::Scale => "page-scale",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Exiting,
    Entering,
}

/// Route-keyed enter/exit bookkeeping.
///
/// `displayed` is the key whose content is mounted. With deferred navigation
/// the new key is only mounted after `exit_complete`.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionMachine<K> {
    displayed: K,
    pending: Option<K>,
    phase: Phase,
    defer: bool,
}

impl<K: Clone + PartialEq> TransitionMachine<K> {
    pub fn new(initial: K, defer: bool) -> Self {
        Self {
            displayed: initial,
            pending: None,
            phase: Phase::Entering,
            defer,
        }
    }

    pub fn displayed(&self) -> &K {
        &self.displayed
    }

    pub fn pending(&self) -> Option<&K> {
        self.pending.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true if the key change started a transition.
    pub fn navigate(&mut self, key: K) -> bool {
        if self.phase == Phase::Exiting {
            if key == self.displayed {
                // navigated back before the exit finished
                self.pending = None;
                self.phase = Phase::Entering;
            } else {
                self.pending = Some(key);
            }
            return true;
        }

        if key == self.displayed {
            return false;
        }

        if self.defer {
            self.pending = Some(key);
            self.phase = Phase::Exiting;
        } else {
            self.displayed = key;
            self.phase = Phase::Entering;
        }
        true
    }

    pub fn exit_complete(&mut self) {
        if self.phase != Phase::Exiting {
            return;
        }
        if let Some(next) = self.pending.take() {
            self.displayed = next;
        }
        self.phase = Phase::Entering;
    }

    pub fn enter_complete(&mut self) {
        if self.phase == Phase::Entering {
            self.phase = Phase::Idle;
        }
    }

    pub fn class(&self, variant: TransitionVariant) -> String {
        let prefix = variant.class_prefix();
        match self.phase {
            Phase::Idle => "page-transition".to_string(),
            Phase::Exiting => format!("page-transition {}-exit", prefix),
            Phase::Entering => format!("page-transition {}-enter", prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deferred_navigation_waits_for_exit() {
        let mut m = TransitionMachine::new("/", true);
        m.enter_complete();
        assert!(m.navigate("/about"));
        assert_eq!(m.phase(), Phase::Exiting);
        assert_eq!(*m.displayed(), "/");

        m.exit_complete();
        assert_eq!(*m.displayed(), "/about");
        assert_eq!(m.phase(), Phase::Entering);
        m.enter_complete();
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn immediate_navigation_mounts_new_key() {
        let mut m = TransitionMachine::new("/", false);
        m.navigate("/blog");
        assert_eq!(*m.displayed(), "/blog");
        assert_eq!(m.phase(), Phase::Entering);
    }

    #[test]
    fn same_key_is_ignored() {
        let mut m = TransitionMachine::new("/", true);
        m.enter_complete();
        assert!(!m.navigate("/"));
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn navigation_during_exit_retargets() {
        let mut m = TransitionMachine::new("/", true);
        m.navigate("/blog");
        m.navigate("/contact");
        assert_eq!(*m.displayed(), "/");
        m.exit_complete();
        assert_eq!(*m.displayed(), "/contact");
    }

    #[test]
    fn returning_during_exit_cancels_pending() {
        let mut m = TransitionMachine::new("/", true);
        m.navigate("/blog");
        m.navigate("/");
        assert_eq!(m.pending(), None);
        assert_eq!(m.phase(), Phase::Entering);
    }

    #[test]
    fn class_tracks_phase() {
        let mut m = TransitionMachine::new(1, true);
        assert_eq!(m.class(TransitionVariant::Fade), "page-transition page-fade-enter");
        m.enter_complete();
        m.navigate(2);
        assert_eq!(m.class(TransitionVariant::SlideLeft), "page-transition page-slide-left-exit");
    }
}
