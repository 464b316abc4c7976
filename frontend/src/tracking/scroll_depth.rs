pub const MILESTONES: [u8; 4] = [25, 50, 75, 100];

/// How far down the page the bottom of the viewport is, 0..=100.
pub fn scroll_percent(scroll_y: f64, viewport_height: f64, document_height: f64) -> f64 {
    if document_height <= 0.0 || document_height <= viewport_height {
        return 100.0;
    }
    let seen = (scroll_y.max(0.0) + viewport_height) / document_height * 100.0;
    seen.clamp(0.0, 100.0)
}

/// Milestones already reported during the current page visit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollDepth {
    fired: [bool; 4],
}

impl ScrollDepth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns milestones crossed for the first time, lowest first.
    pub fn update(&mut self, percent: f64) -> Vec<u8> {
        let mut crossed = Vec::new();
        for (i, milestone) in MILESTONES.iter().enumerate() {
            if !self.fired[i] && percent >= f64::from(*milestone) {
                self.fired[i] = true;
                crossed.push(*milestone);
            }
        }
        crossed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jumping_to_bottom_fires_all_four_once() {
        let mut depth = ScrollDepth::new();
        assert_eq!(depth.update(100.0), vec![25, 50, 75, 100]);
        assert!(depth.update(100.0).is_empty());
        assert!(depth.update(30.0).is_empty());
    }

    #[test]
    fn gradual_scroll_fires_each_milestone_once() {
        let mut depth = ScrollDepth::new();
        let mut all = Vec::new();
        for step in 0..=200 {
            all.extend(depth.update(step as f64 / 2.0));
        }
        for step in (0..=200).rev() {
            all.extend(depth.update(step as f64 / 2.0));
        }
        assert_eq!(all, vec![25, 50, 75, 100]);
    }

    #[test]
    fn new_visit_starts_fresh() {
        let mut first = ScrollDepth::new();
        first.update(60.0);
        let mut second = ScrollDepth::new();
        assert_eq!(second.update(30.0), vec![25]);
    }

    #[test]
    fn percent_accounts_for_viewport() {
        assert_eq!(scroll_percent(0.0, 500.0, 2000.0), 25.0);
        assert_eq!(scroll_percent(1500.0, 500.0, 2000.0), 100.0);
        assert_eq!(scroll_percent(0.0, 800.0, 600.0), 100.0);
        assert_eq!(scroll_percent(0.0, 800.0, 0.0), 100.0);
    }
}
