/// How a revealed element moves into place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealVariant {
    Fade,
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Zoom,
}

impl RevealVariant {
    /// Inline style applied while the element is still hidden.
    pub fn hidden_style(&self) -> &'static str {
        match self {
            RevealVariant::Fade => "opacity: 0;",
            RevealVariant::FadeUp => "opacity: 0; transform: translateY(40px);",
            RevealVariant::FadeDown => "opacity: 0; transform: translateY(-40px);",
            RevealVariant::FadeLeft => "opacity: 0; transform: translateX(40px);",
            RevealVariant::FadeRight => "opacity: 0; transform: translateX(-40px);",
            RevealVariant::Zoom => "opacity: 0; transform: scale(0.85);",
        }
    }

    pub fn visible_style(&self) -> &'static str {
        "opacity: 1; transform: none;"
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            RevealVariant::Fade => "reveal-fade",
            RevealVariant::FadeUp => "reveal-fade-up",
            RevealVariant::FadeDown => "reveal-fade-down",
            RevealVariant::FadeLeft => "reveal-fade-left",
            RevealVariant::FadeRight => "reveal-fade-right",
            RevealVariant::Zoom => "reveal-zoom",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    /// Seconds to wait after the threshold is crossed.
    pub delay: f64,
    pub variant: RevealVariant,
    pub once: bool,
    pub duration: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            delay: 0.0,
            variant: RevealVariant::FadeUp,
            once: true,
            duration: 0.6,
        }
    }
}

impl RevealConfig {
    pub fn clamped_threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            0.0
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }

    pub fn delay_millis(&self) -> u32 {
        (self.delay.max(0.0) * 1000.0).round() as u32
    }

    /// Full inline style for the wrapper in the given state.
    pub fn style(&self, visible: bool) -> String {
        let state = if visible {
            self.variant.visible_style()
        } else {
            self.variant.hidden_style()
        };
        format!(
            "{} transition: opacity {d}s ease-out, transform {d}s ease-out;",
            state,
            d = self.duration
        )
    }
}

/// What the component should do in response to an intersection event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealAction {
    Nothing,
    /// Start the delay timer; `show()` is called when it fires.
    ScheduleShow { delay_ms: u32 },
    /// Cancel any pending timer and hide again.
    Hide,
}

/// Visibility bookkeeping for one reveal wrapper.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealState {
    config: RevealConfig,
    visible: bool,
    pending: bool,
    done: bool,
}

impl RevealState {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            visible: false,
            pending: false,
            done: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True once a one-shot reveal has fired and the observer can be dropped.
    pub fn should_unobserve(&self) -> bool {
        self.done
    }

    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> RevealAction {
        if self.done {
            return RevealAction::Nothing;
        }

        let threshold = self.config.clamped_threshold();
        let crossed = intersecting && ratio >= threshold;

        if crossed {
            if self.visible || self.pending {
                return RevealAction::Nothing;
            }
            self.pending = true;
            return RevealAction::ScheduleShow {
                delay_ms: self.config.delay_millis(),
            };
        }

        if !intersecting && !self.config.once && (self.visible || self.pending) {
            self.visible = false;
            self.pending = false;
            return RevealAction::Hide;
        }

        RevealAction::Nothing
    }

    /// Called when the delay timer fires.
    pub fn show(&mut self) {
        if !self.pending {
            return;
        }
        self.pending = false;
        self.visible = true;
        if self.config.once {
            self.done = true;
        }
    }
}
