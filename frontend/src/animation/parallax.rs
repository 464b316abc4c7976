/// Output range mapped from scroll progress 0.0..=1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub from: f64,
    pub to: f64,
}

impl Range {
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    pub const fn constant(value: f64) -> Self {
        Self { from: value, to: value }
    }

    pub fn lerp(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Vertical translation in pixels.
    pub translate_y: Range,
    pub opacity: Range,
    pub scale: Range,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            translate_y: Range::new(60.0, -60.0),
            opacity: Range::constant(1.0),
            scale: Range::constant(1.0),
        }
    }
}

/// Element geometry, refreshed on resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    /// Document-relative top of the tracked element.
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

/// Progress from "top edge about to enter at the bottom of the viewport"
/// (0.0) to "bottom edge has left through the top" (1.0).
pub fn progress(scroll_y: f64, layout: &Layout) -> f64 {
    let span = layout.viewport_height + layout.element_height;
    if !(span > 0.0) {
        return 0.0;
    }
    let travelled = scroll_y + layout.viewport_height - layout.element_top;
    let p = travelled / span;
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub translate_y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl ParallaxFrame {
    pub fn style(&self) -> String {
        format!(
            "transform: translate3d(0, {:.2}px, 0) scale({:.4}); opacity: {:.4}; will-change: transform, opacity;",
            self.translate_y, self.scale, self.opacity
        )
    }
}

pub fn frame(config: &ParallaxConfig, scroll_y: f64, layout: &Layout) -> ParallaxFrame {
    let t = progress(scroll_y, layout);
    ParallaxFrame {
        translate_y: config.translate_y.lerp(t),
        opacity: config.opacity.lerp(t).clamp(0.0, 1.0),
        scale: config.scale.lerp(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout {
            element_top: 1000.0,
            element_height: 400.0,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn progress_spans_enter_to_exit() {
        let l = layout();
        assert_eq!(progress(200.0, &l), 0.0);
        assert_eq!(progress(1400.0, &l), 1.0);
        assert!((progress(800.0, &l) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn progress_clamps_outside_window() {
        let l = layout();
        assert_eq!(progress(0.0, &l), 0.0);
        assert_eq!(progress(10_000.0, &l), 1.0);
    }

    #[test]
    fn zero_sized_layout_does_not_divide_by_zero() {
        assert_eq!(progress(500.0, &Layout::default()), 0.0);
    }

    #[test]
    fn frame_interpolates_all_ranges() {
        let config = ParallaxConfig {
            translate_y: Range::new(100.0, -100.0),
            opacity: Range::new(0.0, 1.0),
            scale: Range::new(0.8, 1.2),
        };
        let f = frame(&config, 800.0, &layout());
        assert!(f.translate_y.abs() < 1e-9);
        assert!((f.opacity - 0.5).abs() < 1e-9);
        assert!((f.scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn opacity_never_leaves_unit_interval() {
        let config = ParallaxConfig {
            opacity: Range::new(-1.0, 2.0),
            ..ParallaxConfig::default()
        };
        assert_eq!(frame(&config, 0.0, &layout()).opacity, 0.0);
        assert_eq!(frame(&config, 5000.0, &layout()).opacity, 1.0);
    }
}
