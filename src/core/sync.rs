/// Raw measurements needed to turn the page scroll offset into progress.
///
/// Progress is measured against a spacer element rather than the whole
/// document, so content below the spacer doesn't stretch the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub spacer_top: f64,
    pub spacer_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Largest scroll offset that still maps inside the spacer.
    #[inline]
    pub fn max_scroll(&self) -> f64 {
        self.spacer_top + self.spacer_height - self.viewport_height
    }

    /// Normalized scroll progress in [0, 1]; 0 when there is nothing to scroll.
    pub fn progress(&self) -> f32 {
        let max_scroll = self.max_scroll();
        if max_scroll.is_nan() || max_scroll <= 0.0 {
            return 0.0;
        }
        let p = self.scroll_y.min(max_scroll) / max_scroll;
        if p.is_nan() {
            0.0
        } else {
            p.clamp(0.0, 1.0) as f32
        }
    }
}

/// User input that may interrupt a programmatic scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManualInput {
    Wheel,
    /// `inside_bar` is true when the touch started on the floating bar.
    Touch { inside_bar: bool },
}

impl ManualInput {
    #[inline]
    pub fn cancels_autoplay(self) -> bool {
        match self {
            ManualInput::Wheel => true,
            ManualInput::Touch { inside_bar } => !inside_bar,
        }
    }
}
