use super::animator::{ScrollAnimator, Step, TaskId};
use super::ease::AutoplayEase;
use super::sync::ManualInput;

/// What the floating bar shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarMode {
    /// Enter button visible, no programmatic scroll.
    #[default]
    Entry,
    /// Controls visible, pause icon shown.
    Playing,
    /// Controls visible, play icon shown.
    Paused,
}

impl BarMode {
    #[inline]
    pub fn controls_visible(self) -> bool {
        !matches!(self, BarMode::Entry)
    }
}

/// Outcome of one driven frame, for the web layer to apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    Idle,
    ScrollTo(f64),
    /// Final position; the bar has returned to `Entry`.
    Finished(f64),
}

/// Floating-bar state machine driving the scroll animator.
#[derive(Debug)]
pub struct AutoplayControls {
    animator: ScrollAnimator,
    mode: BarMode,
    curve: AutoplayEase,
    autoplay_duration_ms: f64,
    skip_duration_ms: f64,
}

impl AutoplayControls {
    pub fn new(curve: AutoplayEase, autoplay_duration_ms: f64, skip_duration_ms: f64) -> Self {
        Self {
            animator: ScrollAnimator::new(),
            mode: BarMode::Entry,
            curve,
            autoplay_duration_ms,
            skip_duration_ms,
        }
    }

    #[inline]
    pub fn mode(&self) -> BarMode {
        self.mode
    }

    #[inline]
    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    /// Enter button: start autoplay from `scroll_y` to `page_end`.
    pub fn enter(&mut self, now: f64, scroll_y: f64, page_end: f64) -> TaskId {
        self.mode = BarMode::Playing;
        self.animator.start(
            now,
            scroll_y,
            page_end,
            self.autoplay_duration_ms,
            Box::new(self.curve),
        )
    }

    /// Pause button: flips between playing and paused when the animator
    /// accepts the change; otherwise the mode is left untouched.
    pub fn toggle_pause(&mut self, now: f64) -> BarMode {
        match self.mode {
            BarMode::Playing => {
                if self.animator.pause(now) {
                    self.mode = BarMode::Paused;
                }
            }
            BarMode::Paused => {
                if self.animator.resume(now) {
                    self.mode = BarMode::Playing;
                }
            }
            BarMode::Entry => {}
        }
        self.mode
    }

    /// Skip button: abandon autoplay and jump to the end quickly.
    pub fn skip(&mut self, now: f64, scroll_y: f64, page_end: f64) -> TaskId {
        self.mode = BarMode::Playing;
        self.animator
            .skip(now, scroll_y, page_end, self.skip_duration_ms)
    }

    /// Manual scrolling always wins. Returns true when a task was cancelled.
    pub fn manual_input(&mut self, input: ManualInput) -> bool {
        if !input.cancels_autoplay() || !self.animator.is_active() {
            return false;
        }
        self.animator.stop();
        self.mode = BarMode::Entry;
        true
    }

    pub fn frame(&mut self, id: TaskId, now: f64) -> FrameOutcome {
        match self.animator.step(id, now) {
            Step::Idle => FrameOutcome::Idle,
            Step::Scroll(y) => FrameOutcome::ScrollTo(y),
            Step::Finished(y) => {
                self.mode = BarMode::Entry;
                FrameOutcome::Finished(y)
            }
        }
    }
}
