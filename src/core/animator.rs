use super::ease::{Easing, SkipEase};

/// Identifies one scheduled task; frame callbacks carry it so a callback
/// scheduled for a cancelled task becomes a no-op.
pub type TaskId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    /// Main autoplay scroll; can be paused and resumed.
    Autoplay,
    /// Fixed-duration jump to the end; ignores pause.
    Skip,
}

/// One programmatic scroll in flight.
///
/// Elapsed time is `(now - time_origin) + elapsed_at_pause` while running and
/// `elapsed_at_pause` while paused; `time_origin` is re-anchored on resume.
pub struct ScrollTask {
    id: TaskId,
    kind: TaskKind,
    start_pos: f64,
    target: f64,
    duration_ms: f64,
    elapsed_at_pause: f64,
    time_origin: f64,
    paused: bool,
    ease: Box<dyn Easing>,
}

impl ScrollTask {
    #[inline]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn elapsed_ms(&self, now: f64) -> f64 {
        if self.paused {
            self.elapsed_at_pause
        } else {
            (now - self.time_origin).max(0.0) + self.elapsed_at_pause
        }
    }

    fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms(now) / self.duration_ms).clamp(0.0, 1.0)
    }

    fn position_at(&self, t: f64) -> f64 {
        if t >= 1.0 {
            return self.target;
        }
        self.start_pos + (self.target - self.start_pos) * self.ease.ease(t)
    }
}

impl std::fmt::Debug for ScrollTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollTask")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("start_pos", &self.start_pos)
            .field("target", &self.target)
            .field("duration_ms", &self.duration_ms)
            .field("elapsed_at_pause", &self.elapsed_at_pause)
            .field("paused", &self.paused)
            .finish()
    }
}

/// Result of driving the animator for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Nothing to do: no task, a stale id, or the task is paused.
    Idle,
    /// Write this scroll position and schedule another frame.
    Scroll(f64),
    /// Write this final position; the task has been discarded.
    Finished(f64),
}

/// Single-slot owner of the active programmatic scroll.
#[derive(Debug, Default)]
pub struct ScrollAnimator {
    task: Option<ScrollTask>,
    next_id: TaskId,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any active task with a new one scrolling from `from` to `target`.
    pub fn start(
        &mut self,
        now: f64,
        from: f64,
        target: f64,
        duration_ms: f64,
        ease: Box<dyn Easing>,
    ) -> TaskId {
        self.spawn(TaskKind::Autoplay, now, from, target, duration_ms, ease)
    }

    /// Replace any active task with a skip to `target`.
    pub fn skip(&mut self, now: f64, from: f64, target: f64, duration_ms: f64) -> TaskId {
        self.spawn(
            TaskKind::Skip,
            now,
            from,
            target,
            duration_ms,
            Box::new(SkipEase),
        )
    }

    fn spawn(
        &mut self,
        kind: TaskKind,
        now: f64,
        from: f64,
        target: f64,
        duration_ms: f64,
        ease: Box<dyn Easing>,
    ) -> TaskId {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.task = Some(ScrollTask {
            id,
            kind,
            start_pos: from,
            target,
            duration_ms,
            elapsed_at_pause: 0.0,
            time_origin: now,
            paused: false,
            ease,
        });
        id
    }

    /// Freeze the autoplay task. Returns false when idle, already paused, or
    /// the active task is a skip.
    pub fn pause(&mut self, now: f64) -> bool {
        match &mut self.task {
            Some(task) if task.kind == TaskKind::Autoplay && !task.paused => {
                task.elapsed_at_pause += (now - task.time_origin).max(0.0);
                task.paused = true;
                true
            }
            _ => false,
        }
    }

    /// Continue a paused task from where it stopped. Returns false unless a
    /// paused task was resumed.
    pub fn resume(&mut self, now: f64) -> bool {
        match &mut self.task {
            Some(task) if task.paused => {
                task.time_origin = now;
                task.paused = false;
                true
            }
            _ => false,
        }
    }

    /// Discard the active task without touching the scroll position.
    pub fn stop(&mut self) -> bool {
        self.task.take().is_some()
    }

    /// Advance the task `id` to time `now`.
    pub fn step(&mut self, id: TaskId, now: f64) -> Step {
        let Some(task) = self.task.as_ref().filter(|t| t.id == id && !t.paused) else {
            return Step::Idle;
        };
        let t = task.progress(now);
        let position = task.position_at(t);
        if t >= 1.0 {
            self.task = None;
            Step::Finished(position)
        } else {
            Step::Scroll(position)
        }
    }

    #[inline]
    pub fn task(&self) -> Option<&ScrollTask> {
        self.task.as_ref()
    }

    #[inline]
    pub fn active_id(&self) -> Option<TaskId> {
        self.task.as_ref().map(|t| t.id)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.task.as_ref().is_some_and(|t| t.paused)
    }

    /// Id to schedule frames for, if the task is currently running.
    #[inline]
    pub fn running_id(&self) -> Option<TaskId> {
        self.task.as_ref().filter(|t| !t.paused).map(|t| t.id)
    }
}
