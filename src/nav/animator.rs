use crate::nav::lock::LockToken;

/// Cubic ease-in-out over `t` in `[0, 1]`
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(u64);

/// What the frame loop should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Completed,
    /// A newer scroll took over; stop without touching the page
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    pub id: RunId,
    pub start_time: f64,
    pub start: f64,
    pub end: f64,
    pub token: LockToken,
}

impl AnimationRun {
    /// Returns (position, progress) at `now`. Progress is clamped to `[0, 1]`
    /// and the final position is exactly `end`.
    pub fn sample(&self, now: f64, duration_ms: f64) -> (f64, f64) {
        let progress = ((now - self.start_time) / duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return (self.end, 1.0);
        }
        let position = self.start + (self.end - self.start) * ease_in_out_cubic(progress);
        (position, progress)
    }
}

/// Issues run ids and holds the one run allowed to drive frames.
#[derive(Debug, Default)]
pub struct SmoothScroller {
    latest: u64,
    run: Option<AnimationRun>,
}

impl SmoothScroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a new id. Any run holding an older id is superseded from here on.
    pub fn issue(&mut self) -> RunId {
        self.latest += 1;
        if let Some(old) = self.run.take() {
            log::debug!("smooth scroll run {} superseded by {}", old.id.0, self.latest);
        }
        RunId(self.latest)
    }

    pub fn begin(&mut self, run: AnimationRun) {
        if run.id.0 == self.latest {
            self.run = Some(run);
        }
    }

    pub fn is_current(&self, id: RunId) -> bool {
        id.0 == self.latest
    }

    /// The live run for `id`, or `None` if `id` has been superseded
    pub fn current(&self, id: RunId) -> Option<&AnimationRun> {
        self.run.as_ref().filter(|run| run.id == id && self.is_current(id))
    }

    pub fn finish(&mut self, id: RunId) -> Option<AnimationRun> {
        if self.current(id).is_some() {
            self.run.take()
        } else {
            None
        }
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::lock::ScrollLock;

    #[test]
    fn easing_hits_fixed_points() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);
        assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn sample_clamps_to_endpoints() {
        let mut lock = ScrollLock::new();
        let mut scroller = SmoothScroller::new();
        let run = AnimationRun {
            id: scroller.issue(),
            start_time: 100.0,
            start: 200.0,
            end: 1200.0,
            token: lock.acquire(),
        };
        assert_eq!(run.sample(100.0, 1100.0), (200.0, 0.0));
        assert_eq!(run.sample(650.0, 1100.0), (700.0, 0.5));
        assert_eq!(run.sample(1200.0, 1100.0), (1200.0, 1.0));
        assert_eq!(run.sample(5000.0, 1100.0), (1200.0, 1.0));
    }

    #[test]
    fn newer_issue_invalidates_older_run() {
        let mut lock = ScrollLock::new();
        let mut scroller = SmoothScroller::new();
        let first = scroller.issue();
        scroller.begin(AnimationRun {
            id: first,
            start_time: 0.0,
            start: 0.0,
            end: 500.0,
            token: lock.acquire(),
        });
        assert!(scroller.current(first).is_some());

        let second = scroller.issue();
        assert!(scroller.current(first).is_none());
        assert!(scroller.finish(first).is_none());
        assert!(scroller.is_current(second));
        assert!(!scroller.is_animating());
    }
}
