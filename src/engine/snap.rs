use crate::config;
use crate::engine::easing::Ease;
use crate::engine::registry::{Layout, PinnedRange};

/// Decides where a released scroll should settle.
///
/// Inside (or within the buffer of) a pinned range the view is pulled to the
/// nearest range center; everywhere else the position is left alone so
/// flowing sections scroll freely.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapCoordinator {
    ranges: Vec<PinnedRange>,
    max_scroll: f64,
    buffer: f64,
}

impl SnapCoordinator {
    /// `None` when there is nothing to snap to.
    pub fn from_layout(layout: &Layout) -> Option<Self> {
        if layout.ranges().is_empty() || !(layout.max_scroll() > 0.0) {
            return None;
        }
        Some(SnapCoordinator {
            ranges: layout.ranges().to_vec(),
            max_scroll: layout.max_scroll(),
            buffer: config::snap::RANGE_BUFFER,
        })
    }

    pub fn ranges(&self) -> &[PinnedRange] {
        &self.ranges
    }

    /// Maps a normalized scroll position to its snap target.
    pub fn snap_to(&self, v: f64) -> f64 {
        if !v.is_finite() || !self.ranges.iter().any(|r| r.contains(v, self.buffer)) {
            return v;
        }
        // Strict comparison keeps the earliest range on ties.
        let mut target = self.ranges[0].center;
        for range in &self.ranges[1..] {
            if (range.center - v).abs() < (target - v).abs() {
                target = range.center;
            }
        }
        target
    }

    /// Seconds to spend travelling between two normalized positions: grows
    /// with distance, clamped to the configured bounds.
    pub fn duration(current: f64, target: f64) -> f64 {
        use config::snap::{FULL_DURATION_DISTANCE, MAX_DURATION_S, MIN_DURATION_S};
        let ratio = ((target - current).abs() / FULL_DURATION_DISTANCE).min(1.0);
        let ratio = if ratio.is_finite() { ratio } else { 1.0 };
        (MIN_DURATION_S + (MAX_DURATION_S - MIN_DURATION_S) * ratio).clamp(MIN_DURATION_S, MAX_DURATION_S)
    }

    /// Tween from `scroll_px` to its snap target, or `None` when already
    /// there or in free scroll.
    pub fn plan(&self, scroll_px: f64) -> Option<SnapPlan> {
        let current = scroll_px / self.max_scroll;
        let target = self.snap_to(current);
        let to_px = target * self.max_scroll;
        if (to_px - scroll_px).abs() < config::snap::MIN_TRAVEL_PX {
            return None;
        }
        Some(SnapPlan {
            from_px: scroll_px,
            to_px,
            duration_s: Self::duration(current, target),
        })
    }
}

/// One snap animation, sampled by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPlan {
    pub from_px: f64,
    pub to_px: f64,
    pub duration_s: f64,
}

impl SnapPlan {
    pub fn position_at(&self, elapsed_s: f64) -> f64 {
        let t = if self.duration_s > 0.0 { elapsed_s / self.duration_s } else { 1.0 };
        self.from_px + (self.to_px - self.from_px) * Ease::Power2Out.apply(t)
    }

    pub fn is_done(&self, elapsed_s: f64) -> bool {
        elapsed_s >= self.duration_s
    }

    /// Position and completion at `now_ms` for a tween started at
    /// `started_ms`, both read from the same clock.
    pub fn sample(&self, started_ms: f64, now_ms: f64) -> (f64, bool) {
        let elapsed_s = ((now_ms - started_ms) / 1000.0).max(0.0);
        (self.position_at(elapsed_s), self.is_done(elapsed_s))
    }
}

/// The installed snap rule. `generation` tells successive rules apart in
/// logs.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapRule {
    pub generation: u64,
    pub coordinator: SnapCoordinator,
}

/// Holder for the single page-wide snap rule: install, replace, dispose.
#[derive(Debug, Default)]
pub struct SnapSlot {
    rule: Option<SnapRule>,
    generation: u64,
}

impl SnapSlot {
    /// Installs `coordinator`, disposing any previous rule first. Returns
    /// the new rule's generation.
    pub fn install(&mut self, coordinator: SnapCoordinator) -> u64 {
        self.dispose();
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            ranges = coordinator.ranges().len(),
            "snap rule installed"
        );
        self.rule = Some(SnapRule {
            generation: self.generation,
            coordinator,
        });
        self.generation
    }

    /// Returns whether a rule was removed.
    pub fn dispose(&mut self) -> bool {
        match self.rule.take() {
            Some(rule) => {
                tracing::debug!(generation = rule.generation, "snap rule disposed");
                true
            }
            None => false,
        }
    }

    pub fn rule(&self) -> Option<&SnapRule> {
        self.rule.as_ref()
    }
}
