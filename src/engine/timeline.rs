use crate::config;
use crate::engine::easing::Ease;

/// Visual state of one animated element. Offsets are viewport units so the
/// same timeline reads the same on every screen size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x_vw: f64,
    pub y_vh: f64,
    pub opacity: f64,
    pub scale: f64,
    pub rotate_deg: f64,
}

impl Pose {
    /// Visible, zero offset, natural size.
    pub const RESTING: Pose = Pose {
        x_vw: 0.0,
        y_vh: 0.0,
        opacity: 1.0,
        scale: 1.0,
        rotate_deg: 0.0,
    };

    pub const fn offset(x_vw: f64, y_vh: f64) -> Pose {
        Pose { x_vw, y_vh, ..Pose::RESTING }
    }

    pub const fn faded(self, opacity: f64) -> Pose {
        Pose { opacity, ..self }
    }

    pub const fn hidden(self) -> Pose {
        self.faded(0.0)
    }

    pub const fn scaled(self, scale: f64) -> Pose {
        Pose { scale, ..self }
    }

    pub const fn rotated(self, rotate_deg: f64) -> Pose {
        Pose { rotate_deg, ..self }
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            x_vw: mix(self.x_vw, to.x_vw),
            y_vh: mix(self.y_vh, to.y_vh),
            opacity: mix(self.opacity, to.opacity),
            scale: mix(self.scale, to.scale),
            rotate_deg: mix(self.rotate_deg, to.rotate_deg),
        }
    }

    #[cfg(test)]
    pub fn is_resting(&self) -> bool {
        const EPS: f64 = 1e-9;
        (self.x_vw - Pose::RESTING.x_vw).abs() < EPS
            && (self.y_vh - Pose::RESTING.y_vh).abs() < EPS
            && (self.opacity - Pose::RESTING.opacity).abs() < EPS
            && (self.scale - Pose::RESTING.scale).abs() < EPS
            && (self.rotate_deg - Pose::RESTING.rotate_deg).abs() < EPS
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.3}vw, {:.3}vh, 0) scale({:.4}) rotate({:.3}deg)",
            self.x_vw, self.y_vh, self.scale, self.rotate_deg
        )
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity.clamp(0.0, 1.0))
    }
}

/// One from/to interpolation of a target group over a window of progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    target: &'static str,
    from: Pose,
    to: Pose,
    start: f64,
    end: f64,
    ease: Ease,
    stagger: f64,
}

impl Tween {
    pub fn new(target: &'static str) -> Self {
        Tween {
            target,
            from: Pose::RESTING,
            to: Pose::RESTING,
            start: 0.0,
            end: 1.0,
            ease: Ease::Linear,
            stagger: 0.0,
        }
    }

    pub fn from(mut self, pose: Pose) -> Self {
        self.from = pose;
        self
    }

    pub fn to(mut self, pose: Pose) -> Self {
        self.to = pose;
        self
    }

    pub fn span(mut self, start: f64, end: f64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Shifts the window of the n-th matched element by `n * step`.
    pub fn stagger(mut self, step: f64) -> Self {
        self.stagger = step;
        self
    }

    fn window(&self, index: usize) -> (f64, f64) {
        let shift = self.stagger * index as f64;
        (self.start + shift, (self.end + shift).min(1.0))
    }

    fn sample(&self, index: usize, p: f64) -> Pose {
        let (start, end) = self.window(index);
        let t = if end > start { (p - start) / (end - start) } else { 1.0 };
        self.from.lerp(&self.to, self.ease.apply(t))
    }
}

/// The ordered tweens of one pinned section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new() -> Self {
        Timeline::default()
    }

    pub fn tween(mut self, tween: Tween) -> Self {
        self.tweens.push(tween);
        self
    }

    /// Adds the same tween for several target groups.
    pub fn group(mut self, targets: &[&'static str], template: Tween) -> Self {
        for &target in targets {
            self.tweens.push(Tween {
                target,
                ..template.clone()
            });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Distinct targets in the order they were first added.
    pub fn targets(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for tween in &self.tweens {
            if !out.contains(&tween.target) {
                out.push(tween.target);
            }
        }
        out
    }

    /// Pose of the `index`-th element of `target` at progress `p`. The
    /// latest tween that has started wins; before any has started the first
    /// tween's `from` pose holds.
    pub fn pose_at(&self, target: &str, index: usize, p: f64) -> Option<Pose> {
        let mut first = None;
        let mut active = None;
        for tween in self.tweens.iter().filter(|t| t.target == target) {
            first.get_or_insert(tween);
            if tween.window(index).0 <= p {
                active = Some(tween);
            }
        }
        match (active, first) {
            (Some(tween), _) => Some(tween.sample(index, p)),
            (None, Some(tween)) => Some(tween.from),
            (None, None) => None,
        }
    }
}

/// Where local progress sits relative to a pinned section's phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    BeforeRange,
    Entering,
    Settled,
    Exiting,
    AfterRange,
}

impl Phase {
    pub fn of(p: f64) -> Phase {
        if p <= 0.0 {
            Phase::BeforeRange
        } else if p < config::pin::ENTRANCE_END {
            Phase::Entering
        } else if p <= config::pin::EXIT_START {
            Phase::Settled
        } else if p < 1.0 {
            Phase::Exiting
        } else {
            Phase::AfterRange
        }
    }
}

/// What a pinned section should render for the latest progress reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Render the timeline at this clamped progress.
    Scrub(f64),
    /// Back-leave: put every element at rest.
    Rest,
    /// Nothing changed since the last frame.
    Hold,
}

/// Per-section phase machine. Remembers only the last phase it saw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinTracker {
    last: Option<Phase>,
}

impl PinTracker {
    #[cfg(test)]
    pub fn phase(&self) -> Option<Phase> {
        self.last
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn observe(&mut self, p: f64) -> Frame {
        let phase = Phase::of(p);
        let frame = match (self.last, phase) {
            (Some(Phase::BeforeRange), Phase::BeforeRange) => Frame::Hold,
            (Some(Phase::AfterRange), Phase::AfterRange) => Frame::Hold,
            (Some(_), Phase::BeforeRange) => Frame::Rest,
            _ => Frame::Scrub(p.clamp(0.0, 1.0)),
        };
        if self.last != Some(phase) {
            tracing::trace!(?phase, p, "pin phase change");
        }
        self.last = Some(phase);
        frame
    }
}

/// Progress actually shown by a pinned section. It trails the scroll
/// position, closing most of the gap within the lag, so a flick of the wheel
/// plays out instead of jumping. The first reading is shown as is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrubFollower {
    shown: Option<f64>,
    target: f64,
}

impl ScrubFollower {
    /// Sets where the section should end up; `p` is clamped to [0,1].
    pub fn aim(&mut self, p: f64) {
        self.target = p.clamp(0.0, 1.0);
    }

    /// Moves `dt_s` seconds closer to the target and returns the progress
    /// to show. A lag of zero follows the target exactly.
    pub fn advance(&mut self, dt_s: f64, lag_s: f64) -> f64 {
        let target = self.target;
        let shown = self.shown.get_or_insert(target);
        if lag_s <= 0.0 {
            *shown = target;
        } else {
            // Four time constants per lag: ~98% of the gap is gone after it.
            let k = 1.0 - (-4.0 * dt_s.max(0.0) / lag_s).exp();
            *shown += (target - *shown) * k;
            if (target - *shown).abs() < config::pin::CATCH_UP_EPSILON {
                *shown = target;
            }
        }
        *shown
    }

    pub fn is_caught_up(&self) -> bool {
        self.shown.map_or(true, |shown| shown == self.target)
    }

    pub fn reset(&mut self) {
        *self = ScrubFollower::default();
    }
}

/// Somewhere poses can be written: the DOM in the browser, a map in tests.
pub trait Stage {
    /// Number of elements matched by `target` inside this stage.
    fn count(&mut self, target: &str) -> usize;

    fn apply(&mut self, target: &str, index: usize, pose: Pose);

    /// Distance in pixels from the viewport top to the first element matched
    /// by `target`, when it exists.
    fn viewport_top(&mut self, target: &str) -> Option<f64>;
}

/// Writes `frame` for every element driven by `timeline`.
pub fn render<S: Stage>(timeline: &Timeline, frame: Frame, stage: &mut S) {
    let p = match frame {
        Frame::Hold => return,
        Frame::Rest => None,
        Frame::Scrub(p) => Some(p),
    };
    for target in timeline.targets() {
        for index in 0..stage.count(target) {
            let pose = match p {
                Some(p) => timeline.pose_at(target, index, p).unwrap_or(Pose::RESTING),
                None => Pose::RESTING,
            };
            stage.apply(target, index, pose);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory stage: a fixed number of elements per target.
    #[derive(Default)]
    pub(crate) struct MemoryStage {
        pub counts: HashMap<&'static str, usize>,
        pub poses: HashMap<(String, usize), Pose>,
        pub tops: HashMap<&'static str, f64>,
    }

    impl MemoryStage {
        pub fn with(counts: &[(&'static str, usize)]) -> Self {
            MemoryStage {
                counts: counts.iter().copied().collect(),
                ..MemoryStage::default()
            }
        }

        pub fn pose(&self, target: &str, index: usize) -> Option<Pose> {
            self.poses.get(&(target.to_string(), index)).copied()
        }
    }

    impl Stage for MemoryStage {
        fn count(&mut self, target: &str) -> usize {
            self.counts.get(target).copied().unwrap_or(0)
        }

        fn apply(&mut self, target: &str, index: usize, pose: Pose) {
            self.poses.insert((target.to_string(), index), pose);
        }

        fn viewport_top(&mut self, target: &str) -> Option<f64> {
            self.tops.get(target).copied()
        }
    }

    fn cards_timeline() -> Timeline {
        Timeline::new()
            .tween(
                Tween::new("card")
                    .from(Pose::offset(18.0, 0.0).hidden())
                    .to(Pose::RESTING)
                    .span(0.1, 0.2)
                    .stagger(0.04),
            )
            .tween(
                Tween::new("card")
                    .from(Pose::RESTING)
                    .to(Pose::offset(14.0, 0.0).hidden())
                    .span(0.7, 1.0)
                    .ease(Ease::Power2In),
            )
    }

    #[test]
    fn phase_boundaries() {
        assert_eq!(Phase::of(-0.2), Phase::BeforeRange);
        assert_eq!(Phase::of(0.0), Phase::BeforeRange);
        assert_eq!(Phase::of(0.1), Phase::Entering);
        assert_eq!(Phase::of(0.3), Phase::Settled);
        assert_eq!(Phase::of(0.7), Phase::Settled);
        assert_eq!(Phase::of(0.85), Phase::Exiting);
        assert_eq!(Phase::of(1.0), Phase::AfterRange);
    }

    #[test]
    fn before_first_tween_holds_its_from_pose() {
        let timeline = cards_timeline();
        let pose = timeline.pose_at("card", 0, 0.05).unwrap();
        assert_eq!(pose, Pose::offset(18.0, 0.0).hidden());
    }

    #[test]
    fn settle_phase_is_at_rest() {
        let timeline = cards_timeline();
        for index in 0..3 {
            assert!(timeline.pose_at("card", index, 0.5).unwrap().is_resting());
        }
    }

    #[test]
    fn stagger_delays_later_elements() {
        let timeline = cards_timeline();
        let first = timeline.pose_at("card", 0, 0.15).unwrap();
        let third = timeline.pose_at("card", 2, 0.15).unwrap();
        assert!(first.opacity > third.opacity);
    }

    #[test]
    fn exit_ends_hidden() {
        let timeline = cards_timeline();
        let pose = timeline.pose_at("card", 1, 1.0).unwrap();
        assert_eq!(pose.opacity, 0.0);
        assert!((pose.x_vw - 14.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_target_has_no_pose() {
        assert!(cards_timeline().pose_at("missing", 0, 0.5).is_none());
    }

    #[test]
    fn tracker_resets_on_back_leave_and_holds_while_outside() {
        let mut tracker = PinTracker::default();
        assert_eq!(tracker.observe(-0.5), Frame::Scrub(0.0));
        assert_eq!(tracker.observe(-0.2), Frame::Hold);
        assert_eq!(tracker.observe(0.9), Frame::Scrub(0.9));
        assert_eq!(tracker.observe(1.4), Frame::Scrub(1.0));
        assert_eq!(tracker.observe(1.6), Frame::Hold);
        assert_eq!(tracker.observe(0.4), Frame::Scrub(0.4));
        assert_eq!(tracker.observe(0.0), Frame::Rest);
        assert_eq!(tracker.phase(), Some(Phase::BeforeRange));
    }

    #[test]
    fn forward_then_back_restores_resting_pose() {
        let timeline = cards_timeline();
        let mut stage = MemoryStage::with(&[("card", 3)]);
        let mut tracker = PinTracker::default();

        for step in 0..=20 {
            let p = step as f64 * 0.05;
            render(&timeline, tracker.observe(p), &mut stage);
        }
        assert_eq!(stage.pose("card", 0).unwrap().opacity, 0.0);

        for step in (0..=20).rev() {
            let p = step as f64 * 0.05;
            render(&timeline, tracker.observe(p), &mut stage);
        }
        for index in 0..3 {
            assert!(stage.pose("card", index).unwrap().is_resting());
        }
    }

    #[test]
    fn follower_shows_first_reading_then_trails() {
        let mut follower = ScrubFollower::default();
        follower.aim(0.2);
        assert_eq!(follower.advance(0.0, 0.6), 0.2);
        assert!(follower.is_caught_up());

        follower.aim(0.8);
        assert_eq!(follower.advance(0.0, 0.6), 0.2);
        let partway = follower.advance(0.15, 0.6);
        assert!(partway > 0.2 && partway < 0.8);
        assert!(!follower.is_caught_up());

        for _ in 0..200 {
            follower.advance(0.016, 0.6);
        }
        assert_eq!(follower.advance(0.016, 0.6), 0.8);
        assert!(follower.is_caught_up());
    }

    #[test]
    fn follower_lands_exactly_on_range_edges() {
        let mut follower = ScrubFollower::default();
        follower.aim(0.5);
        follower.advance(0.0, 0.6);
        follower.aim(-3.0);
        let mut shown = 0.5;
        for _ in 0..200 {
            shown = follower.advance(0.016, 0.6);
        }
        assert_eq!(shown, 0.0);
        assert_eq!(Phase::of(shown), Phase::BeforeRange);
    }

    #[test]
    fn zero_lag_follows_exactly() {
        let mut follower = ScrubFollower::default();
        follower.aim(0.1);
        follower.advance(0.0, 0.0);
        follower.aim(0.9);
        assert_eq!(follower.advance(0.0, 0.0), 0.9);
    }

    #[test]
    fn transform_is_css() {
        let css = Pose::offset(-8.0, 2.5).scaled(1.1).transform();
        assert_eq!(css, "translate3d(-8.000vw, 2.500vh, 0) scale(1.1000) rotate(0.000deg)");
    }
}
