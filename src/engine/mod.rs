//! Scroll choreography: maps page scroll onto per-section progress, scrubs
//! pinned timelines and flowing reveals, and owns the global snap rule.
//!
//! Everything here except [`dom`] is plain Rust and is tested natively. The
//! browser glue feeds measurements in and pushes poses out through the
//! [`ProgressSource`] and [`Stage`] seams.

pub mod dom;
pub mod easing;
pub mod error;
pub mod progress;
pub mod registry;
pub mod reveal;
pub mod snap;
pub mod timeline;

pub use easing::Ease;
pub use error::EngineError;
pub use progress::ProgressSource;
pub use registry::{Layout, SectionDescriptor, SectionGeometry, SectionRegistry};
pub use reveal::Reveal;
pub use snap::{SnapCoordinator, SnapPlan, SnapSlot};
pub use timeline::{Frame, PinTracker, Pose, ScrubFollower, Stage, Timeline, Tween};

pub struct Choreographer {
    registry: SectionRegistry,
    layout: Option<Layout>,
    trackers: Vec<PinTracker>,
    followers: Vec<ScrubFollower>,
    scrub_lag_s: f64,
    snap: SnapSlot,
}

impl Choreographer {
    /// Pinned timelines follow the scroll position exactly until a lag is set
    /// with [`Choreographer::with_scrub_lag`].
    pub fn new(registry: SectionRegistry) -> Self {
        let trackers = vec![PinTracker::default(); registry.len()];
        let followers = vec![ScrubFollower::default(); registry.len()];
        Choreographer {
            registry,
            layout: None,
            trackers,
            followers,
            scrub_lag_s: 0.0,
            snap: SnapSlot::default(),
        }
    }

    pub fn with_scrub_lag(mut self, lag_s: f64) -> Self {
        self.scrub_lag_s = lag_s.max(0.0);
        self
    }

    #[cfg(test)]
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    #[cfg(test)]
    pub fn snap(&self) -> &SnapSlot {
        &self.snap
    }

    /// Measures the page through `measure` and reinstalls pinned ranges and
    /// the snap rule. On any failure, measuring included, the previous
    /// layout and rule are dropped so nothing acts on stale ranges; scrolling
    /// stays free.
    pub fn rebuild<P, M>(&mut self, source: &P, measure: M) -> Result<(), EngineError>
    where
        P: ProgressSource,
        M: FnOnce(&SectionRegistry) -> Result<Vec<SectionGeometry>, EngineError>,
    {
        let computed = measure(&self.registry).and_then(|geometry| {
            Layout::compute(
                &self.registry,
                &geometry,
                source.viewport_height(),
                source.max_scroll(),
            )
        });
        let layout = match computed {
            Ok(layout) => layout,
            Err(err) => {
                self.teardown();
                return Err(err);
            }
        };

        self.reset_pins();
        match SnapCoordinator::from_layout(&layout) {
            Some(coordinator) => {
                self.snap.install(coordinator);
            }
            None => {
                self.snap.dispose();
                tracing::debug!("no pinned ranges, snapping disabled");
            }
        }
        tracing::debug!(
            pinned = layout.ranges().len(),
            max_scroll = layout.max_scroll(),
            "layout rebuilt"
        );
        self.layout = Some(layout);
        Ok(())
    }

    /// Scrubs every section for the current scroll position. `stage_for`
    /// resolves a registry index to somewhere poses can be written; sections
    /// without a stage are skipped this frame. With a scrub lag, pinned
    /// sections only take aim here and move on [`Choreographer::tick`].
    pub fn scrub<P, S, F>(&mut self, source: &P, mut stage_for: F)
    where
        P: ProgressSource,
        S: Stage,
        F: FnMut(usize) -> Option<S>,
    {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let scroll = source.current_scroll();
        for range in layout.ranges() {
            if let Some(follower) = self.followers.get_mut(range.index) {
                follower.aim(range.progress(scroll));
            }
        }
        self.step_pins(0.0, &mut stage_for);

        let viewport = source.viewport_height();
        for (index, section) in self.registry.iter().enumerate() {
            if section.reveals.is_empty() {
                continue;
            }
            let Some(mut stage) = stage_for(index) else {
                continue;
            };
            for reveal in &section.reveals {
                let Some(top) = stage.viewport_top(reveal.trigger()) else {
                    continue;
                };
                let q = reveal.progress(top, viewport);
                let count = stage.count(reveal.target());
                for i in 0..count {
                    stage.apply(reveal.target(), i, reveal.pose(i, count, q));
                }
            }
        }
    }

    /// Advances lagging pinned sections by `dt_s` seconds. Returns whether
    /// any of them still trails the scroll position.
    pub fn tick<S, F>(&mut self, dt_s: f64, mut stage_for: F) -> bool
    where
        S: Stage,
        F: FnMut(usize) -> Option<S>,
    {
        self.step_pins(dt_s, &mut stage_for);
        self.is_catching_up()
    }

    pub fn is_catching_up(&self) -> bool {
        self.layout.is_some() && self.followers.iter().any(|f| !f.is_caught_up())
    }

    fn step_pins<S, F>(&mut self, dt_s: f64, stage_for: &mut F)
    where
        S: Stage,
        F: FnMut(usize) -> Option<S>,
    {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        for range in layout.ranges() {
            let (Some(section), Some(tracker), Some(follower)) = (
                self.registry.get(range.index),
                self.trackers.get_mut(range.index),
                self.followers.get_mut(range.index),
            ) else {
                continue;
            };
            let frame = tracker.observe(follower.advance(dt_s, self.scrub_lag_s));
            if frame == Frame::Hold {
                continue;
            }
            if let Some(mut stage) = stage_for(range.index) {
                timeline::render(&section.timeline, frame, &mut stage);
            }
        }
    }

    fn reset_pins(&mut self) {
        self.trackers.iter_mut().for_each(PinTracker::reset);
        self.followers.iter_mut().for_each(ScrubFollower::reset);
    }

    /// Snap tween for a scroll gesture that just ended at `scroll_px`.
    pub fn settle(&self, scroll_px: f64) -> Option<SnapPlan> {
        self.snap.rule()?.coordinator.plan(scroll_px)
    }

    /// Drops layout and snap rule; used on unmount and failed rebuilds.
    pub fn teardown(&mut self) {
        self.snap.dispose();
        self.layout = None;
        self.reset_pins();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::progress::FixedProgress;
    use crate::engine::registry::tests::{page, stack};
    use crate::engine::timeline::tests::MemoryStage;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    const VIEWPORT: f64 = 1000.0;

    fn measured() -> (Choreographer, Vec<SectionGeometry>, f64) {
        let registry = page();
        let (geometry, max_scroll) =
            stack(&registry, VIEWPORT, |s| if s.id == "projects" { 1800.0 } else { 1200.0 });
        (Choreographer::new(registry), geometry, max_scroll)
    }

    fn at(scroll: f64, max: f64) -> FixedProgress {
        FixedProgress { scroll, max, viewport: VIEWPORT }
    }

    type Stages = Rc<RefCell<HashMap<usize, MemoryStage>>>;

    /// Routes a section's poses into a shared map keyed by registry index.
    struct SharedStage {
        index: usize,
        stages: Stages,
    }

    impl SharedStage {
        fn with<R>(&self, f: impl FnOnce(&mut MemoryStage) -> R) -> R {
            let mut stages = self.stages.borrow_mut();
            let stage = stages
                .entry(self.index)
                .or_insert_with(|| MemoryStage::with(&[("headline", 1)]));
            f(stage)
        }
    }

    impl Stage for SharedStage {
        fn count(&mut self, target: &str) -> usize {
            self.with(|s| s.count(target))
        }

        fn apply(&mut self, target: &str, index: usize, pose: Pose) {
            self.with(|s| s.apply(target, index, pose))
        }

        fn viewport_top(&mut self, target: &str) -> Option<f64> {
            self.with(|s| s.viewport_top(target))
        }
    }

    fn scrub_all(engine: &mut Choreographer, source: &FixedProgress, stages: &Stages) {
        engine.scrub(source, |index| {
            Some(SharedStage {
                index,
                stages: Rc::clone(stages),
            })
        });
    }

    fn pose_of(stages: &Stages, index: usize, target: &str, element: usize) -> Option<Pose> {
        stages.borrow().get(&index).and_then(|s| s.pose(target, element))
    }

    #[test]
    fn rebuild_installs_one_snap_rule() {
        let (mut engine, geometry, max) = measured();
        engine.rebuild(&at(0.0, max), |_| Ok(geometry.clone())).unwrap();
        engine.rebuild(&at(0.0, max), |_| Ok(geometry.clone())).unwrap();
        assert_eq!(engine.snap().rule().map(|r| r.generation), Some(2));
        assert_eq!(engine.layout().unwrap().ranges().len(), 6);
    }

    #[test]
    fn degenerate_rebuild_disables_snapping() {
        let (mut engine, geometry, max) = measured();
        engine.rebuild(&at(0.0, max), |_| Ok(geometry.clone())).unwrap();
        let err = engine.rebuild(&at(0.0, 0.0), |_| Ok(geometry.clone())).unwrap_err();
        assert!(matches!(err, EngineError::DegenerateGeometry { .. }));
        assert!(engine.snap().rule().is_none());
        assert!(engine.settle(500.0).is_none());
    }

    #[test]
    fn unmeasured_sections_skip_setup() {
        let (mut engine, geometry, max) = measured();
        let err = engine.rebuild(&at(0.0, max), |_| Ok(geometry[..3].to_vec())).unwrap_err();
        assert!(matches!(err, EngineError::MeasurementMismatch { .. }));
        assert!(engine.layout().is_none());
    }

    #[test]
    fn failed_measurement_drops_the_previous_layout() {
        let (mut engine, geometry, max) = measured();
        engine.rebuild(&at(0.0, max), |_| Ok(geometry.clone())).unwrap();
        assert!(engine.snap().rule().is_some());

        let err = engine
            .rebuild(&at(0.0, max), |registry| {
                Err(EngineError::LayoutNotReady(registry.get(3).unwrap().id))
            })
            .unwrap_err();
        assert_eq!(err, EngineError::LayoutNotReady("commercial"));
        assert!(engine.layout().is_none());
        assert!(engine.snap().rule().is_none());
        assert!(engine.settle(1500.0).is_none());
    }

    #[test]
    fn lagging_pin_catches_up_on_ticks() {
        let (engine, geometry, max) = measured();
        let mut engine = engine.with_scrub_lag(0.6);
        engine.rebuild(&at(0.0, max), |_| Ok(geometry.clone())).unwrap();
        let range = engine.layout().unwrap().ranges()[2];
        let midpoint = (range.start_px + range.end_px) / 2.0;
        let stages = Stages::default();

        scrub_all(&mut engine, &at(0.0, max), &stages);
        let hidden = pose_of(&stages, range.index, "headline", 0).unwrap();
        assert_eq!(hidden.opacity, 0.0);
        assert!(!engine.is_catching_up());

        scrub_all(&mut engine, &at(midpoint, max), &stages);
        assert_eq!(pose_of(&stages, range.index, "headline", 0), Some(hidden));
        assert!(engine.is_catching_up());

        let tick = |engine: &mut Choreographer| {
            engine.tick(0.016, |index| {
                Some(SharedStage {
                    index,
                    stages: Rc::clone(&stages),
                })
            })
        };
        tick(&mut engine);
        let moving = pose_of(&stages, range.index, "headline", 0).unwrap();
        assert!(moving.opacity > 0.0 && moving.opacity < 1.0);

        let mut ticks = 1;
        while tick(&mut engine) {
            ticks += 1;
            assert!(ticks < 500);
        }
        assert!(pose_of(&stages, range.index, "headline", 0).unwrap().is_resting());
        assert_eq!(engine.trackers[range.index].phase(), Some(timeline::Phase::Settled));
    }

    #[test]
    fn midpoint_of_third_pin_is_settled_and_visible() {
        let (mut engine, geometry, max) = measured();
        engine.rebuild(&at(0.0, max), |_| Ok(geometry.clone())).unwrap();
        let range = engine.layout().unwrap().ranges()[2];
        let midpoint = (range.start_px + range.end_px) / 2.0;

        let stages = Stages::default();
        scrub_all(&mut engine, &at(midpoint, max), &stages);

        assert!(pose_of(&stages, range.index, "headline", 0).unwrap().is_resting());
        assert_eq!(engine.trackers[range.index].phase(), Some(timeline::Phase::Settled));
    }

    #[test]
    fn scrolling_back_above_a_pin_resets_it() {
        let (mut engine, geometry, max) = measured();
        engine.rebuild(&at(0.0, max), |_| Ok(geometry.clone())).unwrap();
        let range = engine.layout().unwrap().ranges()[1];

        let stages = Stages::default();
        let exiting = range.start_px + (range.end_px - range.start_px) * 0.9;
        scrub_all(&mut engine, &at(exiting, max), &stages);
        assert!(pose_of(&stages, range.index, "headline", 0).unwrap().opacity < 1.0);

        scrub_all(&mut engine, &at(range.start_px - 200.0, max), &stages);
        assert!(pose_of(&stages, range.index, "headline", 0).unwrap().is_resting());
    }

    #[test]
    fn settle_snaps_near_pins_only() {
        let (mut engine, geometry, max) = measured();
        engine.rebuild(&at(0.0, max), |_| Ok(geometry.clone())).unwrap();
        let range = engine.layout().unwrap().ranges()[4];

        let plan = engine.settle(range.start_px + 40.0).unwrap();
        assert!((plan.to_px - range.center * max).abs() < 1e-6);
        assert!(engine.settle(max).is_none());
    }

    #[test]
    fn reveals_follow_their_trigger() {
        let registry = SectionRegistry::new(vec![SectionDescriptor::flowing(
            "projects",
            0,
            vec![Reveal::new("grid", "card").lines((0.75, 0.40))],
        )])
        .unwrap();
        let mut engine = Choreographer::new(registry);
        engine
            .rebuild(&at(0.0, 2000.0), |_| Ok(vec![SectionGeometry::flowing(0.0, 3000.0)]))
            .unwrap();
        assert!(engine.snap().rule().is_none());

        let mut stage = MemoryStage::with(&[("card", 2)]);
        stage.tops.insert("grid", 100.0);
        let stages: Stages = Rc::new(RefCell::new(HashMap::from([(0, stage)])));
        scrub_all(&mut engine, &at(900.0, 2000.0), &stages);
        assert!(pose_of(&stages, 0, "card", 1).unwrap().is_resting());
    }

    #[test]
    fn teardown_drops_everything() {
        let (mut engine, geometry, max) = measured();
        engine.rebuild(&at(0.0, max), |_| Ok(geometry.clone())).unwrap();
        engine.teardown();
        assert!(engine.snap().rule().is_none());
        assert!(engine.layout().is_none());
        assert!(engine.settle(100.0).is_none());
    }
}
