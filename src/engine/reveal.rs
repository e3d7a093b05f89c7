use crate::engine::easing::Ease;
use crate::engine::timeline::Pose;

/// A scrubbed entrance for elements inside a flowing section. Progress runs
/// from 0 when the trigger's top crosses the start line to 1 when it crosses
/// the end line; lines are fractions of the viewport height from its top.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    trigger: &'static str,
    target: &'static str,
    from: Pose,
    lines: (f64, f64),
    stagger: f64,
    mirror_x: bool,
}

impl Reveal {
    pub fn new(trigger: &'static str, target: &'static str) -> Self {
        Reveal {
            trigger,
            target,
            from: Pose::RESTING.hidden(),
            lines: (0.8, 0.55),
            stagger: 0.0,
            mirror_x: false,
        }
    }

    pub fn from(mut self, pose: Pose) -> Self {
        self.from = pose;
        self
    }

    pub fn lines(mut self, lines: (f64, f64)) -> Self {
        self.lines = lines;
        self
    }

    /// Fraction of the reveal by which each successive element lags.
    pub fn stagger(mut self, step: f64) -> Self {
        self.stagger = step;
        self
    }

    /// Even-indexed elements enter from the opposite horizontal side.
    pub fn mirror(mut self) -> Self {
        self.mirror_x = true;
        self
    }

    pub fn trigger(&self) -> &'static str {
        self.trigger
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn progress(&self, top: f64, viewport_height: f64) -> f64 {
        let start = self.lines.0 * viewport_height;
        let end = self.lines.1 * viewport_height;
        if start <= end {
            return if top <= end { 1.0 } else { 0.0 };
        }
        ((start - top) / (start - end)).clamp(0.0, 1.0)
    }

    pub fn pose(&self, index: usize, count: usize, q: f64) -> Pose {
        let span = 1.0 - self.stagger * count.saturating_sub(1) as f64;
        let t = if span > 0.0 {
            ((q - self.stagger * index as f64) / span).clamp(0.0, 1.0)
        } else {
            q.clamp(0.0, 1.0)
        };
        let mut from = self.from;
        if self.mirror_x && index % 2 == 0 {
            from.x_vw = -from.x_vw;
        }
        from.lerp(&Pose::RESTING, Ease::Power2Out.apply(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Reveal {
        Reveal::new("grid", "card")
            .from(Pose::offset(0.0, 5.0).scaled(0.98).hidden())
            .lines((0.75, 0.40))
            .stagger(0.1)
    }

    #[test]
    fn progress_follows_the_trigger_between_lines() {
        let reveal = cards();
        assert_eq!(reveal.progress(900.0, 1000.0), 0.0);
        assert_eq!(reveal.progress(750.0, 1000.0), 0.0);
        assert!((reveal.progress(575.0, 1000.0) - 0.5).abs() < 1e-9);
        assert_eq!(reveal.progress(100.0, 1000.0), 1.0);
    }

    #[test]
    fn fully_revealed_elements_rest() {
        let reveal = cards();
        for index in 0..6 {
            assert!(reveal.pose(index, 6, 1.0).is_resting());
        }
    }

    #[test]
    fn later_elements_lag() {
        let reveal = cards();
        let first = reveal.pose(0, 6, 0.3);
        let last = reveal.pose(5, 6, 0.3);
        assert!(first.opacity > last.opacity);
        assert_eq!(last.opacity, 0.0);
    }

    #[test]
    fn mirrored_reveal_alternates_sides() {
        let reveal = Reveal::new("testimonials", "testimonial")
            .from(Pose::offset(2.0, 0.0).hidden())
            .mirror();
        assert!(reveal.pose(0, 2, 0.0).x_vw < 0.0);
        assert!(reveal.pose(1, 2, 0.0).x_vw > 0.0);
    }
}
