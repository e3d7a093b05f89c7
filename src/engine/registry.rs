use crate::config;
use crate::engine::error::EngineError;
use crate::engine::reveal::Reveal;
use crate::engine::timeline::Timeline;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionKind {
    /// Held in place for `scroll_extent` viewport heights of extra scroll.
    Pinned { scroll_extent: f64 },
    /// Ordinary document flow.
    Flowing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub order: usize,
    pub kind: SectionKind,
    pub timeline: Timeline,
    pub reveals: Vec<Reveal>,
}

impl SectionDescriptor {
    pub fn pinned(id: &'static str, order: usize, scroll_extent: f64, timeline: Timeline) -> Self {
        SectionDescriptor {
            id,
            order,
            kind: SectionKind::Pinned { scroll_extent },
            timeline,
            reveals: Vec::new(),
        }
    }

    pub fn flowing(id: &'static str, order: usize, reveals: Vec<Reveal>) -> Self {
        SectionDescriptor {
            id,
            order,
            kind: SectionKind::Flowing,
            timeline: Timeline::new(),
            reveals,
        }
    }

    #[cfg(test)]
    pub fn is_pinned(&self) -> bool {
        matches!(self.kind, SectionKind::Pinned { .. })
    }

    /// Viewport heights reserved beyond the section's natural height.
    #[cfg(test)]
    pub fn scroll_extent(&self) -> f64 {
        match self.kind {
            SectionKind::Pinned { scroll_extent } => scroll_extent,
            SectionKind::Flowing => 0.0,
        }
    }
}

/// Sections in document order. Index in the registry is the arena key used
/// everywhere else (node refs, trackers, ranges).
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self, EngineError> {
        let mut previous: Option<&SectionDescriptor> = None;
        for (position, section) in sections.iter().enumerate() {
            if sections[..position].iter().any(|s| s.id == section.id) {
                return Err(EngineError::InvalidSection {
                    id: section.id,
                    reason: "duplicate id",
                });
            }
            if let Some(prev) = previous {
                if section.order <= prev.order {
                    return Err(EngineError::InvalidSection {
                        id: section.id,
                        reason: "order must strictly increase",
                    });
                }
            }
            if let SectionKind::Pinned { scroll_extent } = section.kind {
                // Also rejects NaN.
                if !(scroll_extent >= config::pin::MIN_SCROLL_EXTENT) {
                    return Err(EngineError::InvalidSection {
                        id: section.id,
                        reason: "pinned sections reserve at least one viewport height",
                    });
                }
                if section.timeline.is_empty() {
                    return Err(EngineError::InvalidSection {
                        id: section.id,
                        reason: "pinned sections need a timeline",
                    });
                }
            }
            previous = Some(section);
        }
        Ok(SectionRegistry { sections })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.sections.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SectionDescriptor> {
        self.sections.get(index)
    }
}

/// Measured outer box of a section, in document pixels. For pinned sections
/// this is the spacer that hosts the reserved scroll and `held_height` is the
/// sticky element inside it; flowing sections leave it at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
    pub held_height: f64,
}

impl SectionGeometry {
    pub fn flowing(top: f64, height: f64) -> Self {
        SectionGeometry { top, height, held_height: 0.0 }
    }

    /// Scroll distance the sticky element stays held: spacer height minus
    /// its own height. `None` when either box was not laid out.
    pub fn held_scroll(&self) -> Option<f64> {
        let held = self.height - self.held_height;
        (self.held_height > 0.0 && held > 0.0).then_some(held)
    }
}

/// Reserved scroll of one pinned section, both in pixels and as fractions of
/// the total scrollable distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinnedRange {
    pub index: usize,
    pub id: &'static str,
    pub start_px: f64,
    pub end_px: f64,
    pub start: f64,
    pub end: f64,
    pub center: f64,
}

impl PinnedRange {
    /// Raw local progress; below 0 before the range and above 1 after it.
    pub fn progress(&self, scroll: f64) -> f64 {
        (scroll - self.start_px) / (self.end_px - self.start_px)
    }

    pub fn contains(&self, v: f64, buffer: f64) -> bool {
        v >= self.start - buffer && v <= self.end + buffer
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    max_scroll: f64,
    ranges: Vec<PinnedRange>,
}

impl Layout {
    /// Derives pinned ranges from measured geometry. `geometry` is indexed
    /// like the registry.
    pub fn compute(
        registry: &SectionRegistry,
        geometry: &[SectionGeometry],
        viewport_height: f64,
        max_scroll: f64,
    ) -> Result<Layout, EngineError> {
        if geometry.len() != registry.len() {
            return Err(EngineError::MeasurementMismatch {
                measured: geometry.len(),
                registered: registry.len(),
            });
        }
        if !(max_scroll.is_finite() && max_scroll > 0.0) {
            return Err(EngineError::DegenerateGeometry { max_scroll });
        }

        let mut ranges: Vec<PinnedRange> = Vec::new();
        for (index, (section, geom)) in registry.iter().zip(geometry).enumerate() {
            let SectionKind::Pinned { scroll_extent } = section.kind else {
                continue;
            };
            // The sticky box releases when its bottom meets the spacer's, which
            // is only known from measurement: `100vh` and `innerHeight` differ
            // on mobile while the URL bar shows.
            let authored = scroll_extent * viewport_height;
            let held = match geom.held_scroll() {
                Some(held) => {
                    if (held - authored).abs() > 1.0 {
                        tracing::debug!(section = section.id, held, authored, "pin hold differs from extent");
                    }
                    held
                }
                None => authored,
            };
            let start_px = geom.top;
            let end_px = geom.top + held;
            let start = (start_px / max_scroll).clamp(0.0, 1.0);
            let end = (end_px / max_scroll).clamp(0.0, 1.0);
            if !(end > start) {
                tracing::debug!(section = section.id, start_px, end_px, "skipping zero-height pin");
                continue;
            }
            if let Some(prev) = ranges.last() {
                if start_px < prev.end_px {
                    tracing::warn!(section = section.id, overlaps = prev.id, "skipping overlapping pin");
                    continue;
                }
            }
            ranges.push(PinnedRange {
                index,
                id: section.id,
                start_px,
                end_px,
                start,
                end,
                center: start + (end - start) * 0.5,
            });
        }

        Ok(Layout {
            max_scroll,
            ranges,
        })
    }

    pub fn ranges(&self) -> &[PinnedRange] {
        &self.ranges
    }

    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::timeline::{Pose, Tween};

    pub(crate) fn fade_timeline() -> Timeline {
        Timeline::new()
            .tween(Tween::new("headline").from(Pose::offset(-10.0, 0.0).hidden()).span(0.0, 0.2))
            .tween(
                Tween::new("headline")
                    .to(Pose::offset(-8.0, 0.0).hidden())
                    .span(0.7, 1.0),
            )
    }

    /// Lays sections out top to bottom: pinned sections occupy one viewport
    /// plus their reserved extent, flowing ones their natural height.
    pub(crate) fn stack(
        registry: &SectionRegistry,
        viewport_height: f64,
        flowing_height: impl Fn(&SectionDescriptor) -> f64,
    ) -> (Vec<SectionGeometry>, f64) {
        let mut top = 0.0;
        let mut geometry = Vec::new();
        for section in registry.iter() {
            let geom = match section.kind {
                SectionKind::Pinned { scroll_extent } => SectionGeometry {
                    top,
                    height: viewport_height * (1.0 + scroll_extent),
                    held_height: viewport_height,
                },
                SectionKind::Flowing => SectionGeometry::flowing(top, flowing_height(section)),
            };
            geometry.push(geom);
            top += geom.height;
        }
        (geometry, top - viewport_height)
    }

    /// Six pinned sections at 1.3 viewport heights followed by two flowing ones.
    pub(crate) fn page() -> SectionRegistry {
        let ids = ["hero", "services", "residential", "commercial", "safety", "ev-charging"];
        let mut sections: Vec<SectionDescriptor> = ids
            .iter()
            .enumerate()
            .map(|(order, &id)| SectionDescriptor::pinned(id, order, 1.3, fade_timeline()))
            .collect();
        sections.push(SectionDescriptor::flowing("projects", 6, Vec::new()));
        sections.push(SectionDescriptor::flowing("contact", 7, Vec::new()));
        SectionRegistry::new(sections).unwrap()
    }

    fn flowing_heights(section: &SectionDescriptor) -> f64 {
        match section.id {
            "projects" => 1800.0,
            _ => 1200.0,
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = SectionRegistry::new(vec![
            SectionDescriptor::flowing("contact", 0, Vec::new()),
            SectionDescriptor::flowing("contact", 1, Vec::new()),
        ])
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidSection { id: "contact", .. }));
    }

    #[test]
    fn rejects_out_of_order_sections() {
        let err = SectionRegistry::new(vec![
            SectionDescriptor::flowing("projects", 3, Vec::new()),
            SectionDescriptor::flowing("contact", 3, Vec::new()),
        ])
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidSection { id: "contact", .. }));
    }

    #[test]
    fn rejects_short_pins() {
        let err = SectionRegistry::new(vec![SectionDescriptor::pinned(
            "hero",
            0,
            0.5,
            fade_timeline(),
        )])
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidSection { id: "hero", .. }));
    }

    #[test]
    fn six_pins_give_six_sorted_disjoint_ranges() {
        let registry = page();
        let (geometry, max_scroll) = stack(&registry, 1000.0, flowing_heights);
        let layout = Layout::compute(&registry, &geometry, 1000.0, max_scroll).unwrap();

        let ranges = layout.ranges();
        assert_eq!(ranges.len(), 6);
        for pair in ranges.windows(2) {
            assert!(pair[0].start < pair[0].end);
            assert!(pair[0].end <= pair[1].start);
        }
        for range in ranges {
            assert!((0.0..=1.0).contains(&range.center));
        }
    }

    #[test]
    fn midpoint_of_third_pin_is_half_progress() {
        let registry = page();
        let (geometry, max_scroll) = stack(&registry, 1000.0, flowing_heights);
        let layout = Layout::compute(&registry, &geometry, 1000.0, max_scroll).unwrap();

        let third = &layout.ranges()[2];
        assert_eq!(third.id, "residential");
        let midpoint = (third.start_px + third.end_px) / 2.0;
        assert!((third.progress(midpoint) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_scroll_is_degenerate() {
        let registry = page();
        let (geometry, _) = stack(&registry, 1000.0, flowing_heights);
        let err = Layout::compute(&registry, &geometry, 1000.0, 0.0).unwrap_err();
        assert_eq!(err, EngineError::DegenerateGeometry { max_scroll: 0.0 });
    }

    #[test]
    fn missing_measurements_are_rejected() {
        let registry = page();
        let err = Layout::compute(&registry, &[], 1000.0, 5000.0).unwrap_err();
        assert!(matches!(err, EngineError::MeasurementMismatch { measured: 0, registered: 8 }));
    }

    #[test]
    fn unlaid_out_pins_with_zero_viewport_are_excluded() {
        let registry = page();
        let (geometry, _) = stack(&registry, 1000.0, flowing_heights);
        let collapsed: Vec<SectionGeometry> = geometry
            .iter()
            .map(|g| SectionGeometry::flowing(g.top, 0.0))
            .collect();
        let layout = Layout::compute(&registry, &collapsed, 0.0, 15_800.0).unwrap();
        assert!(layout.ranges().is_empty());
    }

    #[test]
    fn pin_ends_where_the_spacer_releases_its_sticky_box() {
        let registry = SectionRegistry::new(vec![
            SectionDescriptor::pinned("hero", 0, 1.3, fade_timeline()),
            SectionDescriptor::flowing("contact", 1, Vec::new()),
        ])
        .unwrap();
        // 100vh laid out at 1000px while innerHeight reports 900px.
        let geometry = [
            SectionGeometry { top: 0.0, height: 2300.0, held_height: 1000.0 },
            SectionGeometry::flowing(2300.0, 1200.0),
        ];
        let layout = Layout::compute(&registry, &geometry, 900.0, 2600.0).unwrap();

        let range = layout.ranges()[0];
        assert_eq!(range.end_px, 1300.0);
        assert!((range.progress(1300.0) - 1.0).abs() < 1e-9);
        assert!((range.center * 2600.0 - 650.0).abs() < 1e-9);
    }

    #[test]
    fn unmeasured_sticky_box_falls_back_to_extent() {
        let registry = page();
        let (geometry, max_scroll) = stack(&registry, 1000.0, flowing_heights);
        let unmeasured: Vec<SectionGeometry> = geometry
            .iter()
            .map(|g| SectionGeometry { held_height: 0.0, ..*g })
            .collect();
        let layout = Layout::compute(&registry, &unmeasured, 1000.0, max_scroll).unwrap();
        let first = layout.ranges()[0];
        assert_eq!(first.end_px - first.start_px, 1300.0);
    }
}
