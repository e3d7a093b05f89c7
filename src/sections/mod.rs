//! One module per page section. Each pinned or flowing section exposes its
//! component and the descriptor the engine registers for it.

pub mod commercial;
pub mod contact;
pub mod ev;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod residential;
pub mod safety;
pub mod services;

use yew::prelude::*;

use crate::engine::{EngineError, SectionRegistry};

/// Document order; registry index `i` is the `i`-th entry.
pub const SECTION_IDS: [&str; 8] = [
    hero::ID,
    services::ID,
    residential::ID,
    commercial::ID,
    safety::ID,
    ev::ID,
    projects::ID,
    contact::ID,
];

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    /// Element the engine measures and animates inside.
    pub node_ref: NodeRef,
}

pub fn registry() -> Result<SectionRegistry, EngineError> {
    SectionRegistry::new(vec![
        hero::descriptor(0),
        services::descriptor(1),
        residential::descriptor(2),
        commercial::descriptor(3),
        safety::descriptor(4),
        ev::descriptor(5),
        projects::descriptor(6),
        contact::descriptor(7),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::timeline::Phase;

    #[test]
    fn page_registers_every_section_in_order() {
        let registry = registry().unwrap();
        let ids: Vec<&str> = registry.iter().map(|s| s.id).collect();
        assert_eq!(ids, SECTION_IDS);
        assert_eq!(registry.iter().filter(|s| s.is_pinned()).count(), 6);
        for section in registry.iter().filter(|s| s.is_pinned()) {
            assert_eq!(section.scroll_extent(), 1.3);
        }
    }

    #[test]
    fn settle_phase_is_static_for_every_pinned_section() {
        let registry = registry().unwrap();
        for section in registry.iter().filter(|s| s.is_pinned()) {
            for target in section.timeline.targets() {
                for index in 0..4 {
                    for p in [0.35, 0.5, 0.7] {
                        assert_eq!(Phase::of(p), Phase::Settled);
                        let pose = section.timeline.pose_at(target, index, p).unwrap();
                        assert!(pose.is_resting(), "{}/{}[{}] at {}", section.id, target, index, p);
                    }
                }
            }
        }
    }

    #[test]
    fn pinned_sections_exit_hidden() {
        let registry = registry().unwrap();
        for section in registry.iter().filter(|s| s.is_pinned()) {
            let pose = section.timeline.pose_at("headline", 0, 1.0).unwrap();
            assert_eq!(pose.opacity, 0.0, "{}", section.id);
        }
    }

    #[test]
    fn flowing_sections_only_reveal() {
        let registry = registry().unwrap();
        for section in registry.iter().filter(|s| !s.is_pinned()) {
            assert!(section.timeline.is_empty());
            assert!(!section.reveals.is_empty(), "{}", section.id);
        }
    }
}
