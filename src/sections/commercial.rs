use yew::prelude::*;

use crate::components::pinned_section::PinnedSection;
use crate::config;
use crate::engine::dom;
use crate::engine::{Ease, Pose, SectionDescriptor, Timeline, Tween};
use crate::sections::SectionProps;

pub const ID: &str = "commercial";

struct Stat {
    icon: &'static str,
    value: &'static str,
    label: &'static str,
}

const STATS: [Stat; 3] = [
    Stat { icon: "🏢", value: "180+", label: "projets livrés" },
    Stat { icon: "⏱", value: "4 200+", label: "heures d'intervention" },
    Stat { icon: "👥", value: "92%", label: "clients récurrents" },
];

pub fn descriptor(order: usize) -> SectionDescriptor {
    let timeline = Timeline::new()
        .tween(Tween::new("image").from(Pose::RESTING.scaled(1.08).faded(0.8)).span(0.0, 0.3))
        .tween(Tween::new("headline").from(Pose::offset(-10.0, 0.0).hidden()).span(0.0, 0.2))
        .tween(Tween::new("body").from(Pose::offset(-6.0, 0.0).hidden()).span(0.1, 0.25))
        .tween(
            Tween::new("stat")
                .from(Pose::offset(0.0, 6.0).hidden())
                .span(0.14, 0.22)
                .stagger(0.03),
        )
        .tween(Tween::new("cta").from(Pose::offset(0.0, 4.0).hidden()).span(0.18, 0.3))
        .group(
            &["headline", "body"],
            Tween::new("headline")
                .to(Pose::offset(0.0, -8.0).hidden())
                .span(0.7, 1.0)
                .ease(Ease::Power2In),
        )
        .group(
            &["stats", "cta"],
            Tween::new("stats")
                .to(Pose::offset(0.0, 10.0).hidden())
                .span(0.72, 1.0)
                .ease(Ease::Power2In),
        );
    SectionDescriptor::pinned(ID, order, config::pin::SCROLL_EXTENT, timeline)
}

#[function_component(Commercial)]
pub fn commercial(props: &SectionProps) -> Html {
    let to_contact = Callback::from(|_: MouseEvent| dom::scroll_to_section("contact"));

    html! {
        <PinnedSection id={ID} node_ref={props.node_ref.clone()}>
            <div class="backdrop" data-anim="image">
                <img src="/commercial_panels.jpg" alt="Installation électrique commerciale" />
            </div>
            <div class="section-inner">
                <div class="commercial-copy">
                    <h2 class="heading" data-anim="headline">
                        {"Infrastructure fiable"}<br />
                        <span class="text-sage">{"pour votre activité."}</span>
                    </h2>
                    <p class="lead" data-anim="body">
                        {"Nous installons et modernisons tableaux, éclairage et distribution, avec planning respecté et chantier propre."}
                    </p>
                    <div class="stats" data-anim="stats">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat glass-card" data-anim="stat">
                                <div class="stat-icon">{stat.icon}</div>
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                    <div data-anim="cta">
                        <button class="btn-gold" onclick={to_contact}>{"Demander une estimation →"}</button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .commercial-copy {
                    max-width: 48rem;
                }
                .stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-bottom: 2.5rem;
                }
                .stat {
                    padding: 1.5rem;
                    text-align: center;
                }
                .stat-icon {
                    margin-bottom: 0.75rem;
                    font-size: 1.4rem;
                }
                .stat-value {
                    margin-bottom: 0.25rem;
                    font-weight: 900;
                    font-size: clamp(1.5rem, 3vw, 2.25rem);
                }
                .stat-label {
                    font-size: 0.875rem;
                    color: var(--gray-text);
                }
                @media (max-width: 768px) {
                    .stats { gap: 1rem; }
                    .stat { padding: 1rem; }
                }
                "#}
            </style>
        </PinnedSection>
    }
}
