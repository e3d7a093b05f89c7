use yew::prelude::*;

use crate::components::pinned_section::PinnedSection;
use crate::config;
use crate::engine::dom;
use crate::engine::{Ease, Pose, SectionDescriptor, Timeline, Tween};
use crate::sections::SectionProps;

pub const ID: &str = "safety";

const BADGES: [(&str, &str, &str); 2] = [
    ("🛡", "RBQ 0000-0000-01", "Licence valide"),
    ("🏅", "CMMTQ", "Corporation des maîtres électriciens du Québec"),
];

const STANDARDS: [&str; 4] = [
    "Conformité C25-01",
    "Travail documenté",
    "Tests et vérifications",
    "Garantie sur tous les travaux",
];

pub fn descriptor(order: usize) -> SectionDescriptor {
    let timeline = Timeline::new()
        .tween(Tween::new("headline").from(Pose::offset(0.0, 10.0).hidden()).span(0.0, 0.2))
        .tween(Tween::new("body").from(Pose::offset(0.0, 6.0).hidden()).span(0.1, 0.25))
        .tween(
            Tween::new("badge")
                .from(Pose::RESTING.scaled(0.92).hidden())
                .span(0.14, 0.22)
                .stagger(0.04),
        )
        .tween(
            Tween::new("standard")
                .from(Pose::offset(-4.0, 0.0).hidden())
                .span(0.16, 0.22)
                .stagger(0.02),
        )
        .tween(Tween::new("cta").from(Pose::offset(0.0, 4.0).hidden()).span(0.2, 0.3))
        .group(
            &["headline", "body", "badges", "standards"],
            Tween::new("headline")
                .to(Pose::offset(-10.0, 0.0).hidden())
                .span(0.7, 1.0)
                .ease(Ease::Power2In),
        )
        .tween(
            Tween::new("cta")
                .to(Pose::RESTING.hidden())
                .span(0.75, 1.0)
                .ease(Ease::Power2In),
        );
    SectionDescriptor::pinned(ID, order, config::pin::SCROLL_EXTENT, timeline)
}

#[function_component(Safety)]
pub fn safety(props: &SectionProps) -> Html {
    let to_contact = Callback::from(|_: MouseEvent| dom::scroll_to_section("contact"));

    html! {
        <PinnedSection id={ID} node_ref={props.node_ref.clone()} class="safety">
            <div class="blueprint"></div>
            <div class="section-inner">
                <div class="safety-grid">
                    <div>
                        <h2 class="heading" data-anim="headline">
                            {"Conformité &"}<br />
                            <span class="text-gold">{"sécurité avant tout."}</span>
                        </h2>
                        <p class="lead" data-anim="body">
                            {"Nous suivons la C25-01 et les exigences locales. Chaque travail est documenté, testé et garanti."}
                        </p>
                        <div class="standards" data-anim="standards">
                            { for STANDARDS.iter().map(|s| html! {
                                <div class="standard" data-anim="standard">
                                    <span class="text-gold">{"✓"}</span>
                                    <span>{*s}</span>
                                </div>
                            }) }
                        </div>
                        <div data-anim="cta">
                            <button class="btn-gold" onclick={to_contact}>{"Vérifier mon installation →"}</button>
                        </div>
                    </div>

                    <div class="badges" data-anim="badges">
                        { for BADGES.iter().map(|(icon, title, subtitle)| html! {
                            <div class="badge glass-card" data-anim="badge">
                                <div class="badge-icon">{*icon}</div>
                                <div>
                                    <h3>{*title}</h3>
                                    <p>{*subtitle}</p>
                                </div>
                            </div>
                        }) }
                        <div class="assurance">
                            <span class="text-gold">{"Assurances complètes"}</span>
                            {" et "}
                            <span class="text-gold">{"garantie décennale"}</span>
                            {" pour votre protection."}
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .safety {
                    background: linear-gradient(135deg, var(--navy), var(--navy) 60%, var(--navy-light));
                }
                .blueprint {
                    position: absolute;
                    inset: 0;
                    opacity: 0.03;
                    background-image:
                        linear-gradient(#fff 0.5px, transparent 0.5px),
                        linear-gradient(90deg, #fff 0.5px, transparent 0.5px);
                    background-size: 40px 40px;
                }
                .safety-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: center;
                    width: 100%;
                }
                .standards {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }
                .standard {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .badges {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .badge {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 2rem;
                }
                .badge-icon {
                    flex-shrink: 0;
                    width: 3.5rem;
                    height: 3.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    background: rgba(245, 179, 1, 0.1);
                    font-size: 1.6rem;
                }
                .badge h3 {
                    margin: 0 0 0.25rem;
                    font-size: 1.25rem;
                }
                .badge p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: var(--gray-text);
                }
                .assurance {
                    padding: 1.5rem;
                    border: 1px solid rgba(245, 179, 1, 0.2);
                    border-radius: 1rem;
                    background: rgba(245, 179, 1, 0.05);
                    text-align: center;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                @media (max-width: 1024px) {
                    .safety-grid { grid-template-columns: 1fr; gap: 2rem; }
                }
                "#}
            </style>
        </PinnedSection>
    }
}
