use yew::prelude::*;

use crate::components::pinned_section::PinnedSection;
use crate::config;
use crate::engine::dom;
use crate::engine::{Ease, Pose, SectionDescriptor, Timeline, Tween};
use crate::sections::SectionProps;

pub const ID: &str = "ev-charging";

const CHIPS: [(&str, &str); 3] = [
    ("⚡", "Installation 240V"),
    ("📄", "Conseil borne & subventions"),
    ("👁", "Gaine dissimulée"),
];

pub fn descriptor(order: usize) -> SectionDescriptor {
    let timeline = Timeline::new()
        .tween(Tween::new("image").from(Pose::RESTING.scaled(1.08).faded(0.8)).span(0.0, 0.3))
        .tween(Tween::new("headline").from(Pose::offset(-10.0, 0.0).hidden()).span(0.0, 0.2))
        .tween(Tween::new("body").from(Pose::offset(-6.0, 0.0).hidden()).span(0.1, 0.25))
        .tween(
            Tween::new("chip")
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
            &["chips", "cta"],
            Tween::new("chips")
                .to(Pose::offset(0.0, 10.0).hidden())
                .span(0.72, 1.0)
                .ease(Ease::Power2In),
        );
    SectionDescriptor::pinned(ID, order, config::pin::SCROLL_EXTENT, timeline)
}

#[function_component(EvCharging)]
pub fn ev_charging(props: &SectionProps) -> Html {
    let to_contact = Callback::from(|_: MouseEvent| dom::scroll_to_section("contact"));

    html! {
        <PinnedSection id={ID} node_ref={props.node_ref.clone()}>
            <div class="backdrop" data-anim="image">
                <img src="/ev_charging_night.jpg" alt="Recharge de véhicule électrique la nuit" />
            </div>
            <div class="section-inner">
                <div class="ev-copy">
                    <h2 class="heading" data-anim="headline">
                        {"La recharge,"}<br />
                        <span class="text-gold">{"simple et rapide."}</span>
                    </h2>
                    <p class="lead" data-anim="body">
                        {"Nous installons votre borne de recharge avec câblage adapté, gaine propre et mise en service complète."}
                    </p>
                    <div class="chips" data-anim="chips">
                        { for CHIPS.iter().map(|(icon, text)| html! {
                            <div class="chip" data-anim="chip">
                                <span class="text-gold">{*icon}</span>
                                <span>{*text}</span>
                            </div>
                        }) }
                    </div>
                    <div data-anim="cta">
                        <button class="btn-gold" onclick={to_contact}>{"Prévoir mon installation →"}</button>
                    </div>
                </div>
            </div>
            <div class="ev-plug">{"🔌"}</div>

            <style>
                {r#"
                .ev-copy {
                    max-width: 42rem;
                }
                .chips {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-bottom: 2.5rem;
                }
                .chip {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.25rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    background: rgba(14, 21, 35, 0.6);
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.9);
                }
                .ev-plug {
                    position: absolute;
                    right: 15vw;
                    bottom: 20vh;
                    z-index: 20;
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(245, 179, 1, 0.1);
                    font-size: 1.8rem;
                    animation: pulseSlow 3s ease-in-out infinite;
                }
                "#}
            </style>
        </PinnedSection>
    }
}
