use yew::prelude::*;

use crate::components::pinned_section::PinnedSection;
use crate::config;
use crate::engine::dom;
use crate::engine::{Ease, Pose, SectionDescriptor, Timeline, Tween};
use crate::sections::SectionProps;

pub const ID: &str = "residential";

const FEATURES: [(&str, &str); 3] = [
    ("💡", "Éclairage architectural & LED"),
    ("🔌", "Circuits dédiés (cuisine, bureau, atelier)"),
    ("🛡", "Tableaux électriques & protection"),
];

pub fn descriptor(order: usize) -> SectionDescriptor {
    let timeline = Timeline::new()
        .tween(Tween::new("image").from(Pose::RESTING.scaled(1.1).faded(0.7)).span(0.0, 0.3))
        .tween(Tween::new("headline").from(Pose::offset(0.0, 10.0).hidden()).span(0.0, 0.2))
        .tween(Tween::new("body").from(Pose::offset(0.0, 6.0).hidden()).span(0.1, 0.25))
        .tween(
            Tween::new("feature")
                .from(Pose::offset(-6.0, 0.0).hidden())
                .span(0.14, 0.22)
                .stagger(0.03),
        )
        .tween(Tween::new("cta").from(Pose::offset(0.0, 4.0).hidden()).span(0.18, 0.3))
        .group(
            &["headline", "body", "features"],
            Tween::new("headline")
                .to(Pose::offset(-12.0, 0.0).hidden())
                .span(0.7, 1.0)
                .ease(Ease::Power2In),
        )
        .tween(
            Tween::new("cta")
                .to(Pose::offset(0.0, 8.0).hidden())
                .span(0.75, 1.0)
                .ease(Ease::Power2In),
        );
    SectionDescriptor::pinned(ID, order, config::pin::SCROLL_EXTENT, timeline)
}

#[function_component(Residential)]
pub fn residential(props: &SectionProps) -> Html {
    let to_contact = Callback::from(|_: MouseEvent| dom::scroll_to_section("contact"));

    html! {
        <PinnedSection id={ID} node_ref={props.node_ref.clone()}>
            <div class="backdrop" data-anim="image">
                <img src="/living_room_lighting.jpg" alt="Éclairage de salon moderne" />
            </div>
            <div class="section-inner">
                <div class="residential-copy">
                    <h2 class="heading" data-anim="headline">
                        {"Chez vous,"}<br />
                        <span class="text-gold">{"tout fonctionne."}</span>
                    </h2>
                    <p class="lead" data-anim="body">
                        {"Éclairage bien pensé, circuits sécuritaires et tableaux modernisés pour votre tranquillité d'esprit."}
                    </p>
                    <ul class="feature-list" data-anim="features">
                        { for FEATURES.iter().map(|(icon, text)| html! {
                            <li data-anim="feature">
                                <span class="feature-icon">{*icon}</span>
                                <span>{*text}</span>
                            </li>
                        }) }
                    </ul>
                    <div data-anim="cta">
                        <button class="btn-gold" onclick={to_contact}>{"Planifier une visite →"}</button>
                    </div>
                </div>
            </div>
            <div class="spark-line right"></div>

            <style>
                {r#"
                .residential-copy {
                    max-width: 42rem;
                }
                .feature-list {
                    list-style: none;
                    margin: 0 0 2.5rem;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .feature-list li {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    color: rgba(255, 255, 255, 0.9);
                }
                .feature-icon {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.5rem;
                    background: rgba(245, 179, 1, 0.1);
                }
                .spark-line {
                    position: absolute;
                    top: 25%;
                    bottom: 25%;
                    width: 1px;
                    background: linear-gradient(to bottom, transparent, rgba(245, 179, 1, 0.3), transparent);
                }
                .spark-line.right {
                    right: 10vw;
                }
                "#}
            </style>
        </PinnedSection>
    }
}
