use yew::prelude::*;

use crate::components::pinned_section::PinnedSection;
use crate::config;
use crate::engine::dom;
use crate::engine::{Ease, Pose, SectionDescriptor, Timeline, Tween};
use crate::sections::SectionProps;

pub const ID: &str = "services";

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 3],
}

const SERVICES: [Service; 3] = [
    Service {
        icon: "🏠",
        title: "Installation résidentielle",
        description: "Tableaux, éclairage, prises, circuits dédiés.",
        features: ["Tableaux électriques", "Éclairage LED", "Prises et circuits"],
    },
    Service {
        icon: "📋",
        title: "Mise aux normes",
        description: "Vérification, correction, conformité C25-01.",
        features: ["Inspection complète", "Correction de défauts", "Certification"],
    },
    Service {
        icon: "⚡",
        title: "Bornes de recharge VE",
        description: "Bornes murales et sur pied, câblage 240V, recommandations.",
        features: ["Installation 240V", "Conseil borne", "Gaine dissimulée"],
    },
];

pub fn descriptor(order: usize) -> SectionDescriptor {
    let timeline = Timeline::new()
        .group(
            &["label", "headline"],
            Tween::new("label").from(Pose::offset(-10.0, 0.0).hidden()).span(0.0, 0.22),
        )
        .tween(Tween::new("body").from(Pose::offset(0.0, 6.0).hidden()).span(0.08, 0.26))
        .tween(
            Tween::new("card")
                .from(Pose::offset(18.0, 0.0).hidden().rotated(2.0))
                .span(0.1, 0.2)
                .stagger(0.04),
        )
        .tween(
            Tween::new("card")
                .to(Pose::offset(14.0, 0.0).hidden())
                .span(0.7, 1.0)
                .ease(Ease::Power2In),
        )
        .group(
            &["label", "headline", "body"],
            Tween::new("label")
                .to(Pose::offset(-8.0, 0.0).hidden())
                .span(0.72, 1.0)
                .ease(Ease::Power2In),
        );
    SectionDescriptor::pinned(ID, order, config::pin::SCROLL_EXTENT, timeline)
}

#[function_component(Services)]
pub fn services(props: &SectionProps) -> Html {
    let to_contact = Callback::from(|_: MouseEvent| dom::scroll_to_section("contact"));

    html! {
        <PinnedSection id={ID} node_ref={props.node_ref.clone()} class="services">
            <div class="services-vignette"></div>
            <div class="section-inner">
                <div class="services-grid">
                    <div class="services-copy">
                        <span class="eyebrow" data-anim="label">{"Services"}</span>
                        <h2 class="heading" data-anim="headline">
                            {"Une solution complète,"}<br />
                            <span class="text-gold">{"du panneau à la prise."}</span>
                        </h2>
                        <p class="lead" data-anim="body">
                            {"Nous concevons, installons et maintenons des systèmes fiables, résidentiels et commerciaux, sur la Rive-Nord."}
                        </p>
                    </div>

                    <div class="service-cards">
                        { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                            <div class={classes!("service-card", "glass-card", (i == 1).then(|| "offset"))} data-anim="card">
                                <div class="service-icon">{service.icon}</div>
                                <div class="service-body">
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <div class="service-tags">
                                        { for service.features.iter().map(|f| html! { <span>{*f}</span> }) }
                                    </div>
                                </div>
                                <span class="service-arrow">{"→"}</span>
                            </div>
                        }) }
                        <button class="services-cta" onclick={to_contact}>{"Obtenir un devis gratuit →"}</button>
                    </div>
                </div>
            </div>
            <div class="services-line"></div>

            <style>
                {r#"
                .services {
                    background: linear-gradient(135deg, var(--navy), var(--navy) 60%, var(--navy-light));
                }
                .services-vignette {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(ellipse at center, transparent 0%, rgba(7, 10, 18, 0.4) 100%);
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: center;
                    width: 100%;
                }
                .service-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .service-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1.5rem;
                    cursor: pointer;
                    transition: border-color 0.3s ease;
                }
                .service-card.offset {
                    margin-left: -1rem;
                }
                .service-card:hover {
                    border-color: rgba(245, 179, 1, 0.4);
                }
                .service-icon {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    background: rgba(245, 179, 1, 0.1);
                    font-size: 1.4rem;
                }
                .service-body {
                    flex: 1;
                }
                .service-body h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.125rem;
                }
                .service-card:hover h3 {
                    color: var(--gold);
                }
                .service-body p {
                    margin: 0 0 0.75rem;
                    font-size: 0.875rem;
                    color: var(--gray-text);
                }
                .service-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .service-tags span {
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .service-arrow {
                    color: rgba(255, 255, 255, 0.3);
                }
                .services-cta {
                    margin-top: 1rem;
                    padding: 1.25rem;
                    border: 1px solid rgba(245, 179, 1, 0.3);
                    border-radius: 0.5rem;
                    background: rgba(245, 179, 1, 0.1);
                    color: var(--gold);
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .services-line {
                    position: absolute;
                    left: 50%;
                    top: 0;
                    bottom: 0;
                    width: 1px;
                    background: linear-gradient(to bottom, transparent, rgba(245, 179, 1, 0.2), transparent);
                }
                @media (max-width: 1024px) {
                    .services-grid { grid-template-columns: 1fr; gap: 2rem; }
                    .services-line { display: none; }
                }
                "#}
            </style>
        </PinnedSection>
    }
}
