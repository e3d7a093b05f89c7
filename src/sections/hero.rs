use yew::prelude::*;

use crate::components::pinned_section::PinnedSection;
use crate::config;
use crate::engine::dom;
use crate::engine::{Ease, Pose, SectionDescriptor, Timeline, Tween};
use crate::sections::SectionProps;

pub const ID: &str = "hero";

/// Words of the headline, each animated on its own during the load intro.
const HEADLINE: [(&str, bool); 4] = [
    ("L'électricité,", false),
    ("exécutée", false),
    ("avec", true),
    ("précision.", true),
];

/// The hero starts fully visible (the load intro is time based), so its
/// scroll timeline only carries the exit.
pub fn descriptor(order: usize) -> SectionDescriptor {
    let exit = |target, to: Pose, start: f64| {
        Tween::new(target).to(to).span(start, 1.0).ease(Ease::Power2In)
    };
    let timeline = Timeline::new()
        .tween(exit("headline", Pose::offset(-18.0, 0.0).hidden(), 0.7))
        .tween(exit("sub", Pose::offset(0.0, 10.0).hidden(), 0.72))
        .tween(exit("cta", Pose::offset(0.0, 10.0).hidden(), 0.74))
        .tween(exit("trust", Pose::RESTING.hidden(), 0.8));
    SectionDescriptor::pinned(ID, order, config::pin::SCROLL_EXTENT, timeline)
}

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    let to_contact = Callback::from(|_: MouseEvent| dom::scroll_to_section("contact"));
    let to_services = Callback::from(|_: MouseEvent| dom::scroll_to_section("services"));

    html! {
        <PinnedSection id={ID} node_ref={props.node_ref.clone()} class="hero">
            <div class="backdrop hero-image">
                <img src="/hero_night_work.jpg" alt="Électricien au travail" />
            </div>

            <div class="section-inner">
                <div class="hero-content">
                    <h1 class="heading hero-headline" data-anim="headline">
                        { for HEADLINE.iter().enumerate().map(|(i, (word, accent))| html! {
                            <>
                                <span
                                    class={classes!("word", accent.then(|| "text-sage"))}
                                    style={format!("animation-delay: {:.2}s;", 0.7 + i as f64 * 0.04)}
                                >
                                    {*word}
                                </span>
                                { if i == 0 { html! { <br /> } } else { html! { " " } } }
                            </>
                        }) }
                    </h1>

                    <div data-anim="sub">
                        <p class="lead intro" style="animation-delay: 1.0s;">
                            {"Installation, mise aux normes et bornes de recharge pour la Rive-Nord. Travail propre, sécuritaire et certifié."}
                        </p>
                    </div>

                    <div class="hero-ctas" data-anim="cta">
                        <button class="btn-gold intro" style="animation-delay: 1.1s;" onclick={to_contact}>
                            {"Demander un devis →"}
                        </button>
                        <button class="btn-outline intro" style="animation-delay: 1.18s;" onclick={to_services}>
                            {"Voir nos services"}
                        </button>
                    </div>

                    <div data-anim="trust">
                        <div class="hero-trust intro" style="animation-delay: 1.2s;">
                            <span class="trust-pill">{"🛡 RBQ 0000-0000-01"}</span>
                            <span class="trust-pill">{"🏅 CMMTQ certifié"}</span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="hero-spark"></div>

            <style>
                {r#"
                .hero {
                    background: var(--navy);
                }
                .hero-image {
                    animation: heroImage 1.2s ease-out 0.3s both;
                }
                .hero-image::after {
                    background: linear-gradient(90deg, rgba(7, 10, 18, 0.8), rgba(7, 10, 18, 0.6) 50%, rgba(7, 10, 18, 0.4));
                }
                .hero-content {
                    max-width: 56rem;
                }
                .hero-headline {
                    font-size: clamp(2.5rem, 7vw, 4.5rem);
                    margin-bottom: 2rem;
                    perspective: 600px;
                }
                .hero-headline .word {
                    display: inline-block;
                    animation: heroWord 0.7s ease-out both;
                }
                .intro {
                    animation: heroRise 0.5s ease-out both;
                }
                .hero-ctas {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-bottom: 4rem;
                }
                .hero-trust {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }
                .trust-pill {
                    padding: 0.75rem 1.25rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.9);
                }
                .hero-spark {
                    position: absolute;
                    right: 20vw;
                    top: 30vh;
                    z-index: 20;
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                    background: var(--gold);
                    box-shadow: 0 0 18px var(--gold);
                    animation: pulseSlow 3s ease-in-out infinite;
                }
                @keyframes heroImage {
                    from { transform: scale(1.08); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                @keyframes heroWord {
                    from { transform: translateY(28px) rotateX(18deg); opacity: 0; }
                    to { transform: translateY(0) rotateX(0); opacity: 1; }
                }
                @keyframes heroRise {
                    from { transform: translateY(14px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </PinnedSection>
    }
}
