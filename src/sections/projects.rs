use yew::prelude::*;

use crate::components::lightbox::{Gallery, Lightbox, Slide};
use crate::config;
use crate::engine::{Pose, Reveal, SectionDescriptor};
use crate::sections::SectionProps;

pub const ID: &str = "projects";

pub const PROJECTS: &[Slide] = &[
    Slide { image: "/project_thumb_01.jpg", title: "Tableau électrique moderne", category: "Résidentiel" },
    Slide { image: "/project_thumb_02.jpg", title: "Éclairage cuisine LED", category: "Résidentiel" },
    Slide { image: "/project_thumb_03.jpg", title: "Éclairage paysager", category: "Extérieur" },
    Slide { image: "/project_thumb_04.jpg", title: "Installation commerciale", category: "Commercial" },
    Slide { image: "/project_thumb_05.jpg", title: "Borne de recharge VE", category: "VE" },
    Slide { image: "/project_thumb_06.jpg", title: "Commande intelligente", category: "Résidentiel" },
];

struct Testimonial {
    text: &'static str,
    author: &'static str,
    location: &'static str,
}

const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        text: "Travail nickel, tableau propre et explications claires. Je recommande.",
        author: "Marc L.",
        location: "Rosemère",
    },
    Testimonial {
        text: "Installation de borne rapide, aucune surprise. Top.",
        author: "Sarah T.",
        location: "Laval",
    },
];

const TRUST: [&str; 4] = ["RBQ 0000-0000-01", "CMMTQ", "Assurances", "Garantie"];

pub fn descriptor(order: usize) -> SectionDescriptor {
    let reveals = vec![
        Reveal::new("heading-zone", "heading")
            .from(Pose::offset(0.0, 3.0).hidden())
            .lines(config::reveal::HEADING),
        Reveal::new("grid", "project")
            .from(Pose::offset(0.0, 4.0).scaled(0.98).hidden())
            .lines(config::reveal::GRID)
            .stagger(0.1),
        Reveal::new("testimonials", "testimonial")
            .from(Pose::offset(2.0, 0.0).hidden())
            .lines(config::reveal::HEADING)
            .stagger(0.15)
            .mirror(),
        Reveal::new("trust-zone", "trust")
            .from(Pose::RESTING.hidden())
            .lines(config::reveal::TRUST),
    ];
    SectionDescriptor::flowing(ID, order, reveals)
}

#[function_component(Projects)]
pub fn projects(props: &SectionProps) -> Html {
    let gallery = use_state(|| Gallery::new(PROJECTS.len()));

    let on_change = {
        let gallery = gallery.clone();
        Callback::from(move |next: Gallery| gallery.set(next))
    };

    html! {
        <section id={ID} ref={props.node_ref.clone()} class="projects">
            <div class="flow-inner" data-anim="heading-zone">
                <div data-anim="heading">
                    <span class="eyebrow">{"Portfolio"}</span>
                    <h2 class="heading">{"Réalisations récentes"}</h2>
                    <p class="lead">{"Quelques chantiers sur la Rive-Nord."}</p>
                </div>
            </div>

            <div class="flow-inner project-grid" data-anim="grid">
                { for PROJECTS.iter().enumerate().map(|(index, project)| {
                    let onclick = {
                        let gallery = gallery.clone();
                        Callback::from(move |_: MouseEvent| gallery.set(gallery.open_at(index)))
                    };
                    html! {
                        <div class="project-card" data-anim="project" {onclick}>
                            <img src={project.image} alt={project.title} loading="lazy" />
                            <div class="project-overlay">
                                <span class="project-category">{project.category}</span>
                                <h3>{project.title}</h3>
                            </div>
                        </div>
                    }
                }) }
            </div>

            <div class="flow-inner testimonials" data-anim="testimonials">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <div class="testimonial glass-card" data-anim="testimonial">
                        <div class="quote-mark">{"“"}</div>
                        <p>{format!("« {} »", t.text)}</p>
                        <div class="testimonial-author">
                            <span class="avatar">{t.author.chars().take(1).collect::<String>()}</span>
                            <div>
                                <div class="author-name">{t.author}</div>
                                <div class="author-location">{t.location}</div>
                            </div>
                        </div>
                    </div>
                }) }
            </div>

            <div class="flow-inner" data-anim="trust-zone">
                <div class="trust-bar" data-anim="trust">
                    { for TRUST.iter().map(|item| html! {
                        <span class="trust-item"><span class="dot"></span>{*item}</span>
                    }) }
                </div>
            </div>

            <Lightbox slides={PROJECTS} gallery={*gallery} {on_change} />

            <style>
                {r#"
                .projects {
                    position: relative;
                    padding: 8rem 0;
                    background: var(--navy);
                }
                .flow-inner {
                    padding: 0 7vw;
                    margin-bottom: 4rem;
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .project-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    aspect-ratio: 4 / 3;
                    cursor: pointer;
                }
                .project-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .project-card:hover img {
                    transform: scale(1.05);
                }
                .project-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 1.25rem;
                    background: linear-gradient(to top, rgba(7, 10, 18, 0.9), rgba(7, 10, 18, 0.2), transparent);
                    opacity: 0;
                    transform: translateY(1rem);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .project-card:hover .project-overlay {
                    opacity: 1;
                    transform: translateY(0);
                }
                .project-overlay h3 {
                    margin: 0;
                    font-size: 1.125rem;
                }
                .project-category {
                    font-family: "JetBrains Mono", monospace;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: var(--gold);
                }
                .testimonials {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .testimonial {
                    padding: 2rem;
                }
                .quote-mark {
                    font-size: 3rem;
                    line-height: 1;
                    color: var(--gold);
                }
                .testimonial p {
                    margin: 0 0 1.5rem;
                    font-size: 1.125rem;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.9);
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(245, 179, 1, 0.2);
                    color: var(--gold);
                    font-weight: 700;
                    font-size: 0.875rem;
                }
                .author-name {
                    font-weight: 500;
                }
                .author-location {
                    font-size: 0.875rem;
                    color: var(--gray-text);
                }
                .trust-bar {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 3rem;
                    padding: 1.5rem 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    background: rgba(14, 21, 35, 0.4);
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .trust-item {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .trust-item .dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: var(--gold);
                }
                @media (max-width: 1024px) {
                    .project-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 640px) {
                    .project-grid { grid-template-columns: 1fr; }
                    .testimonials { grid-template-columns: 1fr; }
                    .trust-bar { gap: 1.5rem; }
                }
                "#}
            </style>
        </section>
    }
}
