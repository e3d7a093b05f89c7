use yew::prelude::*;

use crate::components::contact_form::ContactFormCard;
use crate::config;
use crate::engine::{Pose, Reveal, SectionDescriptor};
use crate::sections::SectionProps;

pub const ID: &str = "contact";

struct ContactLine {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    href: Option<&'static str>,
}

const LINES: [ContactLine; 3] = [
    ContactLine {
        icon: "📞",
        label: "Téléphone",
        value: "(450) 000-0000",
        href: Some("tel:+14500000000"),
    },
    ContactLine {
        icon: "✉",
        label: "Email",
        value: "info@arsenalelectrique.ca",
        href: Some("mailto:info@arsenalelectrique.ca"),
    },
    ContactLine {
        icon: "📍",
        label: "Zone de service",
        value: "Laval · Rosemère · Terrebonne · Boisbriand",
        href: None,
    },
];

/// Both columns hang off the grid wrapper, which never moves itself.
pub fn descriptor(order: usize) -> SectionDescriptor {
    let reveals = vec![
        Reveal::new("contact-grid", "contact-info")
            .from(Pose::offset(0.0, 3.0).hidden())
            .lines(config::reveal::CONTACT_INFO),
        Reveal::new("contact-grid", "contact-form")
            .from(Pose::offset(0.0, 4.0).rotated(0.5).hidden())
            .lines(config::reveal::CONTACT_FORM),
    ];
    SectionDescriptor::flowing(ID, order, reveals)
}

#[function_component(Contact)]
pub fn contact(props: &SectionProps) -> Html {
    html! {
        <section id={ID} ref={props.node_ref.clone()} class="contact">
            <div class="contact-grid" data-anim="contact-grid">
                <div data-anim="contact-info">
                    <h2 class="heading contact-heading">
                        {"Parlons de votre"}<br />
                        <span class="contact-accent">{"projet."}</span>
                    </h2>
                    <p class="contact-lead">{"Racontez-nous vos besoins. On vous répond sous 24h."}</p>

                    <div class="contact-lines">
                        { for LINES.iter().map(|line| {
                            let value = match line.href {
                                Some(href) => html! { <a href={href}>{line.value}</a> },
                                None => html! { <span>{line.value}</span> },
                            };
                            html! {
                                <div class="contact-line">
                                    <div class="contact-icon">{line.icon}</div>
                                    <div>
                                        <div class="contact-label">{line.label}</div>
                                        <div class="contact-value">{value}</div>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>

                <div data-anim="contact-form">
                    <ContactFormCard />
                </div>
            </div>

            <style>
                {r#"
                .contact {
                    position: relative;
                    padding: 8rem 7vw;
                    background: var(--gray-light);
                    color: var(--navy);
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                }
                .contact-heading {
                    color: var(--navy);
                }
                .contact-accent {
                    color: var(--gold-dark);
                }
                .contact-lead {
                    margin: 0 0 2.5rem;
                    font-size: 1.125rem;
                    color: #4b5563;
                }
                .contact-lines {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-line {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .contact-icon {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    background: rgba(245, 179, 1, 0.15);
                    font-size: 1.25rem;
                }
                .contact-label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: #6b7280;
                }
                .contact-value {
                    font-weight: 600;
                }
                .contact-value a:hover {
                    color: var(--gold-dark);
                }
                @media (max-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
