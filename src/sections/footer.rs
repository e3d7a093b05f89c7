use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::nav::{NAV_LINKS, PHONE_HREF};
use crate::engine::dom;

fn copyright_line(year: i32) -> String {
    format!("© {} Arsenal Électrique · Licence RBQ 0000-0000-01", year)
}

/// Plain footer. Not registered with the engine: it neither pins nor reveals.
#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-top">
                <div>
                    <div class="footer-brand">
                        {"ARSENAL "}<span class="text-gold">{"ÉLECTRIQUE"}</span>
                    </div>
                    <p class="footer-tagline">{"Service professionnel sur la Rive-Nord de Montréal"}</p>
                    <div class="footer-badges">
                        <span class="footer-badge">{"RBQ 0000-0000-01"}</span>
                        <span class="footer-badge">{"CMMTQ"}</span>
                    </div>
                </div>

                <nav class="footer-links">
                    { for NAV_LINKS.iter().map(|link| {
                        let target = link.target;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            dom::scroll_to_section(target);
                        });
                        html! {
                            <a href={format!("#{}", target)} {onclick}>{link.label}</a>
                        }
                    }) }
                </nav>

                <a href={PHONE_HREF} class="footer-phone">{"(450) 000-0000"}</a>
            </div>

            <div class="footer-bottom">{copyright_line(year)}</div>

            <style>
                {r#"
                .site-footer {
                    padding: 4rem 7vw 2rem;
                    background: var(--navy);
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    color: var(--gray-text);
                }
                .footer-top {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .footer-brand {
                    font-weight: 900;
                    font-size: 1.25rem;
                    letter-spacing: 0.04em;
                    color: #fff;
                }
                .footer-tagline {
                    margin: 0.75rem 0 1rem;
                    font-size: 0.875rem;
                }
                .footer-badges {
                    display: flex;
                    gap: 0.75rem;
                }
                .footer-badge {
                    padding: 0.4rem 0.9rem;
                    border: 1px solid rgba(245, 179, 1, 0.3);
                    border-radius: 999px;
                    font-family: "JetBrains Mono", monospace;
                    font-size: 0.75rem;
                    color: var(--gold);
                }
                .footer-links {
                    display: flex;
                    gap: 2rem;
                }
                .footer-links a:hover,
                .footer-phone:hover {
                    color: var(--gold);
                }
                .footer-phone {
                    font-weight: 600;
                    color: #fff;
                }
                .footer-bottom {
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    font-size: 0.8rem;
                    text-align: center;
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year_and_licence() {
        let line = copyright_line(2026);
        assert!(line.starts_with("© 2026 Arsenal Électrique"));
        assert!(line.ends_with("RBQ 0000-0000-01"));
    }
}
