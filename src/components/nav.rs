use yew::prelude::*;
use web_sys::{window, MouseEvent};

use crate::config;
use crate::engine::dom::{self, ListenerGuard};

pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Services", target: "services" },
    NavLink { label: "Secteurs", target: "residential" },
    NavLink { label: "Projets", target: "projects" },
    NavLink { label: "Contact", target: "contact" },
];

pub const PHONE_HREF: &str = "tel:+14500000000";

fn is_solid(scroll_y: f64) -> bool {
    scroll_y > config::nav::SOLID_AFTER_PX
}

fn current_scroll() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| is_solid(current_scroll()));

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let guard = ListenerGuard::window("scroll", move || {
                is_scrolled.set(is_solid(current_scroll()));
            });
            move || drop(guard)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    // Anchors scroll smoothly and always close the mobile menu.
    let go_to = {
        let menu_open = menu_open.clone();
        move |target: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                dom::scroll_to_section(target);
            })
        }
    };

    let solid = *is_scrolled;
    let open = *menu_open;

    html! {
        <>
            <nav class={classes!("top-nav", solid.then(|| "solid"))}>
                <div class="nav-content">
                    <a href="#hero" class="nav-logo" onclick={go_to("hero")}>
                        {"Arsenal "}<span class="text-gold">{"Électrique"}</span>
                    </a>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a href={format!("#{}", link.target)} class="nav-link" onclick={go_to(link.target)}>
                                {link.label}
                            </a>
                        }) }
                        <a href="#contact" class="btn-gold nav-cta" onclick={go_to("contact")}>
                            {"Devis gratuit"}
                        </a>
                    </div>
                    <button class={classes!("burger-menu", open.then(|| "open"))} onclick={toggle_menu} aria-label="Menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            <div class={classes!("mobile-menu", open.then(|| "open"))}>
                { for NAV_LINKS.iter().enumerate().map(|(index, link)| {
                    let delay = if open { index as u32 * config::nav::MENU_STAGGER_MS } else { 0 };
                    html! {
                        <a
                            href={format!("#{}", link.target)}
                            class="mobile-link"
                            style={format!("transition-delay: {}ms;", delay)}
                            onclick={go_to(link.target)}
                        >
                            {link.label}
                        </a>
                    }
                }) }
                <a href={PHONE_HREF} class="btn-gold mobile-call">{"Appeler"}</a>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: background 0.5s ease, box-shadow 0.5s ease;
                }
                .top-nav.solid {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 5rem;
                    padding: 0 3rem;
                }
                .nav-logo {
                    font-weight: 700;
                    font-size: 1.25rem;
                    color: #fff;
                    transition: color 0.3s ease;
                }
                .top-nav.solid .nav-logo {
                    color: var(--navy);
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.9);
                }
                .top-nav.solid .nav-link {
                    color: rgba(7, 10, 18, 0.8);
                }
                .nav-link:hover {
                    color: var(--gold);
                }
                .nav-cta {
                    padding: 0.7rem 1.5rem;
                    font-size: 0.875rem;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .top-nav.solid .burger-menu span {
                    background: var(--navy);
                }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    display: none;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    background: rgba(7, 10, 18, 0.98);
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.5s ease;
                }
                .mobile-menu.open {
                    opacity: 1;
                    pointer-events: auto;
                }
                .mobile-link {
                    font-weight: 700;
                    font-size: 1.875rem;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.4s ease, transform 0.4s ease;
                }
                .mobile-menu.open .mobile-link {
                    opacity: 1;
                    transform: translateY(0);
                }
                .mobile-call {
                    margin-top: 1rem;
                }
                @media (max-width: 1024px) {
                    .nav-content { padding: 0 1.5rem; }
                    .nav-links { display: none; }
                    .burger-menu { display: flex; }
                    .mobile-menu { display: flex; }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_past_threshold() {
        assert!(!is_solid(0.0));
        assert!(!is_solid(100.0));
        assert!(is_solid(100.5));
    }

    #[test]
    fn links_point_at_registered_sections() {
        let targets: Vec<&str> = NAV_LINKS.iter().map(|l| l.target).collect();
        assert_eq!(targets, ["services", "residential", "projects", "contact"]);
    }
}
