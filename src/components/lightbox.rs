use yew::prelude::*;
use yew_hooks::use_event_with_window;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::engine::dom;

/// Open/closed state and current index of a gallery of `len` images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    current: Option<usize>,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Gallery { len, current: None }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn open_at(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        Gallery { current: Some(index), ..self }
    }

    pub fn close(self) -> Self {
        Gallery { current: None, ..self }
    }

    pub fn next(self) -> Self {
        self.step(1)
    }

    pub fn previous(self) -> Self {
        self.step(self.len.saturating_sub(1))
    }

    /// Same as `open_at` but only while already open.
    pub fn jump(self, index: usize) -> Self {
        if self.is_open() { self.open_at(index) } else { self }
    }

    fn step(self, by: usize) -> Self {
        match self.current {
            Some(i) if self.len > 0 => Gallery { current: Some((i + by) % self.len), ..self },
            _ => self,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub category: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub slides: &'static [Slide],
    pub gallery: Gallery,
    pub on_change: Callback<Gallery>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let gallery = props.gallery;
    let open = gallery.is_open();

    use_effect_with_deps(move |open: &bool| {
        let locked = *open;
        dom::set_scroll_lock(locked);
        move || {
            if locked {
                dom::set_scroll_lock(false);
            }
        }
    }, open);

    {
        let on_change = props.on_change.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !gallery.is_open() {
                return;
            }
            let updated = match e.key().as_str() {
                "Escape" => gallery.close(),
                "ArrowRight" => gallery.next(),
                "ArrowLeft" => gallery.previous(),
                _ => return,
            };
            on_change.emit(updated);
        });
    }

    let Some(index) = gallery.current() else {
        return html! {};
    };
    let Some(slide) = props.slides.get(index) else {
        return html! {};
    };

    let update = |f: fn(Gallery) -> Gallery| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_change.emit(f(gallery));
        })
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="lightbox" onclick={update(Gallery::close)}>
            <button class="lightbox-close" onclick={update(Gallery::close)} aria-label="Fermer">{"×"}</button>
            <button class="lightbox-arrow prev" onclick={update(Gallery::previous)} aria-label="Précédent">{"‹"}</button>
            <button class="lightbox-arrow next" onclick={update(Gallery::next)} aria-label="Suivant">{"›"}</button>

            <figure class="lightbox-figure" onclick={stop}>
                <img src={slide.image} alt={slide.title} />
                <figcaption>
                    <span class="lightbox-category">{slide.category}</span>
                    <h3>{slide.title}</h3>
                </figcaption>
            </figure>

            <div class="lightbox-dots">
                { for (0..props.slides.len()).map(|i| {
                    let on_change = props.on_change.clone();
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.stop_propagation();
                        on_change.emit(gallery.jump(i));
                    });
                    html! {
                        <button class={classes!("lightbox-dot", (i == index).then(|| "active"))} {onclick}></button>
                    }
                }) }
            </div>

            <style>
                {r#"
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(7, 10, 18, 0.95);
                    backdrop-filter: blur(16px);
                }
                .lightbox-close,
                .lightbox-arrow {
                    position: absolute;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.6);
                    cursor: pointer;
                    font-size: 2.5rem;
                    line-height: 1;
                    padding: 0.5rem;
                }
                .lightbox-close:hover,
                .lightbox-arrow:hover {
                    color: #fff;
                }
                .lightbox-close { top: 1.5rem; right: 1.5rem; }
                .lightbox-arrow { top: 50%; transform: translateY(-50%); }
                .lightbox-arrow.prev { left: 1.5rem; }
                .lightbox-arrow.next { right: 1.5rem; }
                .lightbox-figure {
                    margin: 0;
                    max-width: 64rem;
                    max-height: 80vh;
                    padding: 0 5rem;
                    text-align: center;
                }
                .lightbox-figure img {
                    max-width: 100%;
                    max-height: 70vh;
                    margin: 0 auto;
                    object-fit: contain;
                    border-radius: 0.5rem;
                }
                .lightbox-figure h3 {
                    margin: 0.25rem 0 0;
                    font-size: 1.25rem;
                }
                .lightbox-category {
                    display: inline-block;
                    margin-top: 1rem;
                    font-family: "JetBrains Mono", monospace;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: var(--gold);
                }
                .lightbox-dots {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 0.5rem;
                }
                .lightbox-dot {
                    width: 8px;
                    height: 8px;
                    padding: 0;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.3);
                    cursor: pointer;
                }
                .lightbox-dot.active {
                    background: var(--gold);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_then_previous_returns_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let gallery = Gallery::new(len).open_at(start);
                assert_eq!(gallery.next().previous(), gallery);
                assert_eq!(gallery.previous().next(), gallery);
            }
        }
    }

    #[test]
    fn indices_wrap_around() {
        let gallery = Gallery::new(6).open_at(5);
        assert_eq!(gallery.next().current(), Some(0));
        assert_eq!(gallery.open_at(0).previous().current(), Some(5));
    }

    #[test]
    fn single_image_stays_put() {
        let gallery = Gallery::new(1).open_at(0);
        assert_eq!(gallery.next().current(), Some(0));
        assert_eq!(gallery.previous().current(), Some(0));
    }

    #[test]
    fn jump_only_moves_an_open_gallery() {
        let closed = Gallery::new(6);
        assert_eq!(closed.jump(3), closed);
        let open = closed.open_at(1).jump(4);
        assert_eq!(open.current(), Some(4));
        assert_eq!(open.jump(9).current(), Some(4));
    }

    #[test]
    fn close_keeps_length() {
        let gallery = Gallery::new(6).open_at(2).close();
        assert!(!gallery.is_open());
        assert_eq!(gallery.open_at(3).current(), Some(3));
    }

    #[test]
    fn stepping_a_closed_gallery_does_nothing() {
        let gallery = Gallery::new(4);
        assert_eq!(gallery.next(), gallery);
        assert_eq!(gallery.previous(), gallery);
    }
}
