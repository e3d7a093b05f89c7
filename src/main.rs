use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, info, warn};
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod engine;
mod theme;
mod sections;
mod components {
    pub mod nav;
    pub mod pinned_section;
    pub mod lightbox;
    pub mod contact_form;
}

use components::nav::Nav;
use engine::dom::{self, DomStage, ListenerGuard, SnapTween, Ticker, WindowProgress};
use engine::{Choreographer, ProgressSource};
use sections::{
    commercial::Commercial, contact::Contact, ev::EvCharging, footer::Footer, hero::Hero,
    projects::Projects, residential::Residential, safety::Safety, services::Services,
    SECTION_IDS,
};
use theme::GlobalStyles;

type Engine = Rc<RefCell<Option<Choreographer>>>;

fn stage_for(refs: &[NodeRef]) -> impl FnMut(usize) -> Option<DomStage> + '_ {
    move |index| refs.get(index).and_then(|r| r.cast::<Element>()).map(DomStage::new)
}

/// Re-measures every section and reinstalls the layout. Does nothing until
/// the document has finished loading; the `load` listener calls back in.
fn rebuild(engine: &Engine, refs: &[NodeRef]) {
    if !dom::document_ready() {
        debug!("document still loading, layout deferred");
        return;
    }
    let Some(source) = WindowProgress::new() else {
        return;
    };
    let mut slot = engine.borrow_mut();
    let Some(choreographer) = slot.as_mut() else {
        return;
    };
    match choreographer.rebuild(&source, |registry| dom::measure(registry, refs)) {
        Ok(()) => choreographer.scrub(&source, stage_for(refs)),
        Err(err) => warn!("layout not rebuilt: {}", err),
    }
}

/// Keeps lagging pinned sections moving until they reach the scroll
/// position. At most one ticker runs.
fn catch_up(engine: &Engine, refs: &Rc<Vec<NodeRef>>, ticker: &RefCell<Option<Ticker>>) {
    let lagging = engine.borrow().as_ref().map_or(false, Choreographer::is_catching_up);
    if !lagging || ticker.borrow().as_ref().map_or(false, Ticker::is_running) {
        return;
    }
    let Some(mut last) = dom::now_ms() else {
        return;
    };
    let engine = engine.clone();
    let refs = refs.clone();
    *ticker.borrow_mut() = Ticker::start(move |now| {
        let dt_s = (now - last) / 1000.0;
        last = now;
        engine
            .borrow_mut()
            .as_mut()
            .map_or(false, |choreographer| choreographer.tick(dt_s, stage_for(&refs)))
    });
}

/// Runs once scrolling has gone idle: starts a snap tween unless one is
/// already moving the page.
fn settle(engine: &Engine, tween: &RefCell<Option<SnapTween>>) {
    if tween.borrow().as_ref().map_or(false, SnapTween::is_running) {
        return;
    }
    let Some(source) = WindowProgress::new() else {
        return;
    };
    let plan = engine
        .borrow()
        .as_ref()
        .and_then(|choreographer| choreographer.settle(source.current_scroll()));
    if let Some(plan) = plan {
        debug!("snapping {:.0}px -> {:.0}px over {:.2}s", plan.from_px, plan.to_px, plan.duration_s);
        *tween.borrow_mut() = SnapTween::start(plan);
    }
}

#[function_component(App)]
fn app() -> Html {
    let engine: Engine = use_mut_ref(|| match sections::registry() {
        Ok(registry) => Some(Choreographer::new(registry).with_scrub_lag(config::pin::SCRUB_LAG_S)),
        Err(err) => {
            error!("section registry rejected: {}", err);
            None
        }
    });
    let refs = use_memo(
        |_| SECTION_IDS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(),
        (),
    );
    let window_size = use_window_size();

    // Layout depends on the viewport, so every resize rebuilds it.
    {
        let engine = engine.clone();
        let refs = refs.clone();
        use_effect_with_deps(
            move |_| {
                rebuild(&engine, &refs);
                || ()
            },
            window_size,
        );
    }

    {
        let engine = engine.clone();
        let refs = refs.clone();
        use_effect_with_deps(
            move |_| {
                let idle: Rc<RefCell<Option<Timeout>>> = Rc::default();
                let tween: Rc<RefCell<Option<SnapTween>>> = Rc::default();
                let follow: Rc<RefCell<Option<Ticker>>> = Rc::default();

                let on_scroll = {
                    let engine = engine.clone();
                    let refs = refs.clone();
                    let idle = idle.clone();
                    let tween = tween.clone();
                    let follow = follow.clone();
                    ListenerGuard::window("scroll", move || {
                        let Some(source) = WindowProgress::new() else {
                            return;
                        };
                        if let Some(choreographer) = engine.borrow_mut().as_mut() {
                            choreographer.scrub(&source, stage_for(&refs));
                        }
                        catch_up(&engine, &refs, &follow);
                        let engine = engine.clone();
                        let tween = tween.clone();
                        *idle.borrow_mut() = Some(Timeout::new(config::snap::IDLE_MS, move || {
                            settle(&engine, &tween);
                        }));
                    })
                };

                let on_load = {
                    let engine = engine.clone();
                    let refs = refs.clone();
                    ListenerGuard::window("load", move || rebuild(&engine, &refs))
                };

                move || {
                    drop(on_scroll);
                    drop(on_load);
                    idle.borrow_mut().take();
                    tween.borrow_mut().take();
                    follow.borrow_mut().take();
                    if let Some(choreographer) = engine.borrow_mut().as_mut() {
                        choreographer.teardown();
                    }
                }
            },
            (),
        );
    }

    html! {
        <>
            <GlobalStyles />
            <Nav />
            <main>
                <Hero node_ref={refs[0].clone()} />
                <Services node_ref={refs[1].clone()} />
                <Residential node_ref={refs[2].clone()} />
                <Commercial node_ref={refs[3].clone()} />
                <Safety node_ref={refs[4].clone()} />
                <EvCharging node_ref={refs[5].clone()} />
                <Projects node_ref={refs[6].clone()} />
                <Contact node_ref={refs[7].clone()} />
            </main>
            <Footer />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config::trace_level())
            .build(),
    );

    info!("Starting Arsenal Électrique");
    yew::Renderer::<App>::new().render();
}
