//! Browser side of the engine: reads the window, writes inline styles,
//! drives snap tweens and scrub catch-up. Nothing in here is unit tested;
//! it is kept thin.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, EventTarget, HtmlElement, NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::NodeRef;

use crate::config;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressSource;
use crate::engine::registry::{SectionGeometry, SectionKind, SectionRegistry};
use crate::engine::snap::SnapPlan;
use crate::engine::timeline::{Pose, Stage};

/// Live scroll readings from `window`.
pub struct WindowProgress {
    window: web_sys::Window,
}

impl WindowProgress {
    pub fn new() -> Option<Self> {
        window().map(|window| WindowProgress { window })
    }
}

impl ProgressSource for WindowProgress {
    fn current_scroll(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn max_scroll(&self) -> f64 {
        let document_height = self
            .window
            .document()
            .and_then(|d| d.document_element())
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0);
        document_height - self.viewport_height()
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }
}

/// Animated elements inside one section, addressed by their `data-anim`
/// attribute.
pub struct DomStage {
    root: Element,
    cache: HashMap<String, NodeList>,
}

impl DomStage {
    pub fn new(root: Element) -> Self {
        DomStage {
            root,
            cache: HashMap::new(),
        }
    }

    fn matches(&mut self, target: &str) -> Option<&NodeList> {
        if !self.cache.contains_key(target) {
            let selector = format!("[data-anim=\"{}\"]", target);
            let list = self.root.query_selector_all(&selector).ok()?;
            self.cache.insert(target.to_string(), list);
        }
        self.cache.get(target)
    }
}

impl Stage for DomStage {
    fn count(&mut self, target: &str) -> usize {
        self.matches(target).map(|list| list.length() as usize).unwrap_or(0)
    }

    fn apply(&mut self, target: &str, index: usize, pose: Pose) {
        let Some(node) = self.matches(target).and_then(|list| list.item(index as u32)) else {
            return;
        };
        if let Ok(element) = node.dyn_into::<HtmlElement>() {
            let style = element.style();
            let _ = style.set_property("transform", &pose.transform());
            let _ = style.set_property("opacity", &pose.opacity_css());
        }
    }

    fn viewport_top(&mut self, target: &str) -> Option<f64> {
        let node = self.matches(target)?.item(0)?;
        let element = node.dyn_into::<Element>().ok()?;
        Some(element.get_bounding_client_rect().top())
    }
}

/// Document-space boxes of every registered section, in registry order.
/// Pinned sections also report the sticky box held inside their spacer.
pub fn measure(registry: &SectionRegistry, refs: &[NodeRef]) -> Result<Vec<SectionGeometry>, EngineError> {
    let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
    registry
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let element = refs
                .get(index)
                .and_then(|r| r.cast::<Element>())
                .ok_or(EngineError::LayoutNotReady(section.id))?;
            let rect = element.get_bounding_client_rect();
            let held_height = match section.kind {
                SectionKind::Pinned { .. } => element
                    .first_element_child()
                    .map(|held| held.get_bounding_client_rect().height())
                    .ok_or(EngineError::LayoutNotReady(section.id))?,
                SectionKind::Flowing => 0.0,
            };
            Ok(SectionGeometry {
                top: rect.top() + scroll_y,
                height: rect.height(),
                held_height,
            })
        })
        .collect()
}

/// Whether the document and its resources have finished loading.
pub fn document_ready() -> bool {
    window()
        .and_then(|w| w.document())
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false)
}

/// A window event listener, removed when dropped.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl ListenerGuard {
    pub fn window(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let target: EventTarget = window()?.into();
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(ListenerGuard { target, event, callback })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Milliseconds on the page's monotonic clock.
pub fn now_ms() -> Option<f64> {
    window()?.performance().map(|p| p.now())
}

/// Calls `step` with the current [`now_ms`] every tick until it returns
/// `false`, [`Ticker::stop`] is called, or the ticker is dropped.
pub struct Ticker {
    handle: Rc<RefCell<Option<Interval>>>,
}

impl Ticker {
    pub fn start(mut step: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let performance = window()?.performance()?;
        let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

        let interval = {
            let handle = handle.clone();
            Interval::new(config::snap::TICK_MS, move || {
                if !step(performance.now()) {
                    let finished = handle.borrow_mut().take();
                    drop(finished);
                }
            })
        };
        *handle.borrow_mut() = Some(interval);
        Some(Ticker { handle })
    }

    pub fn is_running(&self) -> bool {
        self.handle.borrow().is_some()
    }

    /// Returns whether the ticker was still running.
    pub fn stop(&self) -> bool {
        let interval = self.handle.borrow_mut().take();
        interval.is_some()
    }

    fn stopper(&self) -> impl Fn() -> bool + 'static {
        let handle = self.handle.clone();
        move || {
            let interval = handle.borrow_mut().take();
            interval.is_some()
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// A running snap animation, sampled against the page clock so a throttled
/// timer still lands on time. Stops on its own when the plan completes, when
/// the user takes over with the wheel or a touch, or when dropped.
pub struct SnapTween {
    ticker: Ticker,
    _cancel: Vec<ListenerGuard>,
}

impl SnapTween {
    pub fn start(plan: SnapPlan) -> Option<Self> {
        let window = window()?;
        let started_ms = now_ms()?;

        let ticker = Ticker::start(move |now| {
            let (position, done) = plan.sample(started_ms, now);
            window.scroll_to_with_x_and_y(0.0, position);
            !done
        })?;

        let cancel = ["wheel", "touchstart"]
            .into_iter()
            .filter_map(|event| {
                let stop = ticker.stopper();
                ListenerGuard::window(event, move || {
                    if stop() {
                        log::debug!("snap interrupted by {}", event);
                    }
                })
            })
            .collect();

        Some(SnapTween { ticker, _cancel: cancel })
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }
}

/// Smooth-scrolls the element with `id` to the top of the viewport.
pub fn scroll_to_section(id: &str) {
    let Some(element) = window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
        log::warn!("no section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Locks or releases page scroll by toggling `overflow` on `<body>`.
pub fn set_scroll_lock(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}
