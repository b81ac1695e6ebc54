//! FolioPage: wires the coordinator to the live document.
//!
//! Every registration returns a handle kept in [`Running`]; `dispose()`
//! drops them all, which unregisters listeners, cancels timers, stops the
//! frame loop and removes the injected overlay.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, ErrorEvent, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MediaQueryListEvent, MouseEvent, Window,
};

use super::dom::{self, DomLayout, Overlay};
use super::listener::Listener;
use super::log;
use super::timer::{AnimationLoop, Interval, Timeout};
use crate::core::config::CoordinatorConfig;
use crate::core::coordinator::Coordinator;
use crate::core::effects::{BadgeAnimation, Readiness, LOAD_FADE_TRANSITION, TILT_RESET};
use crate::core::error::FolioResult;
use crate::core::menu::is_activation_key;
use crate::core::nav::NavTracker;
use crate::core::selectors::{self, class, cursor, hero, media, nav};

type Shared = Rc<RefCell<Coordinator>>;

/// A nav link element and the section id it points at
type LinkTarget = (HtmlElement, Option<String>);

/// Browser page coordinator with JS bindings
#[wasm_bindgen]
pub struct FolioPage {
    config: CoordinatorConfig,
    running: Option<Running>,
}

struct Running {
    coordinator: Shared,
    listeners: Vec<Listener>,
    _timers: Rc<RefCell<Vec<Timeout>>>,
    _nav_timer: Rc<RefCell<Option<Timeout>>>,
    _typing: Rc<RefCell<Option<Interval>>>,
    _frame: AnimationLoop,
    reveal: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)>,
    overlay: Overlay,
}

impl Drop for Running {
    fn drop(&mut self) {
        if let Some((observer, _)) = &self.reveal {
            observer.disconnect();
        }
        self.overlay.remove();
    }
}

#[wasm_bindgen]
impl FolioPage {
    /// Create a page coordinator with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { config: CoordinatorConfig::default(), running: None }
    }

    /// Create a page coordinator from JSON overrides
    #[wasm_bindgen(js_name = "withConfig")]
    pub fn with_config(config_json: &str) -> Result<FolioPage, JsValue> {
        let config = CoordinatorConfig::from_json(config_json)?;
        Ok(Self { config, running: None })
    }

    /// Wire every behavior to the document. Calling twice is a no-op.
    #[wasm_bindgen]
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.running.is_some() {
            return Ok(());
        }
        let running = Wiring::new(self.config.clone())?.wire()?;
        log!("[folio] page wired: {} listeners", running.listeners.len());
        self.running = Some(running);
        Ok(())
    }

    /// Unregister everything and remove injected elements
    #[wasm_bindgen]
    pub fn dispose(&mut self) {
        if self.running.take().is_some() {
            log!("[folio] page disposed");
        }
    }

    #[wasm_bindgen(js_name = "isRunning")]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Current coordinator state as a plain JS object
    #[wasm_bindgen]
    pub fn snapshot(&self) -> JsValue {
        let Some(running) = &self.running else {
            return JsValue::NULL;
        };
        let snapshot = running.coordinator.borrow().snapshot();
        let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
        use serde::Serialize;
        snapshot.serialize(&serializer).unwrap_or(JsValue::NULL)
    }
}

impl Default for FolioPage {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Wiring
// =============================================================================

struct Wiring {
    window: Window,
    document: Document,
    body: HtmlElement,
    coordinator: Shared,
    layout: Rc<DomLayout>,
    links: Rc<Vec<LinkTarget>>,
    listeners: Vec<Listener>,
    timers: Rc<RefCell<Vec<Timeout>>>,
}

impl Wiring {
    fn new(config: CoordinatorConfig) -> FolioResult<Self> {
        let window = dom::window()?;
        let document = dom::document()?;
        let body = dom::body(&document)?;

        let links: Vec<LinkTarget> = dom::query_all(&document, nav::LINK)
            .into_iter()
            .map(|el| {
                let target = el.get_attribute("href").and_then(|h| h.strip_prefix('#').map(str::to_string));
                (el, target)
            })
            .collect();
        let hrefs: Vec<String> = links.iter().filter_map(|(el, _)| el.get_attribute("href")).collect();
        let coordinator = Coordinator::new(config)?.with_nav_links(hrefs);

        Ok(Self {
            layout: Rc::new(DomLayout::new(document.clone(), window.clone())),
            window,
            document,
            body,
            coordinator: Rc::new(RefCell::new(coordinator)),
            links: Rc::new(links),
            listeners: Vec::new(),
            timers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    fn config(&self) -> CoordinatorConfig {
        self.coordinator.borrow().config().clone()
    }

    fn listen(&mut self, listener: FolioResult<Listener>) {
        match listener {
            Ok(l) => self.listeners.push(l),
            Err(e) => log!("[folio] listener skipped: {}", e),
        }
    }

    fn wire(mut self) -> FolioResult<Running> {
        let overlay = Overlay::inject(&self.document)?;

        self.wire_errors();
        self.wire_theme();
        self.wire_menu();
        let nav_timer = self.wire_scroll(&overlay);
        self.wire_anchors(&overlay);
        let reveal = self.wire_reveal();
        let typing = self.wire_typing();
        self.wire_decorations();
        self.wire_load();
        let frame = match self.wire_cursor(&overlay) {
            Ok(frame) => frame,
            Err(e) => {
                overlay.remove();
                return Err(e);
            }
        };

        let y = dom::scroll_offset(&self.window);
        self.coordinator.borrow_mut().refresh_nav(&*self.layout, y);
        paint_nav(&self.links, self.coordinator.borrow().nav());

        Ok(Running {
            coordinator: self.coordinator,
            listeners: self.listeners,
            _timers: self.timers,
            _nav_timer: nav_timer,
            _typing: typing,
            _frame: frame,
            reveal,
            overlay,
        })
    }

    fn wire_errors(&mut self) {
        let listener = Listener::typed(&self.window, "error", |e: ErrorEvent| {
            web_sys::console::error_2(&JsValue::from_str("An error occurred:"), &e.error());
        });
        self.listen(listener);
    }

    fn wire_theme(&mut self) {
        let Some(query) = self.window.match_media(media::PREFERS_DARK).ok().flatten() else {
            log!("[folio] theme: media queries unavailable");
            return;
        };
        apply_theme(&self.coordinator, &self.body, query.matches());

        let (coordinator, body) = (self.coordinator.clone(), self.body.clone());
        let listener = Listener::typed(&query, "change", move |e: MediaQueryListEvent| {
            apply_theme(&coordinator, &body, e.matches());
        });
        self.listen(listener);
    }

    fn wire_menu(&mut self) {
        let (Some(toggle), Some(menu)) = (
            dom::query(&self.document, nav::TOGGLE),
            dom::query(&self.document, nav::MENU),
        ) else {
            log!("[folio] menu: {} or {} missing, skipped", nav::TOGGLE, nav::MENU);
            return;
        };

        let (coordinator, t, m) = (self.coordinator.clone(), toggle.clone(), menu.clone());
        self.listen(Listener::new(&toggle, "click", move |_| {
            let open = coordinator.borrow_mut().toggle_menu();
            dom::set_class(&t, class::ACTIVE, open);
            dom::set_class(&m, class::ACTIVE, open);
        }));

        let links = self.links.clone();
        for (link, _) in links.iter() {
            let (coordinator, t, m) = (self.coordinator.clone(), toggle.clone(), menu.clone());
            self.listen(Listener::new(link, "click", move |_| {
                coordinator.borrow_mut().close_menu();
                dom::set_class(&t, class::ACTIVE, false);
                dom::set_class(&m, class::ACTIVE, false);
            }));
        }

        let t = toggle.clone();
        self.listen(Listener::typed(&toggle, "keypress", move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                t.click();
            }
        }));

        let (coordinator, links) = (self.coordinator.clone(), self.links.clone());
        self.listen(Listener::new(&menu, "transitionend", move |_| {
            if coordinator.borrow().menu_open() {
                if let Some((first, _)) = links.first() {
                    let _ = first.focus();
                }
            }
        }));
    }

    fn wire_scroll(&mut self, overlay: &Overlay) -> Rc<RefCell<Option<Timeout>>> {
        let nav_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let header = dom::query(&self.document, nav::HEADER);
        if header.is_none() {
            log!("[folio] header: {} missing, sticky behavior skipped", nav::HEADER);
        }
        let parallax = dom::query_all(&self.document, hero::PARALLAX);

        let window = self.window.clone();
        let coordinator = self.coordinator.clone();
        let layout = self.layout.clone();
        let links = self.links.clone();
        let scroll_top = overlay.scroll_top.clone();
        let pending = nav_timer.clone();

        let listener = Listener::new(&self.window, "scroll", move |_| {
            let y = dom::scroll_offset(&window);
            let (outcome, wait) = {
                let mut c = coordinator.borrow_mut();
                (c.on_scroll(y), c.nav_debounce_ms())
            };

            if let Some(header) = &header {
                dom::set_style(header, "transform", outcome.header.transform());
                if let Some(shadow) = outcome.header.shadow() {
                    dom::set_style(header, "box-shadow", shadow);
                }
            }
            dom::set_class(&scroll_top, class::VISIBLE, outcome.scroll_top_visible);
            for el in &parallax {
                dom::set_style(el, "transform", &outcome.parallax);
            }

            let (w, c, l, ls) = (window.clone(), coordinator.clone(), layout.clone(), links.clone());
            let ticket = outcome.nav_ticket;
            let settle = Timeout::new(wait, move || {
                let y = dom::scroll_offset(&w);
                if c.borrow_mut().settle_nav(ticket, &*l, y).is_some() {
                    paint_nav(&ls, c.borrow().nav());
                }
            });
            match settle {
                Ok(timeout) => *pending.borrow_mut() = Some(timeout),
                Err(e) => log!("[folio] nav debounce: {}", e),
            }
        });
        self.listen(listener);
        nav_timer
    }

    fn wire_anchors(&mut self, overlay: &Overlay) {
        for anchor in dom::query_all(&self.document, nav::IN_PAGE_ANCHOR) {
            let (window, coordinator, layout, a) =
                (self.window.clone(), self.coordinator.clone(), self.layout.clone(), anchor.clone());
            self.listen(Listener::new(&anchor, "click", move |e| {
                e.prevent_default();
                let href = a.get_attribute("href").unwrap_or_default();
                let destination = coordinator.borrow().anchor_destination(&href, &*layout);
                if let Some(top) = destination {
                    dom::smooth_scroll_to(&window, top);
                }
            }));
        }

        let (window, coordinator) = (self.window.clone(), self.coordinator.clone());
        self.listen(Listener::new(&overlay.scroll_top, "click", move |_| {
            let top = coordinator.borrow().scroll_top_destination();
            dom::smooth_scroll_to(&window, top);
        }));
    }

    fn wire_reveal(&mut self) -> Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> {
        let targets = dom::query_all(&self.document, &selectors::reveal_targets());
        if targets.is_empty() {
            return None;
        }

        let config = self.config();
        let targets = Rc::new(targets);
        let (coordinator, watched) = (self.coordinator.clone(), targets.clone());
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let target_js: &JsValue = target.as_ref();
                    let Some(index) = watched.iter().position(|el| AsRef::<JsValue>::as_ref(el) == target_js) else {
                        continue;
                    };
                    if coordinator.borrow_mut().on_intersection(index, entry.is_intersecting()) {
                        dom::set_class(&target, class::VISIBLE, true);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        init.set_root_margin(&config.reveal_root_margin);
        // Targets are only hidden once something can reveal them again.
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                log!("[folio] reveal: observer unavailable, content left visible: {:?}", e);
                return None;
            }
        };
        for el in targets.iter() {
            dom::set_class(el, class::FADE_IN, true);
            self.coordinator.borrow_mut().observe_reveal();
            observer.observe(el);
        }
        Some((observer, callback))
    }

    fn wire_typing(&mut self) -> Rc<RefCell<Option<Interval>>> {
        let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let Some(subtitle) = dom::query(&self.document, hero::SUBTITLE) else {
            return slot;
        };

        let text = subtitle.text_content().unwrap_or_default();
        subtitle.set_text_content(Some(""));
        self.coordinator.borrow_mut().start_typing(&text);

        let config = self.config();
        let (coordinator, interval_slot) = (self.coordinator.clone(), slot.clone());
        let start = Timeout::new(config.typing_char_due_ms(0), move || {
            if !type_next(&coordinator, &subtitle) {
                return;
            }
            let interval = Interval::new(config.typing_interval_ms, move || type_next(&coordinator, &subtitle));
            match interval {
                Ok(interval) => *interval_slot.borrow_mut() = Some(interval),
                Err(e) => log!("[folio] typing: {}", e),
            }
        });
        match start {
            Ok(timeout) => self.timers.borrow_mut().push(timeout),
            Err(e) => log!("[folio] typing: {}", e),
        }
        slot
    }

    fn wire_decorations(&mut self) {
        for (index, tag) in dom::query_all(&self.document, hero::SKILL_TAG).iter().enumerate() {
            let delay = self.coordinator.borrow().skill_tag_delay(index);
            dom::set_style(tag, "animation-delay", &delay);
        }

        let mut rng = rand::thread_rng();
        for badge in dom::query_all(&self.document, hero::FLOATING_BADGE) {
            let timing = BadgeAnimation::sample(&mut rng);
            dom::set_style(&badge, "animation", &timing.animation());
            dom::set_style(&badge, "animation-delay", &timing.delay());
        }

        for card in dom::query_all(&self.document, hero::PROJECT_CARD) {
            let (coordinator, c) = (self.coordinator.clone(), card.clone());
            self.listen(Listener::typed(&card, "mousemove", move |e: MouseEvent| {
                let rect = c.get_bounding_client_rect();
                let x = e.client_x() as f64 - rect.left();
                let y = e.client_y() as f64 - rect.top();
                let tilt = coordinator.borrow().tilt(x, y, rect.width(), rect.height());
                dom::set_style(&c, "transform", &tilt.transform());
            }));

            let c = card.clone();
            self.listen(Listener::new(&card, "mouseleave", move |_| {
                dom::set_style(&c, "transform", TILT_RESET);
            }));
        }
    }

    fn wire_load(&mut self) {
        let delay = self.config().load_fade_delay_ms;
        let readiness = match self.document.ready_state().as_str() {
            "loading" => Readiness::Loading,
            "interactive" => Readiness::Interactive,
            _ => Readiness::Complete,
        };
        if readiness.load_fired() {
            fade_in(&self.body, delay, &self.timers);
            return;
        }

        let (body, timers) = (self.body.clone(), self.timers.clone());
        self.listen(Listener::new(&self.window, "load", move |_| {
            fade_in(&body, delay, &timers);
        }));
    }

    fn wire_cursor(&mut self, overlay: &Overlay) -> FolioResult<AnimationLoop> {
        let coordinator = self.coordinator.clone();
        self.listen(Listener::typed(&self.document, "mousemove", move |e: MouseEvent| {
            coordinator.borrow_mut().on_pointer_move(e.client_x() as f64, e.client_y() as f64);
        }));

        for el in dom::query_all(&self.document, cursor::HOVER_TARGETS) {
            for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
                let (coordinator, dot, outline) =
                    (self.coordinator.clone(), overlay.dot.clone(), overlay.outline.clone());
                self.listen(Listener::new(&el, event, move |_| {
                    let look = coordinator.borrow_mut().on_hover(hovering);
                    dom::set_style(&dot, "transform", &look.dot_transform());
                    dom::set_style(&outline, "width", &look.outline_px());
                    dom::set_style(&outline, "height", &look.outline_px());
                }));
            }
        }

        let (coordinator, dot, outline) = (self.coordinator.clone(), overlay.dot.clone(), overlay.outline.clone());
        AnimationLoop::start(move || {
            let (d, o) = coordinator.borrow_mut().on_frame();
            dom::set_style(&dot, "left", &format!("{}px", d.x));
            dom::set_style(&dot, "top", &format!("{}px", d.y));
            dom::set_style(&outline, "left", &format!("{}px", o.x));
            dom::set_style(&outline, "top", &format!("{}px", o.y));
        })
    }
}

/// Mirror the tracker's link flags onto the DOM, clearing links it cleared.
fn paint_nav(links: &[LinkTarget], nav: &NavTracker) {
    for (el, target) in links {
        let active = target.as_deref().map(|t| nav.is_active(t)).unwrap_or(false);
        dom::set_class(el, class::ACTIVE, active);
    }
}

/// Append the next subtitle character; false once the text is exhausted.
fn type_next(coordinator: &Shared, subtitle: &HtmlElement) -> bool {
    let mut c = coordinator.borrow_mut();
    if c.typing_tick().is_none() {
        return false;
    }
    subtitle.set_text_content(c.typed_text().as_deref());
    true
}

/// Hide the body, then fade it in after `delay` ms.
fn fade_in(body: &HtmlElement, delay: u32, timers: &Rc<RefCell<Vec<Timeout>>>) {
    dom::set_style(body, "opacity", "0");
    let b = body.clone();
    match Timeout::new(delay, move || {
        dom::set_style(&b, "transition", LOAD_FADE_TRANSITION);
        dom::set_style(&b, "opacity", "1");
    }) {
        Ok(timeout) => timers.borrow_mut().push(timeout),
        Err(e) => log!("[folio] load fade: {}", e),
    }
}

fn apply_theme(coordinator: &Shared, body: &HtmlElement, prefers_dark: bool) {
    let theme = coordinator.borrow_mut().set_theme(prefers_dark);
    let (add, remove) = theme.class_swap();
    dom::set_class(body, add, true);
    dom::set_class(body, remove, false);
}

// =============================================================================
// Counter utility
// =============================================================================

/// Running count-up; dropping it from JS (`free()`) stops the animation
#[wasm_bindgen]
pub struct CounterAnimation {
    interval: Interval,
}

#[wasm_bindgen]
impl CounterAnimation {
    #[wasm_bindgen(js_name = "isRunning")]
    pub fn is_running(&self) -> bool {
        self.interval.is_running()
    }
}

/// Count `element`'s text up from 0 to `target` over `duration_ms`
/// (default 2000).
#[wasm_bindgen(js_name = "animateCounter")]
pub fn animate_counter(element: HtmlElement, target: u32, duration_ms: Option<u32>) -> Result<CounterAnimation, JsValue> {
    let config = CoordinatorConfig::default();
    let mut counter = Coordinator::new(config.clone())?.counter(target as u64, duration_ms);
    let interval = Interval::new(config.counter_tick_ms, move || {
        let frame = counter.tick();
        element.set_text_content(Some(&frame.value().to_string()));
        !counter.is_done()
    })?;
    Ok(CounterAnimation { interval })
}
