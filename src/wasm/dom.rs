//! DOM helpers: lookups, style writes, injected overlay, live layout.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::core::error::{FolioError, FolioResult};
use crate::core::layout::{Layout, Section};
use crate::core::selectors::{class, nav};

pub fn window() -> FolioResult<Window> {
    web_sys::window().ok_or_else(|| FolioError::missing("window"))
}

pub fn document() -> FolioResult<Document> {
    window()?.document().ok_or_else(|| FolioError::missing("document"))
}

pub fn body(document: &Document) -> FolioResult<HtmlElement> {
    document.body().ok_or_else(|| FolioError::missing("body"))
}

pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn set_class(el: &Element, name: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(name) } else { list.remove_1(name) };
}

pub fn scroll_offset(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Create an element with a class name and append it to `parent`.
pub fn append(document: &Document, parent: &Element, tag: &str, class_name: &str) -> FolioResult<HtmlElement> {
    let el = document.create_element(tag)?.dyn_into::<HtmlElement>()
        .map_err(|_| FolioError::Js(format!("<{tag}> is not an HtmlElement")))?;
    el.set_class_name(class_name);
    parent.append_child(&el)?;
    Ok(el)
}

pub fn inject_style(document: &Document, css: &str) -> FolioResult<HtmlElement> {
    let head = document.head().ok_or_else(|| FolioError::missing("head"))?;
    let style = append(document, &head, "style", "")?;
    style.set_text_content(Some(css));
    Ok(style)
}

pub const OVERLAY_CSS: &str = r#"
.cursor-dot, .cursor-outline {
    pointer-events: none;
    position: fixed;
    top: 0;
    left: 0;
    transform: translate(-50%, -50%);
    border-radius: 50%;
    opacity: 0.5;
    transition: opacity 0.3s, transform 0.3s;
    z-index: 10000;
}
.cursor-dot {
    width: 8px;
    height: 8px;
    background: var(--primary-color);
}
.cursor-outline {
    width: 40px;
    height: 40px;
    border: 2px solid var(--primary-color);
    transition: width 0.3s, height 0.3s, opacity 0.3s;
}
.scroll-top-btn {
    position: fixed;
    bottom: 30px;
    right: 30px;
    width: 50px;
    height: 50px;
    border-radius: 50%;
    background: var(--gradient-1);
    color: white;
    border: none;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.2rem;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s, transform 0.3s;
    z-index: 999;
    box-shadow: 0 4px 15px rgba(0, 0, 0, 0.3);
}
.scroll-top-btn.visible {
    opacity: 1;
    pointer-events: all;
}
.scroll-top-btn:hover {
    transform: translateY(-5px);
    box-shadow: 0 6px 20px rgba(14, 84, 132, 0.5);
}
@media (max-width: 768px) {
    .cursor-dot, .cursor-outline {
        display: none;
    }
    .scroll-top-btn {
        bottom: 20px;
        right: 20px;
        width: 45px;
        height: 45px;
    }
}
"#;

/// Elements created at startup and removed on dispose
pub struct Overlay {
    pub dot: HtmlElement,
    pub outline: HtmlElement,
    pub scroll_top: HtmlElement,
    style: HtmlElement,
}

impl Overlay {
    pub fn inject(document: &Document) -> FolioResult<Self> {
        let body = body(document)?;
        let dot = append(document, &body, "div", class::CURSOR_DOT)?;
        let outline = append(document, &body, "div", class::CURSOR_OUTLINE)?;
        let scroll_top = append(document, &body, "button", class::SCROLL_TOP)?;
        scroll_top.set_inner_html(r#"<i class="fas fa-arrow-up"></i>"#);
        let _ = scroll_top.set_attribute("aria-label", "Scroll to top");
        let style = inject_style(document, OVERLAY_CSS)?;
        Ok(Self { dot, outline, scroll_top, style })
    }

    pub fn remove(&self) {
        self.dot.remove();
        self.outline.remove();
        self.scroll_top.remove();
        self.style.remove();
    }
}

/// [`Layout`] answered from the live DOM
pub struct DomLayout {
    document: Document,
    window: Window,
    header: Option<HtmlElement>,
    sections: Vec<HtmlElement>,
}

impl DomLayout {
    pub fn new(document: Document, window: Window) -> Self {
        let header = query(&document, nav::HEADER);
        let sections = query_all(&document, nav::SECTION);
        Self { document, window, header, sections }
    }
}

impl Layout for DomLayout {
    fn header_height(&self) -> f64 {
        self.header.as_ref().map(|h| h.offset_height() as f64).unwrap_or(0.0)
    }

    fn sections(&self) -> Vec<Section> {
        self.sections
            .iter()
            .filter(|s| !s.id().is_empty())
            .map(|s| Section::new(s.id(), s.offset_top() as f64, s.offset_height() as f64))
            .collect()
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().top() + scroll_offset(&self.window))
    }
}
