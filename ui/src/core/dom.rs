//! Browser-only glue: document relocalization, the scroll-reveal observer,
//! scroll measurements and page-lifetime event listeners.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Node,
};

use crate::core::header::{FrameGate, ScrollMetrics};
use crate::core::lang::Language;
use crate::core::localize::{localize_all, LocalizableElement};
use crate::core::menu::{classify_click, ClickTarget};
use crate::core::reveal::{RevealSet, REVEALED_CLASSES, REVEAL_SELECTORS};

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// `web_sys::Element` seen through the localization rules.
pub struct DomElement(pub Element);

impl DomElement {
    fn text_children(&self) -> Vec<Node> {
        let children = self.0.child_nodes();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter(|node| node.node_type() == Node::TEXT_NODE)
            .collect()
    }

    fn icon(&self) -> Option<Element> {
        self.0.query_selector("i").ok().flatten()
    }
}

impl LocalizableElement for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn is_text_input(&self) -> bool {
        self.0.is_instance_of::<web_sys::HtmlInputElement>()
            || self.0.is_instance_of::<web_sys::HtmlTextAreaElement>()
    }

    fn set_placeholder(&mut self, text: &str) {
        let _ = self.0.set_attribute("placeholder", text);
    }

    fn direct_text_nodes(&self) -> Vec<String> {
        self.text_children()
            .iter()
            .map(|node| node.text_content().unwrap_or_default())
            .collect()
    }

    fn set_direct_text_node(&mut self, index: usize, text: &str) {
        if let Some(node) = self.text_children().get(index) {
            node.set_text_content(Some(text));
        }
    }

    fn has_icon(&self) -> bool {
        self.icon().is_some()
    }

    fn insert_after_icon(&mut self, text: &str) {
        if let Some(icon) = self.icon() {
            let _ = icon.insert_adjacent_text("afterend", text);
        }
    }

    fn set_text_content(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Set `<html lang>` and relocalize every `[data-en]` element.
pub fn localize_document(lang: Language) {
    let Some(document) = document() else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", lang.code());
    }
    let Ok(nodes) = document.query_selector_all("[data-en]") else {
        return;
    };
    let mut elements: Vec<DomElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(DomElement)
        .collect();
    let touched = localize_all(elements.iter_mut(), lang);
    debug!(%lang, touched, "relocalized static markup");
}

/// Watch every reveal target with one observer. Elements get the revealed
/// classes on first intersection and are then unobserved for good.
pub fn start_scroll_reveal(threshold: f64) {
    let Some(document) = document() else {
        return;
    };

    let set = Rc::new(RefCell::new(RevealSet::default()));
    let callback_set = set.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = target.get_attribute("data-reveal-id") else {
                    continue;
                };
                if callback_set.borrow_mut().observe(&id, entry.is_intersecting()) {
                    for class in REVEALED_CLASSES.split(' ') {
                        let _ = target.class_list().add_1(class);
                    }
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
    else {
        return;
    };
    // The observer lives as long as the page.
    callback.forget();

    for selector in REVEAL_SELECTORS {
        let Ok(nodes) = document.query_selector_all(selector) else {
            continue;
        };
        for node in (0..nodes.length()).filter_map(|i| nodes.item(i)) {
            let Ok(el) = node.dyn_into::<Element>() else {
                continue;
            };
            let existing = el.get_attribute("data-reveal-id");
            let Some(id) = set.borrow_mut().claim(existing.as_deref()) else {
                continue;
            };
            let _ = el.set_attribute("data-reveal-id", &id);
            observer.observe(&el);
        }
    }
    info!(elements = set.borrow().watching(), "scroll reveal armed");
}

/// Layout measurements for the header controller.
pub fn measure_scroll() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let header = document
        .get_element_by_id("header")?
        .dyn_into::<HtmlElement>()
        .ok()?;

    let footer_offset = document
        .query_selector("footer")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_top()));
    let section_top = |selector: &str| {
        document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(|el| el.get_bounding_client_rect().top())
    };

    Some(ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        viewport_height: window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0),
        header_height: f64::from(header.offset_height()),
        footer_offset,
        cta_top: section_top(".cta-section"),
        newsletter_top: section_top(".newsletter-section"),
    })
}

/// Natural height of an element's content, for height transitions.
pub fn scroll_height(id: &str) -> Option<f64> {
    element_by_id(id).map(|el| f64::from(el.scroll_height()))
}

/// Drop `hidden` from `id` ahead of the next render so its natural height
/// can be read right away.
pub fn unhide_and_measure(id: &str) -> Option<f64> {
    let el = element_by_id(id)?;
    let _ = el.remove_attribute("hidden");
    Some(f64::from(el.scroll_height()))
}

/// Classify a document click for the menu whose panel is `panel_id`.
pub fn click_target(event: &Event, panel_id: &str) -> ClickTarget {
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    classify_click(panel_id, |id| {
        element_by_id(id)
            .map(|el| el.contains(target.as_ref()))
            .unwrap_or(false)
    })
}

/// Blocking alert, used for submission failures.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Event listener removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(target: EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target,
            event,
            callback,
        })
    }

    pub fn on_document(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        Self::new(document()?.into(), event, handler)
    }

    pub fn on_window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        Self::new(web_sys::window()?.into(), event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Run `on_frame` at most once per animation frame while the page scrolls.
pub fn on_scroll_frame(on_frame: impl FnMut() + 'static) -> Option<Listener> {
    let gate = Rc::new(RefCell::new(FrameGate::default()));
    let on_frame = Rc::new(RefCell::new(on_frame));

    let frame_gate = gate.clone();
    let frame = Rc::new(Closure::<dyn FnMut()>::new(move || {
        (on_frame.borrow_mut())();
        frame_gate.borrow_mut().complete();
    }));

    Listener::on_window("scroll", move |_| {
        if !gate.borrow_mut().request() {
            return;
        }
        let callback: &Closure<dyn FnMut()> = &frame;
        let scheduled = web_sys::window()
            .map(|w| w.request_animation_frame(callback.as_ref().unchecked_ref()).is_ok())
            .unwrap_or(false);
        if !scheduled {
            gate.borrow_mut().complete();
        }
    })
}
