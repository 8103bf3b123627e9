//! Thin web-sys helpers shared by the component mounts.
//!
//! Every fallible DOM call is funneled into [`BehaviorError`] so mounts can
//! use `?` and a missing node reads as an expected absence.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node, Window,
};

use crate::error::BehaviorError;

pub fn window() -> Result<Window, BehaviorError> {
    web_sys::window().ok_or(BehaviorError::NoWindow)
}

pub fn document() -> Result<Document, BehaviorError> {
    window()?.document().ok_or(BehaviorError::NoWindow)
}

/// First element matching `selector`, or a missing-element error.
pub fn require(document: &Document, selector: &str) -> Result<Element, BehaviorError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| BehaviorError::missing(selector))
}

/// First descendant of `root` matching `selector`.
pub fn require_in(root: &Element, selector: &str) -> Result<Element, BehaviorError> {
    root.query_selector(selector)?
        .ok_or_else(|| BehaviorError::missing(selector))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    let list = document.query_selector_all(selector)?;
    Ok(collect_elements(&list))
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    let list = root.query_selector_all(selector)?;
    Ok(collect_elements(&list))
}

/// Like [`query_all`], but an empty match is a missing-element error.
pub fn require_all(document: &Document, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    let found = query_all(document, selector)?;
    if found.is_empty() {
        return Err(BehaviorError::missing(selector));
    }
    Ok(found)
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Attach a listener for the page lifetime.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), BehaviorError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), BehaviorError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

#[must_use]
pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Set an inline style property; an empty `value` removes it.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), BehaviorError> {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = html.style();
    if value.is_empty() {
        style.remove_property(property)?;
    } else {
        style.set_property(property, value)?;
    }
    Ok(())
}

#[must_use]
pub fn same_node(a: &Element, b: &Element) -> bool {
    let b: &Node = b;
    a.is_same_node(Some(b))
}

/// Position of `target` within `elements`, by node identity.
#[must_use]
pub fn index_of(elements: &[Element], target: &Element) -> Option<usize> {
    elements.iter().position(|el| same_node(el, target))
}

/// Run `f` once after `ms` milliseconds. Not cancellable.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(ms, f).forget();
}

/// Observe `targets` for viewport intersection for the page lifetime.
///
/// The handler receives each batch in host delivery order.
pub fn observe_intersections(
    targets: &[Element],
    root_margin: &str,
    threshold: f64,
    mut handler: impl FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, BehaviorError> {
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let entries = entries
            .iter()
            .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
            .collect::<Vec<_>>();
        handler(entries, &observer);
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)?;
    cb.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}
