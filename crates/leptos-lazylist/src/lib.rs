//! Leptos LazyList Utilities
//!
//! Sentinel-based incremental loading for Leptos. An off-screen marker
//! element is watched with an IntersectionObserver; whenever it scrolls
//! into view the consumer's callback fires and decides whether to keep
//! observing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// What to do after a sentinel trigger
pub enum SentinelControl {
    /// Keep watching the sentinel
    Continue,
    /// Stop observing (e.g. the list is exhausted)
    Disconnect,
}

/// Watch `el` and invoke `on_visible` each time it becomes visible.
/// Observation stops when the callback returns
/// [`SentinelControl::Disconnect`].
///
/// The observer fires on visibility transitions only; a sentinel that
/// stays visible does not re-trigger until it leaves and re-enters the
/// viewport.
pub fn observe_sentinel<F>(el: &web_sys::Element, mut on_visible: F)
where
    F: FnMut() -> SentinelControl + 'static,
{
    let observer_slot: Rc<RefCell<Option<web_sys::IntersectionObserver>>> =
        Rc::new(RefCell::new(None));
    let slot = Rc::clone(&observer_slot);

    let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_ref::<web_sys::IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if !visible {
                return;
            }
            if let SentinelControl::Disconnect = on_visible() {
                if let Some(observer) = slot.borrow_mut().take() {
                    observer.disconnect();
                }
            }
        },
    );

    if let Ok(observer) = web_sys::IntersectionObserver::new(cb.as_ref().unchecked_ref()) {
        observer.observe(el);
        *observer_slot.borrow_mut() = Some(observer);
    }
    cb.forget();
}

/// Attach sentinel observation to a `NodeRef` once it is mounted.
///
/// Callbacks may outlive the owning view, so any reactive writes inside
/// `on_visible` should go through `try_update`/`try_set`.
pub fn use_infinite_scroll<F>(sentinel: NodeRef<Div>, on_visible: F)
where
    F: FnMut() -> SentinelControl + 'static,
{
    let handler = Rc::new(RefCell::new(on_visible));
    let attached = Rc::new(Cell::new(false));
    Effect::new(move |_| {
        let Some(el) = sentinel.get() else {
            return;
        };
        // The node signal can fire more than once; observe only once
        if attached.replace(true) {
            return;
        }
        let handler = Rc::clone(&handler);
        observe_sentinel(el.as_ref(), move || (&mut *handler.borrow_mut())());
    });
}
