//! Leptos Visibility Utilities
//!
//! "Notify once when an element scrolls into view" for Leptos, built on
//! IntersectionObserver. An observed element fires at most once: it is
//! unobserved before the callback runs, so repeated intersection events
//! for the same element never re-notify.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Owning wrapper around a `web_sys::IntersectionObserver`.
///
/// Keeps the JS callback alive for as long as the observer exists and
/// disconnects the observer on drop.
pub struct VisibilityObserver {
    observer: web_sys::IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl VisibilityObserver {
    /// Create an observer firing `on_visible` when an observed element
    /// reaches `threshold` visibility. The element is unobserved before
    /// `on_visible` runs.
    pub fn new<F>(threshold: f64, mut on_visible: F) -> Result<Self, JsValue>
    where
        F: FnMut(web_sys::Element) + 'static,
    {
        let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        // Unobserve first so the element can only fire once
                        observer.unobserve(&entry.target());
                        on_visible(entry.target());
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = web_sys::IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            observer,
            _on_intersect: on_intersect,
        })
    }

    pub fn observe(&self, el: &web_sys::Element) {
        self.observer.observe(el);
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watch the element behind `target` and run `on_visible` whenever the
/// current element scrolls into view.
///
/// The observer is torn down and rebuilt whenever the element identity
/// behind the `NodeRef` changes, and disconnected when the reactive
/// owner is cleaned up. Combined with unobserve-on-fire above, each
/// element can trigger `on_visible` at most once.
pub fn watch_visibility<F>(target: NodeRef<Div>, threshold: f64, on_visible: F)
where
    F: Fn() + Clone + 'static,
{
    let current = StoredValue::new_local(None::<VisibilityObserver>);
    let watched = StoredValue::new_local(None::<web_sys::Element>);

    Effect::new(move |_| {
        let Some(el) = target.get() else {
            return;
        };
        let el: web_sys::Element = el.unchecked_into();

        // Same element re-registered: keep the existing watcher so an
        // already-fired element is not re-armed.
        if watched.with_value(|w| w.as_ref() == Some(&el)) {
            return;
        }
        watched.set_value(Some(el.clone()));

        let cb = on_visible.clone();
        match VisibilityObserver::new(threshold, move |_| cb()) {
            Ok(obs) => {
                obs.observe(&el);
                // Replacing the stored observer drops (disconnects) the old one
                current.set_value(Some(obs));
            }
            Err(err) => web_sys::console::error_1(&err),
        }
    });

    on_cleanup(move || {
        current.set_value(None);
        watched.set_value(None);
    });
}
