use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::dom;

/// Which elements a reveal watches and how it marks them.
#[derive(Debug)]
pub struct RevealSpec {
    pub selector: &'static str,
    pub class: &'static str,
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
    /// Attribute holding the element's position within this reveal.
    pub key_attribute: &'static str,
}

/// Generic section fade-in. The trimmed bottom margin means an element only
/// counts as visible once it sits well inside the viewport.
pub static FADE_UP: RevealSpec = RevealSpec {
    selector: ".fade-up",
    class: "visible",
    threshold: 0.1,
    root_margin: Some("0px 0px -50px 0px"),
    key_attribute: "data-fade-key",
};

/// Tracks which elements have been revealed so each one fires at most once,
/// even when the browser still delivers entries queued before `unobserve`.
#[derive(Debug, Default)]
pub struct RevealLedger {
    revealed: HashSet<u32>,
}

impl RevealLedger {
    /// True only for the first intersecting report of `key`.
    pub fn admit(&mut self, key: u32, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(key)
    }

    #[cfg(test)]
    pub fn is_revealed(&self, key: u32) -> bool {
        self.revealed.contains(&key)
    }
}

/// An IntersectionObserver with fire-once semantics. Disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    spec: &'static RevealSpec,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn new(spec: &'static RevealSpec) -> Result<Self, JsValue> {
        let ledger = Rc::new(RefCell::new(RevealLedger::default()));

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(key) = reveal_key(&target, spec.key_attribute) else {
                        continue;
                    };
                    if ledger.borrow_mut().admit(key, entry.is_intersecting()) {
                        let _ = target.class_list().add_1(spec.class);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(spec.threshold));
        if let Some(margin) = spec.root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            spec,
            _callback: callback,
        })
    }

    pub fn observe(&self, key: u32, element: &Element) {
        let _ = element.set_attribute(self.spec.key_attribute, &key.to_string());
        self.observer.observe(element);
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal_key(element: &Element, attribute: &str) -> Option<u32> {
    element.get_attribute(attribute)?.parse().ok()
}

/// Observes every element in `elements` under `spec`. Nothing is created for
/// an empty set.
pub fn watch(spec: &'static RevealSpec, elements: &[Element]) -> Option<RevealObserver> {
    if elements.is_empty() {
        return None;
    }
    match RevealObserver::new(spec) {
        Ok(observer) => {
            for (key, element) in elements.iter().enumerate() {
                observer.observe(key as u32, element);
            }
            log::debug!("Watching {} '{}' elements", elements.len(), spec.selector);
            Some(observer)
        }
        Err(e) => {
            log::warn!("Could not create observer for '{}': {:?}", spec.selector, e);
            None
        }
    }
}

#[hook]
pub fn use_fade_up_reveal() {
    use_effect_with_deps(
        move |_| {
            let observer = watch(&FADE_UP, &dom::query_all(FADE_UP.selector));
            move || drop(observer)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let mut ledger = RevealLedger::default();
        assert!(!ledger.admit(0, false));
        assert!(!ledger.is_revealed(0));
        assert!(ledger.admit(0, true));
        assert!(ledger.is_revealed(0));
    }

    #[test]
    fn each_element_fires_once() {
        let mut ledger = RevealLedger::default();
        assert!(ledger.admit(3, true));
        // Left the viewport and came back
        assert!(!ledger.admit(3, false));
        assert!(!ledger.admit(3, true));
        assert!(ledger.admit(4, true));
    }

    #[test]
    fn fade_up_trims_bottom_margin() {
        assert_eq!(FADE_UP.root_margin, Some("0px 0px -50px 0px"));
        assert_eq!(FADE_UP.threshold, 0.1);
        assert_eq!(FADE_UP.class, "visible");
    }
}
