use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::dom;

/// Returns the selector an in-page link points at. A bare `#` points
/// nowhere.
pub fn fragment_selector(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

fn scroll_to_fragment(href: &str) {
    let Some(selector) = fragment_selector(href) else {
        return;
    };
    // Unknown ids and unparsable selectors are left alone
    let Some(target) = dom::document().and_then(|d| d.query_selector(selector).ok().flatten()) else {
        log::debug!("No element for in-page link {}", href);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth scrolling for every `a[href^="#"]` on the page.
#[hook]
pub fn use_anchor_scrolling() {
    use_effect_with_deps(
        move |_| {
            let mut listeners: Vec<(Element, Closure<dyn Fn(Event)>)> = Vec::new();
            for anchor in dom::query_all("a[href^=\"#\"]") {
                let callback = Closure::<dyn Fn(Event)>::new(move |e: Event| {
                    e.prevent_default();
                    let href = e
                        .current_target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| el.get_attribute("href"));
                    if let Some(href) = href {
                        scroll_to_fragment(&href);
                    }
                });
                if anchor
                    .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
                    .is_ok()
                {
                    listeners.push((anchor, callback));
                }
            }
            log::debug!("Smooth scrolling attached to {} links", listeners.len());

            move || {
                for (anchor, callback) in listeners {
                    let _ = anchor.remove_event_listener_with_callback(
                        "click",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_resolve_to_selectors() {
        assert_eq!(fragment_selector("#contact"), Some("#contact"));
        assert_eq!(fragment_selector("#"), None);
        assert_eq!(fragment_selector("/pricing#plans"), None);
        assert_eq!(fragment_selector(""), None);
    }
}
