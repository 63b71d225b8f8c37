use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Offset in pixels past which the header switches to its compact look.
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

fn current_offset() -> Option<f64> {
    web_sys::window().and_then(|w| w.scroll_y().ok())
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(offset) = current_offset() {
                                scrolled.set(is_scrolled(offset));
                            }
                        }
                    });
                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not attach scroll listener to header");
                    }
                    // Initial check, the page may be restored mid-scroll
                    if let Some(offset) = current_offset() {
                        scrolled.set(is_scrolled(offset));
                    }
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    html! {
        <header class={classes!("header", (*scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <a href="#top" class="header-logo">{"northlight"}</a>
                <nav class="header-links">
                    <a href="#services" class="header-link">{"Services"}</a>
                    <a href="#process" class="header-link">{"Process"}</a>
                    <a href="#contact" class="header-cta">{"Get in touch"}</a>
                </nav>
            </div>
        </header>
    }
}
