use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::reveal::{self, RevealSpec};
use crate::dom;

/// Hero lines slide in one after another. Kept apart from the fade-up
/// observer so the two never interfere.
pub static HERO_LINES: RevealSpec = RevealSpec {
    selector: ".line-wrapper",
    class: "in-view",
    threshold: 0.1,
    root_margin: None,
    key_attribute: "data-line-key",
};

const STAGGER_STEP_MS: u32 = 150;

pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

fn stagger_line(line: &Element, index: usize) {
    let span = line
        .query_selector(".line-text")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(span) = span {
        let _ = span
            .style()
            .set_property("transition-delay", &format!("{}ms", stagger_delay_ms(index)));
    }
}

#[hook]
pub fn use_hero_reveal() {
    use_effect_with_deps(
        move |_| {
            let lines = dom::query_all(HERO_LINES.selector);
            // Delays go on before anything can intersect
            for (index, line) in lines.iter().enumerate() {
                stagger_line(line, index);
            }
            let observer = reveal::watch(&HERO_LINES, &lines);
            move || drop(observer)
        },
        (),
    );
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub lines: Vec<AttrValue>,
}

#[function_component(HeroHeadline)]
pub fn hero_headline(props: &HeroProps) -> Html {
    html! {
        <h1 class="hero-title">
            { for props.lines.iter().map(|line| html! {
                <span class="line-wrapper">
                    <span class="line-text">{ line.clone() }</span>
                </span>
            }) }
        </h1>
    }
}
