use yew::prelude::*;

use crate::components::anchor::use_anchor_scrolling;
use crate::components::hero::{use_hero_reveal, HeroHeadline};
use crate::components::reveal::use_fade_up_reveal;
use crate::contact::form::ContactForm;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    title: AttrValue,
    children: Children,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card fade-up">
            <h3>{ props.title.clone() }</h3>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    use_hero_reveal();
    use_fade_up_reveal();
    use_anchor_scrolling();

    let hero_lines: Vec<AttrValue> = vec![
        "We build quiet".into(),
        "software for".into(),
        "loud problems.".into(),
    ];

    html! {
        <div class="landing-page" id="top">
            <section class="hero">
                <HeroHeadline lines={hero_lines} />
                <p class="hero-subtitle fade-up">
                    {"A small studio designing and shipping web products, from first sketch to the last deploy."}
                </p>
                <a href="#contact" class="hero-cta fade-up">{"Start a project"}</a>
            </section>

            <section class="services" id="services">
                <h2 class="fade-up">{"What we do"}</h2>
                <div class="service-grid">
                    <ServiceCard title="Product design">
                        <p>{"Research, flows and interfaces that survive contact with real users."}</p>
                    </ServiceCard>
                    <ServiceCard title="Engineering">
                        <p>{"Fast, accessible front-ends and the services behind them."}</p>
                    </ServiceCard>
                    <ServiceCard title="Launch & care">
                        <p>{"Hosting, monitoring and the small fixes that keep a product healthy."}</p>
                    </ServiceCard>
                </div>
            </section>

            <section class="process" id="process">
                <h2 class="fade-up">{"How we work"}</h2>
                <ol class="process-list">
                    <li class="fade-up">{"We listen and write down what success looks like."}</li>
                    <li class="fade-up">{"We prototype the riskiest part first."}</li>
                    <li class="fade-up">{"We ship in small steps you can try every week."}</li>
                </ol>
                <a href="#contact" class="process-cta fade-up">{"Tell us about yours"}</a>
            </section>

            <section class="contact" id="contact">
                <h2 class="fade-up">{"Let's talk"}</h2>
                <ContactForm />
            </section>

            <footer class="footer">
                <a href="#top" class="footer-link">{"Back to top"}</a>
            </footer>

            <style>
                {r#"
                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 10;
                        padding: 1.5rem 2rem;
                        transition: padding 0.3s ease, background 0.3s ease;
                    }
                    .header.scrolled {
                        padding: 0.75rem 2rem;
                        background: rgba(10, 10, 10, 0.9);
                        backdrop-filter: blur(10px);
                    }
                    .fade-up {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .fade-up.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .line-wrapper {
                        display: block;
                        overflow: hidden;
                    }
                    .line-text {
                        display: inline-block;
                        transform: translateY(110%);
                        transition: transform 0.9s cubic-bezier(0.19, 1, 0.22, 1);
                    }
                    .line-wrapper.in-view .line-text {
                        transform: translateY(0);
                    }
                    .contact-form {
                        position: relative;
                        min-height: 360px;
                    }
                    /* Exit transition lasts exactly STEP_SWITCH_MS */
                    .form-step {
                        position: absolute;
                        inset: 0;
                        transition: opacity 0.4s ease, transform 0.4s ease;
                    }
                    .form-step.active-step {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .form-step.hidden-step {
                        opacity: 0;
                        transform: translateY(40px);
                    }
                    .form-step.exited-step {
                        opacity: 0;
                        transform: translateY(-40px);
                    }
                    .email-error {
                        opacity: 0;
                        color: #ff6b6b;
                        transition: opacity 0.2s ease;
                    }
                    .email-error.visible {
                        opacity: 1;
                    }
                    #contact-message {
                        width: 100%;
                        resize: none;
                        overflow-y: hidden;
                        font-size: 2.5rem;
                        background: transparent;
                        border: none;
                        border-bottom: 1px solid #444;
                        color: inherit;
                    }
                "#}
            </style>
        </div>
    }
}
