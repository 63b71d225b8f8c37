use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::submit::{self, SubmitError};
use crate::contact::textarea;
use crate::contact::wizard::{Effect, Step, Wizard};

/// Length of the step exit transition in the stylesheet. Used as the
/// fallback when no `transitionend` arrives.
pub const STEP_SWITCH_MS: u32 = 400;

pub enum ContactFormMsg {
    Next,
    MessageInput,
    Submit,
    Submitted(Result<(), SubmitError>),
    TransitionEnded(TransitionEvent),
    Settle(u32),
}

pub struct ContactForm {
    wizard: Wizard,
    form_ref: NodeRef,
    email_ref: NodeRef,
    message_ref: NodeRef,
    settle_timer: Option<Timeout>,
    focus_message: bool,
}

impl ContactForm {
    fn email_is_valid(&self) -> bool {
        self.email_ref
            .cast::<HtmlInputElement>()
            .map(|input| input.check_validity() && !input.value().is_empty())
            .unwrap_or(false)
    }

    fn perform(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FocusEmail => {
                    if let Some(input) = self.email_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
                // The panel is only focusable once it has been rendered visible
                Effect::FocusMessage => self.focus_message = true,
                Effect::ScheduleSettle(ticket) => {
                    let link = ctx.link().clone();
                    self.settle_timer = Some(Timeout::new(STEP_SWITCH_MS, move || {
                        link.send_message(ContactFormMsg::Settle(ticket));
                    }));
                }
                Effect::SendForm => self.send(ctx),
                Effect::ClearFields => {
                    if let Some(form) = self.form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                    if let Some(message) = self.message_ref.cast::<HtmlTextAreaElement>() {
                        let _ = textarea::reset(&message);
                    }
                }
            }
        }
    }

    fn send(&self, ctx: &Context<Self>) {
        let fields = match self.form_ref.cast::<HtmlFormElement>() {
            Some(form) => submit::collect_fields(&form),
            None => Err(SubmitError::Fields("form is not mounted".to_string())),
        };
        match fields {
            Ok(fields) => {
                log::debug!("Sending contact form");
                ctx.link().send_future(async move {
                    ContactFormMsg::Submitted(
                        submit::send_fields(config::get_form_endpoint(), fields).await,
                    )
                });
            }
            Err(e) => ctx.link().send_message(ContactFormMsg::Submitted(Err(e))),
        }
    }

    fn panel_view(&self, ctx: &Context<Self>, step: Step, children: Html) -> Html {
        let panel = self.wizard.panel(step);
        let visibility = if panel.visible { "visibility: visible" } else { "visibility: hidden" };
        let ontransitionend = ctx.link().callback(ContactFormMsg::TransitionEnded);
        html! {
            <div
                id={step.element_id()}
                class={classes!("form-step", panel.class)}
                style={visibility}
                ontransitionend={ontransitionend}
            >
                { children }
            </div>
        }
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            wizard: Wizard::new(),
            form_ref: NodeRef::default(),
            email_ref: NodeRef::default(),
            message_ref: NodeRef::default(),
            settle_timer: None,
            focus_message: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Next => {
                let effects = self.wizard.next(self.email_is_valid());
                self.perform(ctx, effects);
                true
            }
            ContactFormMsg::MessageInput => {
                if let Some(message) = self.message_ref.cast::<HtmlTextAreaElement>() {
                    if let Err(e) = textarea::autosize(&message) {
                        log::debug!("Could not resize message field: {:?}", e);
                    }
                }
                false
            }
            ContactFormMsg::Submit => {
                let effects = self.wizard.submit();
                self.perform(ctx, effects);
                true
            }
            ContactFormMsg::Submitted(result) => {
                if let Err(e) = &result {
                    log::error!("There was a problem sending your form: {}", e);
                } else {
                    log::info!("Contact form sent");
                }
                let effects = self.wizard.submission_finished(result.is_ok());
                self.perform(ctx, effects);
                true
            }
            ContactFormMsg::TransitionEnded(e) => {
                // Only the outgoing panel's own transition counts, not ones
                // bubbling up from its children or from the incoming panel
                let target_id = e
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .map(|el| el.id());
                let Some(ticket) = self.wizard.pending_ticket() else {
                    return false;
                };
                if target_id.as_deref() != Some(self.wizard.step().element_id()) {
                    return false;
                }
                let effects = self.wizard.settle(ticket);
                // Settled early, the fallback timer is no longer needed
                drop(self.settle_timer.take());
                self.perform(ctx, effects);
                true
            }
            ContactFormMsg::Settle(ticket) => {
                if self.wizard.pending_ticket() != Some(ticket) {
                    return false;
                }
                log::debug!("Step switch {} settled by timer", ticket);
                let effects = self.wizard.settle(ticket);
                self.perform(ctx, effects);
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.focus_message {
            self.focus_message = false;
            if let Some(message) = self.message_ref.cast::<HtmlTextAreaElement>() {
                let _ = message.focus();
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_next = ctx.link().callback(|_: MouseEvent| ContactFormMsg::Next);
        let on_email_key = ctx.link().batch_callback(|e: KeyboardEvent| {
            if e.key() == "Enter" {
                // Enter would otherwise submit the whole form from step one
                e.prevent_default();
                Some(ContactFormMsg::Next)
            } else {
                None
            }
        });
        let on_message_input = ctx.link().callback(|_: InputEvent| ContactFormMsg::MessageInput);
        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });

        let email_step = html! {
            <>
                <label for="contact-email" class="step-label">{"Where can we reach you?"}</label>
                <input
                    id="contact-email"
                    type="email"
                    name="email"
                    placeholder="you@company.com"
                    autocomplete="email"
                    required={true}
                    ref={self.email_ref.clone()}
                    onkeypress={on_email_key}
                />
                <span id="email-error" class={classes!("email-error", self.wizard.email_error().then(|| "visible"))}>
                    {"Please enter a valid email address"}
                </span>
                <button type="button" id="next-btn" class="step-button" onclick={on_next}>
                    {"Next →"}
                </button>
            </>
        };

        let message_step = html! {
            <>
                <label for="contact-message" class="step-label">{"Tell us about your project"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="1"
                    placeholder="Start typing..."
                    required={true}
                    ref={self.message_ref.clone()}
                    oninput={on_message_input}
                />
                <button
                    type="submit"
                    id="submit-btn"
                    class="step-button"
                    disabled={self.wizard.is_sending()}
                >
                    {"Send"}
                </button>
            </>
        };

        let confirmation_step = html! {
            <>
                <h3 class="step-label">{"Thank you."}</h3>
                <p class="step-note">{"Your message is on its way. We usually reply within two working days."}</p>
            </>
        };

        html! {
            <form id="multi-step-form" class="contact-form" ref={self.form_ref.clone()} onsubmit={on_submit}>
                { self.panel_view(ctx, Step::Email, email_step) }
                { self.panel_view(ctx, Step::Message, message_step) }
                { self.panel_view(ctx, Step::Confirmation, confirmation_step) }
            </form>
        }
    }
}
