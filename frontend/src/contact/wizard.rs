//! Step logic of the contact form, free of any DOM access so it can be
//! exercised directly. The form component feeds it user actions and network
//! outcomes and carries out the [`Effect`]s it hands back.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Email,
    Message,
    Confirmation,
}

impl Step {
    /// Identifier of the panel element rendering this step.
    pub fn element_id(self) -> &'static str {
        match self {
            Step::Email => "step-1",
            Step::Message => "step-2",
            Step::Confirmation => "step-3",
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::Email => Some(Step::Message),
            Step::Message => Some(Step::Confirmation),
            Step::Confirmation => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Settled,
    /// The current step is animating out. `ticket` identifies this switch so
    /// a late timer or a second `transitionend` cannot settle a later one.
    Exiting { to: Step, ticket: u32 },
}

/// Side effects the component must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FocusEmail,
    FocusMessage,
    /// Settle switch `ticket` once the exit transition has had time to run.
    ScheduleSettle(u32),
    SendForm,
    ClearFields,
}

/// How a step panel should currently look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub class: &'static str,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    step: Step,
    phase: Phase,
    email_error: bool,
    sending: bool,
    tickets: u32,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::Email,
            phase: Phase::Settled,
            email_error: false,
            sending: false,
            tickets: 0,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn email_error(&self) -> bool {
        self.email_error
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    fn is_settled_on(&self, step: Step) -> bool {
        self.step == step && self.phase == Phase::Settled
    }

    /// The "next" action on the email step. `email_ok` is the input's own
    /// validity check combined with a non-empty value.
    pub fn next(&mut self, email_ok: bool) -> Vec<Effect> {
        if !self.is_settled_on(Step::Email) {
            return Vec::new();
        }
        if !email_ok {
            self.email_error = true;
            return vec![Effect::FocusEmail];
        }
        self.email_error = false;
        self.begin_switch()
    }

    /// Form submission from the message step. Ignored anywhere else and while
    /// a previous submission is still in flight.
    pub fn submit(&mut self) -> Vec<Effect> {
        if !self.is_settled_on(Step::Message) || self.sending {
            return Vec::new();
        }
        self.sending = true;
        vec![Effect::SendForm]
    }

    /// Result of the request started by [`Effect::SendForm`]. A failure keeps
    /// the wizard where it is with every field intact.
    pub fn submission_finished(&mut self, ok: bool) -> Vec<Effect> {
        if !self.sending {
            return Vec::new();
        }
        self.sending = false;
        if !ok || !self.is_settled_on(Step::Message) {
            return Vec::new();
        }
        let mut effects = self.begin_switch();
        effects.push(Effect::ClearFields);
        effects
    }

    /// Completes switch `ticket`. Stale or repeated tickets do nothing.
    pub fn settle(&mut self, ticket: u32) -> Vec<Effect> {
        match self.phase {
            Phase::Exiting { to, ticket: current } if current == ticket => {
                self.step = to;
                self.phase = Phase::Settled;
                if to == Step::Message {
                    vec![Effect::FocusMessage]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    /// Ticket of the switch in progress, if any.
    pub fn pending_ticket(&self) -> Option<u32> {
        match self.phase {
            Phase::Exiting { ticket, .. } => Some(ticket),
            Phase::Settled => None,
        }
    }

    fn begin_switch(&mut self) -> Vec<Effect> {
        let Some(to) = self.step.next() else {
            return Vec::new();
        };
        self.tickets += 1;
        self.phase = Phase::Exiting {
            to,
            ticket: self.tickets,
        };
        vec![Effect::ScheduleSettle(self.tickets)]
    }

    pub fn panel(&self, step: Step) -> Panel {
        let exiting = matches!(self.phase, Phase::Exiting { .. });
        if step == self.step {
            if exiting {
                Panel { class: "exited-step", visible: true }
            } else {
                Panel { class: "active-step", visible: true }
            }
        } else if step < self.step {
            Panel { class: "exited-step", visible: false }
        } else {
            Panel { class: "hidden-step", visible: false }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled_on_message() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.next(true);
        let ticket = wizard.pending_ticket().unwrap();
        wizard.settle(ticket);
        wizard
    }

    #[test]
    fn starts_on_email_with_only_first_panel_shown() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step(), Step::Email);
        assert_eq!(wizard.panel(Step::Email), Panel { class: "active-step", visible: true });
        assert_eq!(wizard.panel(Step::Message), Panel { class: "hidden-step", visible: false });
        assert_eq!(wizard.panel(Step::Confirmation), Panel { class: "hidden-step", visible: false });
    }

    #[test]
    fn invalid_email_shows_error_and_stays() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.next(false), vec![Effect::FocusEmail]);
        assert_eq!(wizard.step(), Step::Email);
        assert_eq!(wizard.phase(), Phase::Settled);
        assert!(wizard.email_error());
    }

    #[test]
    fn valid_email_moves_to_message_and_focuses_it() {
        let mut wizard = Wizard::new();
        wizard.next(false);
        let effects = wizard.next(true);
        assert!(!wizard.email_error());
        assert_eq!(effects, vec![Effect::ScheduleSettle(1)]);

        // Old panel animates out while the new one is still hidden
        assert_eq!(wizard.step(), Step::Email);
        assert_eq!(wizard.panel(Step::Email), Panel { class: "exited-step", visible: true });
        assert_eq!(wizard.panel(Step::Message), Panel { class: "hidden-step", visible: false });

        assert_eq!(wizard.settle(1), vec![Effect::FocusMessage]);
        assert_eq!(wizard.step(), Step::Message);
        assert_eq!(wizard.panel(Step::Email), Panel { class: "exited-step", visible: false });
        assert_eq!(wizard.panel(Step::Message), Panel { class: "active-step", visible: true });
    }

    #[test]
    fn next_is_ignored_mid_switch() {
        let mut wizard = Wizard::new();
        wizard.next(true);
        assert!(wizard.next(true).is_empty());
        assert!(wizard.next(false).is_empty());
        assert!(!wizard.email_error());
    }

    #[test]
    fn duplicate_and_stale_settles_do_nothing() {
        let mut wizard = Wizard::new();
        wizard.next(true);
        assert_eq!(wizard.settle(1), vec![Effect::FocusMessage]);
        // Timer fallback arriving after transitionend already settled
        assert!(wizard.settle(1).is_empty());
        assert!(wizard.settle(7).is_empty());
        assert_eq!(wizard.step(), Step::Message);
    }

    #[test]
    fn submit_only_from_settled_message_step() {
        let mut wizard = Wizard::new();
        assert!(wizard.submit().is_empty());
        wizard.next(true);
        assert!(wizard.submit().is_empty());

        let mut wizard = settled_on_message();
        assert_eq!(wizard.submit(), vec![Effect::SendForm]);
        assert!(wizard.is_sending());
        // Double submit while in flight
        assert!(wizard.submit().is_empty());
    }

    #[test]
    fn successful_submission_confirms_and_clears() {
        let mut wizard = settled_on_message();
        wizard.submit();
        let effects = wizard.submission_finished(true);
        assert_eq!(effects, vec![Effect::ScheduleSettle(2), Effect::ClearFields]);
        assert!(wizard.settle(2).is_empty());
        assert_eq!(wizard.step(), Step::Confirmation);
        assert_eq!(wizard.panel(Step::Confirmation), Panel { class: "active-step", visible: true });
        assert_eq!(wizard.panel(Step::Message), Panel { class: "exited-step", visible: false });
    }

    #[test]
    fn failed_submission_stays_on_message() {
        let mut wizard = settled_on_message();
        wizard.submit();
        assert!(wizard.submission_finished(false).is_empty());
        assert_eq!(wizard.step(), Step::Message);
        assert_eq!(wizard.phase(), Phase::Settled);
        assert!(!wizard.is_sending());

        // The user can try again
        assert_eq!(wizard.submit(), vec![Effect::SendForm]);
    }

    #[test]
    fn unrequested_outcome_is_ignored() {
        let mut wizard = settled_on_message();
        assert!(wizard.submission_finished(true).is_empty());
        assert_eq!(wizard.step(), Step::Message);
    }

    #[test]
    fn confirmation_is_terminal() {
        let mut wizard = settled_on_message();
        wizard.submit();
        wizard.submission_finished(true);
        wizard.settle(2);
        assert!(wizard.next(true).is_empty());
        assert!(wizard.submit().is_empty());
        assert_eq!(wizard.step(), Step::Confirmation);
    }

    #[test]
    fn step_ids_match_markup() {
        let steps = [Step::Email, Step::Message, Step::Confirmation];
        let ids: Vec<_> = steps.iter().map(|s| s.element_id()).collect();
        assert_eq!(ids, vec!["step-1", "step-2", "step-3"]);
    }
}
