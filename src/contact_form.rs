//! Contact form submission simulator.
//!
//! Front-end only: nothing is transmitted. Submit shows a loading state for
//! a fixed delay, then a success message for a fixed duration, then reverts
//! and resets the form.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// Button labels for each phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitLabels {
    pub idle: String,
    pub sending: String,
    pub sent: String,
}

impl SubmitPhase {
    /// Start a submission. `None` while a previous one is still in flight.
    #[must_use]
    pub fn submit(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Sending),
            Self::Sending | Self::Sent => None,
        }
    }

    /// Next phase when the current phase's timer fires.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Self::Sending => Self::Sent,
            Self::Sent | Self::Idle => Self::Idle,
        }
    }

    /// How long this phase lasts before [`advance`](Self::advance), if timed.
    #[must_use]
    pub fn duration_ms(self, sending_ms: u32, success_ms: u32) -> Option<u32> {
        match self {
            Self::Idle => None,
            Self::Sending => Some(sending_ms),
            Self::Sent => Some(success_ms),
        }
    }

    #[must_use]
    pub fn button_disabled(self) -> bool {
        self != Self::Idle
    }

    #[must_use]
    pub fn label(self, labels: &SubmitLabels) -> &str {
        match self {
            Self::Idle => &labels.idle,
            Self::Sending => &labels.sending,
            Self::Sent => &labels.sent,
        }
    }
}

/// Where the phase label is written inside the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelSlot {
    /// A dedicated label element; sibling markup such as icons is kept.
    Child,
    /// Plain-text button.
    Button,
    /// Child markup but no label element: the label is left alone.
    Untouched,
}

impl LabelSlot {
    #[must_use]
    pub fn pick(has_label_child: bool, has_child_elements: bool) -> Self {
        match (has_label_child, has_child_elements) {
            (true, _) => Self::Child,
            (false, false) => Self::Button,
            (false, true) => Self::Untouched,
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement};

    use super::{LabelSlot, SubmitLabels, SubmitPhase};
    use crate::config::ContactConfig;
    use crate::dom;
    use crate::error::{BehaviorError, report};

    struct FormParts {
        form: HtmlFormElement,
        button: HtmlButtonElement,
        label: Option<Element>,
        labels: SubmitLabels,
        config: ContactConfig,
    }

    impl FormParts {
        fn render(&self, phase: SubmitPhase) -> Result<(), BehaviorError> {
            self.button.set_disabled(phase.button_disabled());
            if let Some(label) = &self.label {
                label.set_text_content(Some(phase.label(&self.labels)));
            }
            dom::set_class(&self.button, &self.config.loading_class, phase == SubmitPhase::Sending)?;
            dom::set_class(&self.form, &self.config.success_class, phase == SubmitPhase::Sent)?;
            if phase == SubmitPhase::Idle {
                self.form.reset();
            }
            Ok(())
        }
    }

    /// Render `phase` and schedule the timer that leaves it.
    fn enter(parts: Rc<FormParts>, state: Rc<Cell<SubmitPhase>>, phase: SubmitPhase) {
        state.set(phase);
        report("contact", parts.render(phase));
        let Some(delay) = phase.duration_ms(parts.config.sending_ms, parts.config.success_ms) else {
            return;
        };
        dom::after(delay, move || {
            let next = state.get().advance();
            enter(parts, state, next);
        });
    }

    pub fn mount(document: &Document, config: &ContactConfig) -> Result<(), BehaviorError> {
        let form = dom::require(document, &config.form_selector)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| BehaviorError::missing(&config.form_selector))?;
        let button = dom::require_in(&form, &config.submit_selector)?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| BehaviorError::missing(&config.submit_selector))?;

        let child = button.query_selector(&config.label_selector)?;
        let label = match LabelSlot::pick(child.is_some(), button.child_element_count() > 0) {
            LabelSlot::Child => child,
            LabelSlot::Button => Some(button.clone().into()),
            LabelSlot::Untouched => None,
        };
        let labels = SubmitLabels {
            idle: label.as_ref().and_then(|el| el.text_content()).unwrap_or_default(),
            sending: config.sending_label.clone(),
            sent: config.success_label.clone(),
        };
        let target = form.clone();
        let parts = Rc::new(FormParts { form, button, label, labels, config: config.clone() });
        let state = Rc::new(Cell::new(SubmitPhase::Idle));

        dom::listen(&target, "submit", move |event| {
            event.prevent_default();
            let Some(next) = state.get().submit() else {
                log::debug!("contact: submission already in flight");
                return;
            };
            enter(Rc::clone(&parts), Rc::clone(&state), next);
        })?;
        Ok(())
    }
}
