// SPDX-License-Identifier: MPL-2.0
//! Contact modal of the profile screen.
//!
//! Opening the modal takes the page scroll lock, closing gives it back and
//! returns focus to the contact button. Submitting a valid form only logs
//! the request; nothing is sent anywhere.

mod form;

pub use form::{ContactForm, Field};

use crate::domain::PhotographerId;

#[derive(Debug, Clone)]
pub enum Message {
    Open,
    Close,
    /// Escape pressed while the modal is shown.
    EscapePressed,
    FieldChanged(Field, String),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Modal shown; lock page scroll and focus the dialog.
    Opened,
    /// Modal hidden; release page scroll and focus the contact button.
    Closed,
    /// Form was accepted and the modal closed.
    Submitted(ContactForm),
}

#[derive(Debug, Clone)]
pub struct State {
    form: ContactForm,
    open: bool,
    /// Fields rejected by the last submit attempt.
    invalid: Vec<Field>,
}

impl State {
    #[must_use]
    pub fn new(to_photographer: PhotographerId) -> Self {
        Self {
            form: ContactForm::new(to_photographer),
            open: false,
            invalid: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open => {
                if self.open {
                    return Effect::None;
                }
                self.open = true;
                Effect::Opened
            }
            Message::Close | Message::EscapePressed => self.close(),
            Message::FieldChanged(field, value) => {
                self.form.update(field, value);
                self.invalid.retain(|f| *f != field);
                Effect::None
            }
            Message::Submit => {
                if !self.open {
                    return Effect::None;
                }
                self.invalid = self.form.validate();
                if !self.invalid.is_empty() {
                    tracing::debug!(invalid = ?self.invalid, "contact form rejected");
                    return Effect::None;
                }

                let submitted = self.form.clone();
                tracing::info!(
                    to = %submitted.to_photographer,
                    first_name = %submitted.first_name,
                    last_name = %submitted.last_name,
                    email = %submitted.email,
                    message = %submitted.message,
                    "contact request"
                );
                self.form.clear();
                self.open = false;
                Effect::Submitted(submitted)
            }
        }
    }

    fn close(&mut self) -> Effect {
        if !self.open {
            return Effect::None;
        }
        self.open = false;
        self.invalid.clear();
        Effect::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(state: &mut State) {
        state.handle(Message::FieldChanged(Field::FirstName, "Mimi".into()));
        state.handle(Message::FieldChanged(Field::LastName, "Keel".into()));
        state.handle(Message::FieldChanged(Field::Email, "mimi@keel.com".into()));
        state.handle(Message::FieldChanged(Field::Message, "Bonjour".into()));
    }

    #[test]
    fn open_then_close() {
        let mut state = State::new(PhotographerId(243));
        assert_eq!(state.handle(Message::Open), Effect::Opened);
        assert!(state.is_open());
        assert_eq!(state.handle(Message::Open), Effect::None);

        assert_eq!(state.handle(Message::EscapePressed), Effect::Closed);
        assert!(!state.is_open());
        assert_eq!(state.handle(Message::Close), Effect::None);
    }

    #[test]
    fn invalid_submit_keeps_modal_open() {
        let mut state = State::new(PhotographerId(243));
        state.handle(Message::Open);
        assert_eq!(state.handle(Message::Submit), Effect::None);
        assert!(state.is_open());
        assert!(state.is_invalid(Field::Email));

        state.handle(Message::FieldChanged(Field::Email, "x@y.z".into()));
        assert!(!state.is_invalid(Field::Email));
    }

    #[test]
    fn valid_submit_clears_and_closes() {
        let mut state = State::new(PhotographerId(243));
        state.handle(Message::Open);
        fill(&mut state);

        let effect = state.handle(Message::Submit);
        let Effect::Submitted(form) = effect else {
            panic!("expected submission, got {effect:?}");
        };
        assert_eq!(form.first_name, "Mimi");
        assert_eq!(form.to_photographer, PhotographerId(243));
        assert!(!state.is_open());
        assert_eq!(state.form(), &ContactForm::new(PhotographerId(243)));
    }

    #[test]
    fn submit_while_closed_is_ignored() {
        let mut state = State::new(PhotographerId(1));
        fill(&mut state);
        assert_eq!(state.handle(Message::Submit), Effect::None);
    }
}
