// SPDX-License-Identifier: MPL-2.0
//! Contact form fields and validation.

use crate::domain::PhotographerId;

/// Editable field of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Message];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Field::FirstName => "contact-first-name",
            Field::LastName => "contact-last-name",
            Field::Email => "contact-email",
            Field::Message => "contact-message",
        }
    }

    #[must_use]
    pub fn error_key(self) -> &'static str {
        match self {
            Field::Email => "contact-error-email",
            _ => "contact-error-required",
        }
    }
}

/// Contents of the contact form, addressed to one photographer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub to_photographer: PhotographerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn new(to_photographer: PhotographerId) -> Self {
        Self {
            to_photographer,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            message: String::new(),
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn update(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Empties every field, keeping the recipient.
    pub fn clear(&mut self) {
        *self = Self::new(self.to_photographer);
    }

    /// Fields that are not acceptable, in display order. Empty when valid.
    #[must_use]
    pub fn validate(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| {
                let value = self.value(field).trim();
                match field {
                    Field::Email => !is_email(value),
                    _ => value.is_empty(),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// `local@domain.tld`, no whitespace, one `@`.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new(PhotographerId(243));
        form.update(Field::FirstName, "Jane".into());
        form.update(Field::LastName, "Doe".into());
        form.update(Field::Email, "jane@example.com".into());
        form.update(Field::Message, "Hello".into());
        form
    }

    #[test]
    fn empty_form_reports_every_field() {
        let form = ContactForm::new(PhotographerId(1));
        assert_eq!(form.validate(), Field::ALL.to_vec());
    }

    #[test]
    fn filled_form_is_valid() {
        assert!(filled().is_valid());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.update(Field::Message, "   \n".into());
        assert_eq!(form.validate(), vec![Field::Message]);
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("a@b.fr"));
        assert!(is_email("first.last@mail.example.org"));
        assert!(!is_email("plain"));
        assert!(!is_email("@b.fr"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a@.fr"));
        assert!(!is_email("a@b."));
        assert!(!is_email("a@b@c.fr"));
        assert!(!is_email("a b@c.fr"));
    }

    #[test]
    fn clear_keeps_recipient() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, ContactForm::new(PhotographerId(243)));
    }
}
