//! Error slots for the login and signup forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::util::i18n::Locale;
use crate::util::validation::{Field, FieldError};

/// Why a form submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// Local validation failed; no request was sent.
    Fields(Vec<FieldError>),
    /// The request failed; the message is ready to show.
    General(String),
}

/// Per-field and form-level error messages currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Submission failure not tied to a single field.
    pub general: Option<String>,
}

impl FormErrors {
    /// Replace field messages with `errors`. The general slot is cleared.
    pub fn apply(&mut self, errors: &[FieldError], locale: Locale) {
        *self = Self::default();
        for error in errors {
            let slot = self.slot_mut(error.field);
            if slot.is_none() {
                *slot = Some(error.message(locale).to_owned());
            }
        }
    }

    /// Show a submission failure.
    pub fn show(&mut self, error: &SubmitError, locale: Locale) {
        match error {
            SubmitError::Fields(errors) => self.apply(errors, locale),
            SubmitError::General(message) => {
                *self = Self { general: Some(message.clone()), ..Self::default() };
            }
        }
    }

    /// Clear one field's message, typically when the user edits it.
    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.general.is_none()
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}
