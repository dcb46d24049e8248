//! Synchronous form validators for the login and signup forms.
//!
//! Validators are pure: no storage, no network. Form-level validators report
//! every failing field at once, ordered email then password, so the view can
//! fill all error slots in one pass.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use super::i18n::{Locale, Text};

/// Minimum password length accepted at signup.
pub const MIN_SIGNUP_PASSWORD_LEN: usize = 6;

/// Form fields that can carry an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

/// Why a field was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueKind {
    Required,
    InvalidFormat,
    TooShort,
}

/// A rejected field value with the message to show for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: IssueKind,
    pub text: Text,
}

impl FieldError {
    const fn new(field: Field, kind: IssueKind, text: Text) -> Self {
        Self { field, kind, text }
    }

    pub fn message(&self, locale: Locale) -> &'static str {
        locale.text(self.text)
    }
}

/// Validate an email address.
///
/// # Errors
///
/// `Required` for an empty string, `InvalidFormat` for anything else that is
/// not a well-formed address.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.is_empty() {
        return Err(FieldError::new(Field::Email, IssueKind::Required, Text::EmailRequired));
    }
    if !is_valid_email(email) {
        return Err(FieldError::new(Field::Email, IssueKind::InvalidFormat, Text::EmailInvalid));
    }
    Ok(())
}

/// Validate a new password at signup.
///
/// # Errors
///
/// `Required` when empty, `TooShort` below [`MIN_SIGNUP_PASSWORD_LEN`]
/// characters. Both carry the too-short message.
pub fn validate_signup_password(password: &str) -> Result<(), FieldError> {
    let len = password.chars().count();
    if len == 0 {
        return Err(FieldError::new(Field::Password, IssueKind::Required, Text::PasswordTooShort));
    }
    if len < MIN_SIGNUP_PASSWORD_LEN {
        return Err(FieldError::new(Field::Password, IssueKind::TooShort, Text::PasswordTooShort));
    }
    Ok(())
}

/// Validate an existing password at login. Any non-empty value passes, so
/// accounts created under older length rules can still sign in.
///
/// # Errors
///
/// `Required` when empty.
pub fn validate_login_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::new(Field::Password, IssueKind::Required, Text::PasswordRequired));
    }
    Ok(())
}

/// Validate the login form.
///
/// # Errors
///
/// Every failing field, email first.
pub fn validate_login_form(email: &str, password: &str) -> Result<(), Vec<FieldError>> {
    collect([validate_email(email), validate_login_password(password)])
}

/// Validate the signup form.
///
/// # Errors
///
/// Every failing field, email first.
pub fn validate_signup_form(email: &str, password: &str) -> Result<(), Vec<FieldError>> {
    collect([validate_email(email), validate_signup_password(password)])
}

fn collect<const N: usize>(results: [Result<(), FieldError>; N]) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = results.into_iter().filter_map(Result::err).collect();
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Syntactic email check.
///
/// Accepts `local@domain.tld` where the local part uses letters, digits and
/// `_ ' + - .`, does not start with `.` and does not end with `.` or `'`; the
/// domain is one or more `label.` prefixes (alphanumeric start, then
/// alphanumerics or `-`) followed by an alphabetic TLD of two or more letters.
/// `..` is rejected anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains("..") {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    valid_local_part(local) && valid_domain(domain)
}

fn valid_local_part(local: &str) -> bool {
    let Some(last) = local.chars().last() else {
        return false;
    };
    !local.starts_with('.')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'))
        && (last.is_ascii_alphanumeric() || matches!(last, '_' | '+' | '-'))
}

fn valid_domain(domain: &str) -> bool {
    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    tld_ok && labels.split('.').all(valid_domain_label)
}

fn valid_domain_label(label: &str) -> bool {
    let mut chars = label.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}
