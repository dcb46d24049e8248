use super::*;
use crate::util::validation::{validate_login_form, validate_signup_form};

#[test]
fn apply_fills_every_failing_field_at_once() {
    let mut errors = FormErrors::default();
    let failures = validate_signup_form("", "abc").unwrap_err();

    errors.apply(&failures, Locale::Pt);

    assert_eq!(errors.get(Field::Email), Some("Email e obrigatorio"));
    assert_eq!(errors.get(Field::Password), Some("Senha deve ter no minimo 6 caracteres"));
    assert_eq!(errors.general, None);
}

#[test]
fn apply_replaces_previous_state() {
    let mut errors = FormErrors {
        general: Some("Email ou senha invalidos".to_owned()),
        password: Some("old".to_owned()),
        ..FormErrors::default()
    };
    let failures = validate_login_form("not-an-email", "x").unwrap_err();

    errors.apply(&failures, Locale::En);

    assert_eq!(errors.email.as_deref(), Some("Invalid email"));
    assert_eq!(errors.password, None);
    assert_eq!(errors.general, None);
}

#[test]
fn clear_only_touches_one_field() {
    let mut errors = FormErrors::default();
    errors.apply(&validate_login_form("", "").unwrap_err(), Locale::Pt);

    errors.clear(Field::Email);

    assert_eq!(errors.email, None);
    assert_eq!(errors.get(Field::Password), Some("Senha e obrigatoria"));
    assert!(!errors.is_empty());
}

#[test]
fn clear_all_empties_every_slot() {
    let mut errors = FormErrors { general: Some("x".to_owned()), ..FormErrors::default() };
    errors.apply(&validate_login_form("", "").unwrap_err(), Locale::Pt);
    errors.general = Some("x".to_owned());

    errors.clear_all();

    assert!(errors.is_empty());
}

#[test]
fn show_general_replaces_field_messages() {
    let mut errors = FormErrors::default();
    errors.apply(&validate_login_form("", "").unwrap_err(), Locale::Pt);

    errors.show(&SubmitError::General("Email ou senha invalidos".to_owned()), Locale::Pt);

    assert_eq!(errors.email, None);
    assert_eq!(errors.password, None);
    assert_eq!(errors.general.as_deref(), Some("Email ou senha invalidos"));
}

#[test]
fn show_fields_delegates_to_apply() {
    let mut errors = FormErrors::default();
    let failures = validate_signup_form("a@b.com", "123").unwrap_err();

    errors.show(&SubmitError::Fields(failures), Locale::En);

    assert_eq!(errors.email, None);
    assert_eq!(errors.get(Field::Password), Some("Password must be at least 6 characters"));
}
