use super::*;

// =============================================================
// validate_email
// =============================================================

#[test]
fn empty_email_is_required() {
    let err = validate_email("").unwrap_err();
    assert_eq!(err.field, Field::Email);
    assert_eq!(err.kind, IssueKind::Required);
    assert_eq!(err.message(Locale::Pt), "Email e obrigatorio");
}

#[test]
fn malformed_emails_are_invalid_format_only() {
    for input in [
        "plainaddress",
        "@example.com",
        "user@",
        "user@example",
        "user@example.c",
        "user@@example.com",
        "user@exa mple.com",
        ".user@example.com",
        "user.@example.com",
        "us..er@example.com",
        "user@example..com",
        "user@-example.com",
        "user@example.c0m",
        " ",
    ] {
        let err = validate_email(input).unwrap_err();
        assert_eq!(err.kind, IssueKind::InvalidFormat, "input {input:?}");
    }
}

#[test]
fn wellformed_emails_pass() {
    for input in [
        "user@example.com",
        "first.last@sub.example.com.br",
        "o'brien+tag@mail-host.io",
        "USER_1@EXAMPLE.ORG",
        "a@b.co",
    ] {
        assert_eq!(validate_email(input), Ok(()), "input {input:?}");
    }
}

// =============================================================
// passwords
// =============================================================

#[test]
fn signup_password_accepts_iff_six_or_more_chars() {
    for len in 0..12 {
        let password = "x".repeat(len);
        assert_eq!(validate_signup_password(&password).is_ok(), len >= 6, "len {len}");
    }
}

#[test]
fn signup_password_counts_characters_not_bytes() {
    assert!(validate_signup_password("ççççç").is_err());
    assert!(validate_signup_password("çççççç").is_ok());
}

#[test]
fn signup_password_kinds() {
    let empty = validate_signup_password("").unwrap_err();
    assert_eq!(empty.kind, IssueKind::Required);
    assert_eq!(empty.text, Text::PasswordTooShort);

    let short = validate_signup_password("abc").unwrap_err();
    assert_eq!(short.kind, IssueKind::TooShort);
    assert_eq!(short.message(Locale::En), "Password must be at least 6 characters");
}

#[test]
fn login_password_accepts_any_non_empty_value() {
    assert!(validate_login_password("a").is_ok());
    assert!(validate_login_password("12345").is_ok());
    assert!(validate_login_password(&"p".repeat(500)).is_ok());

    let err = validate_login_password("").unwrap_err();
    assert_eq!(err.kind, IssueKind::Required);
    assert_eq!(err.message(Locale::Pt), "Senha e obrigatoria");
}

// =============================================================
// form validators
// =============================================================

#[test]
fn login_form_reports_all_failures_in_field_order() {
    let errors = validate_login_form("bad", "").unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| (e.field, e.kind)).collect();
    assert_eq!(
        fields,
        vec![(Field::Email, IssueKind::InvalidFormat), (Field::Password, IssueKind::Required)]
    );
}

#[test]
fn login_form_accepts_short_password() {
    assert_eq!(validate_login_form("user@example.com", "abc"), Ok(()));
}

#[test]
fn signup_form_rejects_short_password_only() {
    let errors = validate_signup_form("user@example.com", "abc").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, Field::Password);
    assert_eq!(errors[0].kind, IssueKind::TooShort);
}

#[test]
fn signup_form_accepts_valid_input() {
    assert_eq!(validate_signup_form("user@example.com", "validpass"), Ok(()));
}
