use super::*;

// =============================================================
// ErrorDetail::parse
// =============================================================

#[test]
fn parse_string_detail() {
    assert_eq!(
        ErrorDetail::parse(r#"{"detail":"Email already registered"}"#),
        ErrorDetail::Message("Email already registered".to_owned())
    );
}

#[test]
fn parse_issue_list_detail() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"Email inválido","type":"value_error"}]}"#;
    let ErrorDetail::Issues(issues) = ErrorDetail::parse(body) else {
        panic!("expected issues");
    };
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].msg.as_deref(), Some("Email inválido"));
    assert_eq!(issues[0].kind, "value_error");
    assert_eq!(issues[0].path(), "body.email");
}

#[test]
fn parse_issue_path_with_index() {
    let body = r#"{"detail":[{"loc":["body","items",2,"name"],"msg":"m","type":"missing"}]}"#;
    let ErrorDetail::Issues(issues) = ErrorDetail::parse(body) else {
        panic!("expected issues");
    };
    assert_eq!(issues[0].path(), "body.items.2.name");
}

#[test]
fn parse_keeps_malformed_entries_without_dropping_the_list() {
    let body = r#"{"detail":[{"loc":[null,-1,"email"],"msg":"Y","type":7},"oops"]}"#;
    let ErrorDetail::Issues(issues) = ErrorDetail::parse(body) else {
        panic!("expected issues");
    };
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].path(), "null.-1.email");
    assert_eq!(issues[0].msg.as_deref(), Some("Y"));
    assert_eq!(issues[0].kind, "");
    assert_eq!(issues[1], ValidationIssue::default());
}

#[test]
fn parse_non_json_is_unrecognized() {
    assert_eq!(ErrorDetail::parse("<html>Bad Gateway</html>"), ErrorDetail::Unrecognized);
    assert_eq!(ErrorDetail::parse(""), ErrorDetail::Unrecognized);
}

#[test]
fn parse_envelope_without_detail_is_unrecognized() {
    assert_eq!(ErrorDetail::parse(r#"{"error":"boom"}"#), ErrorDetail::Unrecognized);
    assert_eq!(ErrorDetail::parse(r#"{"detail":42}"#), ErrorDetail::Unrecognized);
}

// =============================================================
// error_message
// =============================================================

#[test]
fn message_from_string_detail() {
    let err = ApiError::from_response(400, r#"{"detail":"X"}"#);
    assert_eq!(error_message(Some(&err), DEFAULT_ERROR_MESSAGE), "X");
}

#[test]
fn message_from_first_issue() {
    let err = ApiError::from_response(
        422,
        r#"{"detail":[{"loc":["body"],"msg":"Y","type":"t"},{"loc":["body"],"msg":"Z","type":"t"}]}"#,
    );
    assert_eq!(error_message(Some(&err), DEFAULT_ERROR_MESSAGE), "Y");
}

#[test]
fn message_from_first_issue_ignores_odd_siblings_and_locations() {
    let bodies = [
        r#"{"detail":[{"msg":"Y"},{"loc":["body"]}]}"#,
        r#"{"detail":[{"loc":[null],"msg":"Y","type":"x"}]}"#,
        r#"{"detail":[{"loc":[-1],"msg":"Y","type":"x"}]}"#,
        r#"{"detail":[{"loc":["body"],"msg":"Y","type":{"nested":true}},42]}"#,
    ];
    for body in bodies {
        let err = ApiError::from_response(422, body);
        assert_eq!(error_message(Some(&err), "FB"), "Y", "body {body}");
    }
}

#[test]
fn message_from_first_issue_without_msg_falls_back() {
    let err = ApiError::from_response(422, r#"{"detail":[{"loc":["body"]},{"msg":"Z"}]}"#);
    assert_eq!(error_message(Some(&err), "FB"), "FB");
}

#[test]
fn message_from_empty_issue_list_falls_back() {
    let err = ApiError::from_response(422, r#"{"detail":[]}"#);
    assert_eq!(error_message(Some(&err), DEFAULT_ERROR_MESSAGE), DEFAULT_ERROR_MESSAGE);
}

#[test]
fn message_for_missing_error_falls_back() {
    assert_eq!(error_message(None, DEFAULT_ERROR_MESSAGE), "Erro desconhecido");
    assert_eq!(error_message(None, "custom"), "custom");
}

#[test]
fn message_for_network_and_schema_errors_uses_override() {
    let network = ApiError::Network("offline".to_owned());
    let schema = ApiError::Schema("missing field `email`".to_owned());
    assert_eq!(error_message(Some(&network), "Falha"), "Falha");
    assert_eq!(error_message(Some(&schema), "Falha"), "Falha");
}

#[test]
fn message_method_uses_default_fallback() {
    let err = ApiError::from_response(500, "Internal Server Error");
    assert_eq!(err.message(), DEFAULT_ERROR_MESSAGE);
}

#[test]
fn summary_names_message_and_issue_locations() {
    let err = ApiError::from_response(
        422,
        r#"{"detail":[{"loc":["body","email"],"msg":"Y","type":"t"},{"loc":["body","password"],"msg":"Z"}]}"#,
    );
    assert_eq!(err.summary(), "request failed with status 422: Y [body.email, body.password]");
    assert_eq!(
        ApiError::Network("offline".to_owned()).summary(),
        "network error: offline: Erro desconhecido"
    );
}

// =============================================================
// ApiError classification
// =============================================================

#[test]
fn status_only_present_for_http_failures() {
    assert_eq!(ApiError::from_response(404, "").status(), Some(404));
    assert_eq!(ApiError::Network("x".to_owned()).status(), None);
    assert_eq!(ApiError::Schema("x".to_owned()).status(), None);
}

#[test]
fn unauthorized_is_exactly_401() {
    assert!(ApiError::from_response(401, "").is_unauthorized());
    assert!(!ApiError::from_response(403, "").is_unauthorized());
    assert!(!ApiError::Network("401".to_owned()).is_unauthorized());
}
