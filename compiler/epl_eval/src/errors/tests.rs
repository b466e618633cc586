use pretty_assertions::assert_eq;

use super::*;

#[test]
fn unbound_variable_has_correct_kind() {
    let err = unbound_variable("x");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundVariable {
            name: "x".to_string()
        }
    );
    assert_eq!(err.message, "unbound variable: x");
    assert!(err.raised_value.is_none());
}

#[test]
fn invalid_application_details() {
    assert_eq!(
        no_arguments().message,
        "invalid application: no arguments supplied"
    );
    assert_eq!(
        no_parameters().message,
        "invalid application: procedure declares no parameters"
    );
    assert_eq!(
        not_a_procedure(&Value::int(3)).message,
        "invalid application: int is not a procedure"
    );
    assert_eq!(
        leftover_arguments(&Value::bool(true), 1).message,
        "invalid application: 1 argument left over but the result is bool, not a procedure"
    );
    assert_eq!(
        leftover_arguments(&Value::int(0), 2).message,
        "invalid application: 2 arguments left over but the result is int, not a procedure"
    );
}

#[test]
fn unhandled_exception_keeps_the_payload() {
    let err = unhandled_exception(Value::int(99));
    assert_eq!(err.message, "unhandled exception: 99");
    assert_eq!(err.raised_value, Some(Value::int(99)));
}

#[test]
fn type_mismatch_names_both_sides() {
    let err = type_mismatch("bool", &Value::int(1));
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "bool".to_string(),
            got: "int".to_string()
        }
    );
    assert_eq!(err.message, "type mismatch: expected bool, got int");
}

#[test]
fn unsupported_form_names_the_layer() {
    let err = unsupported_form("raise", Layer::Lazy);
    assert_eq!(err.message, "raise is not part of the LAZY language");
}

#[test]
fn notes_render_after_the_message() {
    let err = native_failure("/", "division by zero").with_note("while applying `/`");
    assert_eq!(
        err.to_string(),
        "operator `/` failed: division by zero\n  note: while applying `/`"
    );
}
