use pretty_assertions::assert_eq;

use super::{call, int, run, run_err, sub, var};
use crate::{EvalErrorKind, Value};
use epl_ir::{Expr, Procedure};

/// Calls `g` twice and subtracts the results.
fn twice(g: Expr) -> Expr {
    Expr::let_in(
        [("g", g)],
        Expr::let_in(
            [("a", call(var("g"), [int(11)]))],
            Expr::let_in([("b", call(var("g"), [int(11)]))], sub(var("a"), var("b"))),
        ),
    )
}

#[test]
fn explicit_counter() {
    let bump = Expr::block([
        Expr::setref(var("counter"), sub(Expr::deref(var("counter")), int(-1))),
        Expr::deref(var("counter")),
    ]);
    let g = Expr::let_in(
        [("counter", Expr::newref(int(0)))],
        Expr::proc(["dummy"], bump),
    );
    assert_eq!(run(&twice(g)), Value::int(-1));
}

#[test]
fn implicit_counter() {
    let bump = Expr::block([
        Expr::assign("count", sub(var("count"), int(-1))),
        var("count"),
    ]);
    let g = Expr::let_in([("count", int(0))], Expr::proc(["dummy"], bump));
    assert_eq!(run(&twice(g)), Value::int(-1));
}

#[test]
fn call_by_reference_swap() {
    let swap = Expr::proc(
        ["x"],
        Expr::proc(
            ["y"],
            Expr::let_in(
                [("temp", Expr::deref(var("x")))],
                Expr::block([
                    Expr::setref(var("x"), Expr::deref(var("y"))),
                    Expr::setref(var("y"), var("temp")),
                ]),
            ),
        ),
    );
    let e = Expr::let_in(
        [("a", int(3))],
        Expr::let_in(
            [("b", int(4))],
            Expr::let_in(
                [("swap", swap)],
                Expr::block([
                    call(call(var("swap"), [Expr::var_ref("a")]), [Expr::var_ref("b")]),
                    sub(var("a"), var("b")),
                ]),
            ),
        ),
    );
    assert_eq!(run(&e), Value::int(1));
}

#[test]
fn assignment_in_recursive_procedures() {
    let step = Expr::block([
        Expr::assign("total", Expr::op("+", [var("total"), var("n")])),
        call(var("loop"), [sub(var("n"), int(1))]),
    ]);
    let body = Expr::cond(Expr::is_zero(var("n")), var("total"), step);
    let e = Expr::let_in(
        [("total", int(0))],
        Expr::letrec(
            [("loop", Procedure::new(["n"], body))],
            call(var("loop"), [int(4)]),
        ),
    );
    assert_eq!(run(&e), Value::int(10));
}

#[test]
fn setref_and_assign_yield_the_stored_value() {
    let e = Expr::let_in(
        [("r", Expr::newref(int(0)))],
        Expr::setref(var("r"), int(7)),
    );
    assert_eq!(run(&e), Value::int(7));
    let e = Expr::let_in([("x", int(0))], Expr::assign("x", int(8)));
    assert_eq!(run(&e), Value::int(8));
}

#[test]
fn blocks_yield_their_last_value() {
    assert_eq!(run(&Expr::block([int(1), int(2), int(3)])), Value::int(3));
    assert_eq!(run(&Expr::block([])), Value::int(0));
}

#[test]
fn earlier_effects_are_visible_to_later_bindings() {
    let e = Expr::let_in(
        [("r", Expr::newref(int(0)))],
        Expr::let_in(
            [
                ("a", Expr::setref(var("r"), int(1))),
                ("b", Expr::deref(var("r"))),
            ],
            var("b"),
        ),
    );
    assert_eq!(run(&e), Value::int(1));
}

#[test]
fn references_to_unbound_names_fail() {
    let err = run_err(&Expr::var_ref("ghost"));
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundVariable {
            name: "ghost".to_string()
        }
    );
}

#[test]
fn assignment_never_creates_a_binding() {
    let err = run_err(&Expr::assign("fresh", int(1)));
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundVariable {
            name: "fresh".to_string()
        }
    );
}

#[test]
fn deref_needs_a_reference() {
    let err = run_err(&Expr::deref(int(3)));
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "reference".to_string(),
            got: "int".to_string()
        }
    );
    let err = run_err(&Expr::setref(int(3), int(4)));
    assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { .. }));
}

#[test]
fn variable_references_alias_the_binding() {
    let e = Expr::let_in(
        [("x", int(1))],
        Expr::let_in(
            [("r", Expr::var_ref("x"))],
            Expr::block([Expr::assign("x", int(5)), Expr::deref(var("r"))]),
        ),
    );
    assert_eq!(run(&e), Value::int(5));
}
