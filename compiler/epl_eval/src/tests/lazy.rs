use pretty_assertions::assert_eq;

use super::{call, int, run, run_err, sub, var};
use crate::{EvalErrorKind, Value};
use epl_ir::{Expr, Procedure};

#[test]
fn forcing_evaluates_the_deferred_expression() {
    let e = Expr::let_in(
        [("t", Expr::lazy(sub(int(1), int(2))))],
        Expr::force(var("t")),
    );
    assert_eq!(run(&e), Value::int(-1));
}

#[test]
fn unforced_thunks_never_run() {
    let e = Expr::letrec(
        [("loop", Procedure::new(["x"], call(var("loop"), [var("x")])))],
        Expr::let_in(
            [("f", Expr::proc(["z"], int(11)))],
            call(var("f"), [Expr::lazy(call(var("loop"), [int(0)]))]),
        ),
    );
    assert_eq!(run(&e), Value::int(11));
}

#[test]
fn thunks_capture_their_definition_scope() {
    let e = Expr::let_in(
        [("x", int(1))],
        Expr::let_in(
            [("t", Expr::lazy(var("x")))],
            Expr::let_in([("x", int(2))], Expr::force(var("t"))),
        ),
    );
    assert_eq!(run(&e), Value::int(1));
}

#[test]
fn every_force_re_evaluates() {
    let bump = Expr::block([
        Expr::assign("c", sub(var("c"), int(-1))),
        var("c"),
    ]);
    let e = Expr::let_in(
        [("c", int(0))],
        Expr::let_in(
            [("t", Expr::lazy(bump))],
            sub(Expr::force(var("t")), Expr::force(var("t"))),
        ),
    );
    assert_eq!(run(&e), Value::int(-1));
}

#[test]
fn forcing_a_plain_value_fails() {
    let err = run_err(&Expr::force(int(3)));
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "thunk".to_string(),
            got: "int".to_string()
        }
    );
}

#[test]
fn lazy_factorial_argument() {
    let body = Expr::cond(
        Expr::is_zero(Expr::force(var("n"))),
        int(1),
        Expr::op(
            "*",
            [
                Expr::force(var("n")),
                call(var("fact"), [Expr::lazy(sub(Expr::force(var("n")), int(1)))]),
            ],
        ),
    );
    let e = Expr::letrec(
        [("fact", Procedure::new(["n"], body))],
        call(var("fact"), [Expr::lazy(int(4))]),
    );
    assert_eq!(run(&e), Value::int(24));
}
