//! End-to-end language tests.
//!
//! Programs are built with the `Expr` constructors and run against a small
//! table of built-in operators.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Tests can panic"
)]

mod lazy;
mod references;

use epl_ir::Expr;

use crate::{evaluate, Env, EvalError, Value};

fn ints(args: &[Value]) -> Result<Vec<i64>, String> {
    args.iter()
        .map(|v| v.as_int().map_err(|err| err.message))
        .collect()
}

fn minus(args: &[Value]) -> Result<Value, String> {
    match ints(args)?.as_slice() {
        [a, b] => a
            .checked_sub(*b)
            .map(Value::int)
            .ok_or_else(|| "integer overflow".to_string()),
        other => Err(format!("expected 2 arguments, got {}", other.len())),
    }
}

fn plus(args: &[Value]) -> Result<Value, String> {
    ints(args)?
        .into_iter()
        .try_fold(0i64, i64::checked_add)
        .map(Value::int)
        .ok_or_else(|| "integer overflow".to_string())
}

fn times(args: &[Value]) -> Result<Value, String> {
    ints(args)?
        .into_iter()
        .try_fold(1i64, i64::checked_mul)
        .map(Value::int)
        .ok_or_else(|| "integer overflow".to_string())
}

fn divide(args: &[Value]) -> Result<Value, String> {
    match ints(args)?.as_slice() {
        [_, 0] => Err("division by zero".to_string()),
        [a, b] => Ok(Value::int(a / b)),
        other => Err(format!("expected 2 arguments, got {}", other.len())),
    }
}

fn is_zero(args: &[Value]) -> Result<Value, String> {
    match ints(args)?.as_slice() {
        [n] => Ok(Value::bool(*n == 0)),
        other => Err(format!("expected 1 argument, got {}", other.len())),
    }
}

fn equal(args: &[Value]) -> Result<Value, String> {
    match args {
        [a, b] => Ok(Value::bool(a == b)),
        other => Err(format!("expected 2 arguments, got {}", other.len())),
    }
}

/// Root environment with the operators the test programs use.
pub(crate) fn builtins() -> Env {
    Env::with_bindings([
        ("-", Value::native("-", minus)),
        ("+", Value::native("+", plus)),
        ("*", Value::native("*", times)),
        ("/", Value::native("/", divide)),
        ("isz", Value::native("isz", is_zero)),
        ("=", Value::native("=", equal)),
    ])
}

pub(crate) fn run(expr: &Expr) -> Value {
    evaluate(expr, &builtins()).unwrap_or_else(|err| panic!("{expr} failed: {err}"))
}

pub(crate) fn run_err(expr: &Expr) -> EvalError {
    match evaluate(expr, &builtins()) {
        Ok(value) => panic!("{expr} should fail, got {value}"),
        Err(err) => err,
    }
}

// Shorthands for building programs.

pub(crate) fn int(n: i64) -> Expr {
    Expr::int(n)
}

pub(crate) fn var(name: &str) -> Expr {
    Expr::var(name)
}

pub(crate) fn sub(a: Expr, b: Expr) -> Expr {
    Expr::op("-", [a, b])
}

pub(crate) fn call(operator: Expr, args: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::call(operator, args)
}
