//! Curried procedure application.
//!
//! With `p` declared parameters and `a` supplied arguments, the first
//! `min(p, a)` are bound in one frame on top of the closure's environment:
//!
//! - `p > a`: the result is a closure over the remaining parameters
//! - `p == a`: the body runs under the caller's continuation
//! - `p < a`: the body runs under an `Apply` continuation that feeds the
//!   leftover arguments to whatever procedure it returns

use std::cmp::Ordering;
use std::rc::Rc;

use super::State;
use crate::cont::{Continuation, Next};
use crate::errors::{native_failure, no_arguments, no_parameters, not_a_procedure, EvalResult};
use crate::value::{Closure, Value};

/// Apply any callable value to already evaluated arguments.
pub(super) fn apply(operator: Value, args: Vec<Value>, next: Next) -> EvalResult<State> {
    match &operator {
        Value::Closure(closure) => apply_closure(closure, args, next),
        Value::Native(op) => match (op.func)(&args) {
            Ok(value) => Ok(State::resume(next, value)),
            Err(message) => Err(native_failure(op.name.as_str(), message)
                .with_note(format!("called with {} argument(s)", args.len()))),
        },
        other => Err(not_a_procedure(other)),
    }
}

pub(super) fn apply_closure(
    closure: &Rc<Closure>,
    mut args: Vec<Value>,
    next: Next,
) -> EvalResult<State> {
    let arity = closure.params.len();
    let supplied = args.len();
    if supplied == 0 {
        return Err(no_arguments());
    }
    if arity == 0 {
        return Err(no_parameters());
    }

    let bound = arity.min(supplied);
    let leftover = args.split_off(bound);
    let frame = closure
        .env
        .extend(closure.params[..bound].iter().cloned().zip(args));

    match arity.cmp(&supplied) {
        Ordering::Greater => {
            tracing::debug!(arity, supplied, "partial application");
            let partial = Closure {
                name: closure.name.clone(),
                params: Rc::from(&closure.params[bound..]),
                body: closure.body.clone(),
                env: frame,
            };
            Ok(State::resume(next, Value::Closure(Rc::new(partial))))
        }
        Ordering::Equal => Ok(State::eval(closure.body.clone(), frame, next)),
        Ordering::Less => {
            tracing::debug!(arity, supplied, "over-application");
            Ok(State::eval(
                closure.body.clone(),
                frame,
                Continuation::Apply {
                    args: leftover,
                    next,
                },
            ))
        }
    }
}
