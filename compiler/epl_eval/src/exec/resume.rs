//! Delivering a value to a continuation.

use super::{apply, finish, sequence, State};
use crate::cont::{Combiner, Continuation, Next};
use crate::errors::{
    leftover_arguments, not_a_procedure, type_mismatch, unhandled_exception, EvalResult,
};
use crate::value::Value;

pub(super) fn resume(cont: Continuation, value: Value) -> EvalResult<State> {
    match cont {
        Continuation::End => Ok(State::Done(value)),

        Continuation::IsZero { next } => {
            let n = value.as_int()?;
            Ok(State::resume(next, Value::Bool(n == 0)))
        }

        Continuation::If {
            then,
            otherwise,
            env,
            next,
        } => {
            let branch = if value.as_bool()? { then } else { otherwise };
            Ok(State::eval(branch, env, next))
        }

        Continuation::ExprList {
            mut pending,
            mut results,
            combine,
            env,
            next,
        } => {
            results.push(value);
            match pending.next() {
                Some(expr) => Ok(State::eval(
                    expr,
                    env.clone(),
                    Continuation::ExprList {
                        pending,
                        results,
                        combine,
                        env,
                        next,
                    },
                )),
                None => finish(combine, results, next),
            }
        }

        Continuation::Let {
            mut pending,
            bound,
            frame,
            env,
            body,
            next,
        } => {
            frame.set_one(bound, value);
            match pending.next() {
                Some((bound, expr)) => Ok(State::eval(
                    expr,
                    env.clone(),
                    Continuation::Let {
                        pending,
                        bound,
                        frame,
                        env,
                        body,
                        next,
                    },
                )),
                None => Ok(State::eval(body, frame, next)),
            }
        }

        Continuation::Call { args, env, next } => {
            if !value.is_callable() {
                return Err(not_a_procedure(&value));
            }
            sequence(args, Combiner::Apply(value), env, next)
        }

        Continuation::Apply { args, next } => match &value {
            Value::Closure(closure) => apply::apply_closure(closure, args, next),
            other => Err(leftover_arguments(other, args.len())),
        },

        Continuation::NewRef { next } => Ok(State::resume(next, Value::cell(value))),

        Continuation::DeRef { next } => match &value {
            Value::Ref(reference) => Ok(State::resume(next, reference.get()?)),
            other => Err(type_mismatch("reference", other)),
        },

        Continuation::SetRefTarget { value: rhs, env, next } => match &value {
            Value::Ref(target) => Ok(State::eval(
                rhs,
                env,
                Continuation::SetRefValue {
                    target: target.clone(),
                    next,
                },
            )),
            other => Err(type_mismatch("reference", other)),
        },

        Continuation::SetRefValue { target, next } => {
            target.set(value.clone())?;
            Ok(State::resume(next, value))
        }

        Continuation::Assign { name, env, next } => {
            env.replace(name.as_str(), value.clone())?;
            Ok(State::resume(next, value))
        }

        Continuation::Force { next } => match &value {
            Value::Thunk(thunk) => Ok(State::eval(thunk.expr.clone(), thunk.env.clone(), next)),
            other => Err(type_mismatch("thunk", other)),
        },

        // The protected expression finished normally.
        Continuation::Try { next, .. } => Ok(State::resume(next, value)),

        Continuation::Raise { next } => unwind(next, value),
    }
}

/// Discard continuations up to the nearest `try`, then run its handler.
fn unwind(next: Next, raised: Value) -> EvalResult<State> {
    let mut cont = next.into_inner();
    let mut discarded = 0usize;
    loop {
        match cont {
            Continuation::Try {
                var,
                handler,
                env,
                next,
            } => {
                tracing::debug!(%raised, catch = %var, discarded, "exception caught");
                let handler_env = env.extend([(var, raised)]);
                return Ok(State::eval(handler, handler_env, next));
            }
            Continuation::End => return Err(unhandled_exception(raised)),
            other => {
                discarded += 1;
                match other.into_next() {
                    Some(next) => cont = next.into_inner(),
                    None => return Err(unhandled_exception(raised)),
                }
            }
        }
    }
}
