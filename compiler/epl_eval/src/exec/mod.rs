//! The trampoline.
//!
//! Evaluation is a loop over [`State`]s. An `Eval` state dispatches on the
//! expression and either hands a value to its continuation or schedules a
//! sub-expression under a new one; a `Resume` state delivers a value to one
//! continuation. Nothing recurses natively, so language-level recursion depth
//! is bounded by heap, not by the Rust stack.
//!
//! # Module Structure
//!
//! - `eval`: per-layer dispatch on expression forms
//! - `resume`: what each continuation does with a delivered value
//! - `apply`: curried procedure application

mod apply;
mod eval;
mod resume;

use epl_ir::{Expr, Layer};

use crate::cont::{Combiner, Continuation, Next};
use crate::errors::EvalResult;
use crate::value::{Env, Value};

/// One step of the machine.
pub(crate) enum State {
    /// Evaluate `expr` in `env`, delivering the result to `cont`.
    Eval { expr: Expr, env: Env, cont: Next },
    /// Deliver `value` to `cont`.
    Resume { cont: Next, value: Value },
    /// The terminal continuation received `value`.
    Done(Value),
}

impl State {
    #[inline]
    fn eval(expr: Expr, env: Env, cont: impl Into<Next>) -> Self {
        State::Eval {
            expr,
            env,
            cont: cont.into(),
        }
    }

    #[inline]
    fn resume(cont: Next, value: Value) -> Self {
        State::Resume { cont, value }
    }
}

/// Drives states until the terminal continuation is reached.
pub(crate) struct Machine {
    layer: Layer,
    steps: u64,
}

impl Machine {
    pub(crate) fn new(layer: Layer) -> Self {
        Machine { layer, steps: 0 }
    }

    pub(crate) fn run(&mut self, expr: Expr, env: Env, cont: Continuation) -> EvalResult {
        let protocol = if self.layer.handles_exceptions() {
            "exception-aware"
        } else {
            "plain"
        };
        tracing::debug!(layer = %self.layer, protocol, "machine start");

        let mut state = State::eval(expr, env, cont);
        loop {
            self.steps += 1;
            state = match state {
                State::Eval { expr, env, cont } => {
                    tracing::trace!(step = self.steps, form = expr.form_name(), "eval");
                    eval::eval(&expr, env, cont)?
                }
                State::Resume { cont, value } => {
                    let cont = cont.into_inner();
                    tracing::trace!(step = self.steps, cont = cont.name(), "resume");
                    resume::resume(cont, value)?
                }
                State::Done(value) => {
                    tracing::debug!(steps = self.steps, "machine finished");
                    return Ok(value);
                }
            };
        }
    }
}

/// Start evaluating `exprs` left to right, combining the results with `combine`.
fn sequence(exprs: Vec<Expr>, combine: Combiner, env: Env, next: Next) -> EvalResult<State> {
    let mut pending = exprs.into_iter();
    match pending.next() {
        Some(first) => Ok(State::eval(
            first,
            env.clone(),
            Continuation::ExprList {
                results: Vec::with_capacity(pending.len() + 1),
                pending,
                combine,
                env,
                next,
            },
        )),
        None => finish(combine, Vec::new(), next),
    }
}

/// All sub-expressions of an `ExprList` have produced values.
fn finish(combine: Combiner, mut results: Vec<Value>, next: Next) -> EvalResult<State> {
    match combine {
        Combiner::Tuple => Ok(State::resume(next, Value::tuple(results))),
        Combiner::Last => {
            let last = results.pop().unwrap_or(Value::Int(0));
            Ok(State::resume(next, last))
        }
        Combiner::Apply(operator) => apply::apply(operator, results, next),
    }
}
