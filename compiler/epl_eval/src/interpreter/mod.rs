//! The evaluator entry points.

mod builder;

pub use builder::InterpreterBuilder;

use epl_ir::{Expr, Layer};

use crate::cont::Continuation;
use crate::errors::{type_check, unsupported_form, EvalResult};
use crate::exec::Machine;
use crate::typeck::{TypeChecker, TypeEnv};
use crate::value::Env;

/// A configured evaluator.
///
/// Built with [`Interpreter::builder`]; `Interpreter::default()` accepts the
/// full language and runs no type checker.
pub struct Interpreter {
    pub(crate) layer: Layer,
    pub(crate) type_checker: Option<Box<dyn TypeChecker>>,
    pub(crate) type_env: TypeEnv,
}

impl Interpreter {
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The largest language this interpreter accepts.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Evaluate `expr` in `env` to a value.
    pub fn evaluate(&self, expr: &Expr, env: &Env) -> EvalResult {
        self.evaluate_with(expr, env, Continuation::End)
    }

    /// Evaluate `expr` in `env`, delivering the result to `cont`.
    #[tracing::instrument(level = "debug", skip_all, fields(layer = %self.layer))]
    pub fn evaluate_with(&self, expr: &Expr, env: &Env, cont: Continuation) -> EvalResult {
        self.check_layer(expr)?;
        if let Some(checker) = &self.type_checker {
            let ty = checker
                .type_of(expr, &self.type_env)
                .map_err(|err| type_check(&err))?;
            tracing::debug!(%ty, "type checked");
        }
        Machine::new(self.layer).run(expr.clone(), env.clone(), cont)
    }

    /// Reject programs that use forms above the configured layer.
    fn check_layer(&self, expr: &Expr) -> EvalResult<()> {
        if self.layer.accepts(expr.required_layer()) {
            return Ok(());
        }
        let mut work = vec![expr];
        while let Some(node) = work.pop() {
            if !self.layer.accepts(node.layer()) {
                return Err(unsupported_form(node.form_name(), self.layer));
            }
            work.extend(node.children().into_iter().rev());
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        InterpreterBuilder::new().build()
    }
}

/// Evaluate with the default configuration.
pub fn evaluate(expr: &Expr, env: &Env) -> EvalResult {
    Interpreter::default().evaluate(expr, env)
}
