//! Continuation-passing evaluator for the EPL interpreter family.
//!
//! Expressions from `epl_ir` are evaluated by an explicit machine: every
//! pending step is a [`Continuation`] value and a driver loop moves values
//! between them. Curried application, left-to-right sequencing, references,
//! thunks and `try`/`raise` all go through the same protocol.
//!
//! # Example
//!
//! ```text
//! let env = Env::with_bindings([("-", Value::native("-", minus))]);
//! let e = Expr::let_in([("x", Expr::int(5))], Expr::op("-", [Expr::var("x"), Expr::int(3)]));
//! assert_eq!(evaluate(&e, &env)?, Value::int(2));
//! ```
//!
//! Built-in operators are not part of this crate; callers bind them in the
//! root environment.

mod cont;
mod environment;
mod errors;
mod exec;
mod interpreter;
mod tracing_setup;
mod typeck;
mod value;

pub use cont::{Combiner, Continuation, Next};
pub use environment::Environment;
pub use errors::{
    leftover_arguments, native_failure, no_arguments, no_parameters, not_a_procedure,
    type_check, type_mismatch, unbound_variable, unhandled_exception, unsupported_form,
    EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::{evaluate, Interpreter, InterpreterBuilder};
pub use tracing_setup::init_tracing;
pub use typeck::{Type, TypeChecker, TypeEnv, TypeError};
pub use value::{Closure, Env, NativeFn, NativeOp, Reference, Thunk, Value};

#[cfg(test)]
mod tests;
