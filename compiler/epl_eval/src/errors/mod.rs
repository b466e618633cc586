//! Evaluation errors.
//!
//! `EvalErrorKind` is the structured category; the factory functions below
//! are the only way errors are built, and they fill in both the kind and
//! the rendered message.
//!
//! A `raise` that finds an enclosing `try` is not an error at all. It is
//! recovered by the machine and only shows up as a `tracing` event.

use std::fmt;

use epl_ir::Layer;

use crate::typeck::TypeError;
use crate::value::Value;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A name is absent from the whole frame chain.
    UnboundVariable { name: String },
    /// Zero arguments, zero parameters, or a non-procedure in call position.
    InvalidApplication { detail: String },
    /// A `raise` reached the end of the continuation chain.
    UnhandledException { value: String },
    /// A form received a value of the wrong shape.
    TypeMismatch { expected: String, got: String },
    /// A built-in operator reported a failure.
    NativeFailure { op: String, message: String },
    /// The program uses a form the configured layer does not have.
    UnsupportedForm { form: String, layer: Layer },
    /// The configured type checker rejected the program.
    TypeCheck { message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "unbound variable: {name}"),
            Self::InvalidApplication { detail } => write!(f, "invalid application: {detail}"),
            Self::UnhandledException { value } => write!(f, "unhandled exception: {value}"),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::NativeFailure { op, message } => write!(f, "operator `{op}` failed: {message}"),
            Self::UnsupportedForm { form, layer } => {
                write!(f, "{form} is not part of the {layer} language")
            }
            Self::TypeCheck { message } => write!(f, "type error: {message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equals `kind.to_string()` for factory-built errors.
    pub message: String,
    /// The payload of an unhandled `raise`.
    pub raised_value: Option<Value>,
    /// Secondary context, e.g. which procedure was being applied.
    pub notes: Vec<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            raised_value: None,
            notes: Vec::new(),
        }
    }

    /// Attach a context note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

// Factories

pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    })
}

fn invalid_application(detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidApplication {
        detail: detail.into(),
    })
}

/// A procedure was called with no arguments.
pub fn no_arguments() -> EvalError {
    invalid_application("no arguments supplied")
}

/// A procedure declared without parameters was called.
pub fn no_parameters() -> EvalError {
    invalid_application("procedure declares no parameters")
}

/// A value that is not a procedure was used in call position.
pub fn not_a_procedure(got: &Value) -> EvalError {
    invalid_application(format!("{} is not a procedure", got.type_name()))
}

/// Over-application produced something other than a closure while arguments remain.
pub fn leftover_arguments(got: &Value, remaining: usize) -> EvalError {
    let word = if remaining == 1 {
        "argument"
    } else {
        "arguments"
    };
    invalid_application(format!(
        "{remaining} {word} left over but the result is {}, not a procedure",
        got.type_name()
    ))
}

pub fn unhandled_exception(value: Value) -> EvalError {
    let mut err = EvalError::from_kind(EvalErrorKind::UnhandledException {
        value: value.to_string(),
    });
    err.raised_value = Some(value);
    err
}

pub fn type_mismatch(expected: &str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.type_name().to_string(),
    })
}

pub fn native_failure(op: &str, message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NativeFailure {
        op: op.to_string(),
        message: message.into(),
    })
}

pub fn unsupported_form(form: &str, layer: Layer) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedForm {
        form: form.to_string(),
        layer,
    })
}

pub fn type_check(err: &TypeError) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeCheck {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;
