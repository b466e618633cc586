//! The type-checker seam.
//!
//! Checking itself lives outside this crate. An [`Interpreter`](crate::Interpreter)
//! configured with a [`TypeChecker`] runs it before evaluation and turns a
//! rejection into an `EvalErrorKind::TypeCheck` error. The inferred type is
//! only logged.

use std::fmt;

use epl_ir::Expr;

use crate::environment::Environment;

/// Static type of an expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Bool,
    Str,
    Tuple(Vec<Type>),
    Proc { params: Vec<Type>, result: Box<Type> },
    Ref(Box<Type>),
    Thunk(Box<Type>),
    /// An inference variable.
    Var(u32),
}

impl Type {
    pub fn proc(params: impl IntoIterator<Item = Type>, result: Type) -> Self {
        Type::Proc {
            params: params.into_iter().collect(),
            result: Box::new(result),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => f.write_str("int"),
            Type::Bool => f.write_str("bool"),
            Type::Str => f.write_str("string"),
            Type::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" * ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Type::Proc { params, result } => {
                f.write_str("(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, " -> {result})")
            }
            Type::Ref(inner) => write!(f, "refto {inner}"),
            Type::Thunk(inner) => write!(f, "lazy {inner}"),
            Type::Var(n) => write!(f, "t{n}"),
        }
    }
}

/// A rejection from the type checker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeError {
    pub message: String,
    pub expected: Option<Type>,
    pub found: Option<Type>,
}

impl TypeError {
    pub fn new(message: impl Into<String>) -> Self {
        TypeError {
            message: message.into(),
            expected: None,
            found: None,
        }
    }

    pub fn mismatch(expected: Type, found: Type) -> Self {
        TypeError {
            message: format!("expected {expected}, found {found}"),
            expected: Some(expected),
            found: Some(found),
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TypeError {}

/// Bindings from names to types.
pub type TypeEnv = Environment<Type>;

/// A static checker run before evaluation.
pub trait TypeChecker {
    fn type_of(&self, expr: &Expr, tenv: &TypeEnv) -> Result<Type, TypeError>;
}
