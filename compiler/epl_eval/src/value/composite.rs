//! Closures, references, thunks and built-in operators.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use epl_ir::{Expr, Name};

use super::{Env, Value};
use crate::errors::EvalResult;

/// A procedure paired with the environment it was created in.
///
/// Partially applied procedures are closures too: the bound prefix of the
/// parameters lives in `env`, and `params` holds what is still missing.
pub struct Closure {
    /// Set for `letrec` procedures; carried through partial application.
    pub name: Option<Name>,
    pub params: Rc<[Name]>,
    pub body: Expr,
    pub env: Env,
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<proc")?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        f.write_str("(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")>")
    }
}

/// Storage reached through `deref`/`setref`.
#[derive(Clone)]
pub enum Reference {
    /// A standalone cell from `newref`.
    Cell(Rc<RefCell<Value>>),
    /// `ref x`: the binding of `name` as seen from `env`.
    Var { env: Env, name: Name },
}

impl Reference {
    pub fn cell(value: Value) -> Self {
        Reference::Cell(Rc::new(RefCell::new(value)))
    }

    /// Current contents.
    pub fn get(&self) -> EvalResult<Value> {
        match self {
            Reference::Cell(cell) => Ok(cell.borrow().clone()),
            Reference::Var { env, name } => env.get(name.as_str()),
        }
    }

    /// Store `value`. A variable reference writes the binding itself.
    pub fn set(&self, value: Value) -> EvalResult<()> {
        match self {
            Reference::Cell(cell) => {
                *cell.borrow_mut() = value;
                Ok(())
            }
            Reference::Var { env, name } => env.replace(name.as_str(), value),
        }
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Reference::Cell(a), Reference::Cell(b)) => Rc::ptr_eq(a, b),
            (
                Reference::Var { env: a, name: x },
                Reference::Var { env: b, name: y },
            ) => a.ptr_eq(b) && x == y,
            _ => false,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Cell(_) => f.write_str("<ref>"),
            Reference::Var { name, .. } => write!(f, "<ref {name}>"),
        }
    }
}

/// An unevaluated expression and the environment to evaluate it in.
pub struct Thunk {
    pub expr: Expr,
    pub env: Env,
}

impl PartialEq for Thunk {
    fn eq(&self, other: &Self) -> bool {
        self.expr.ptr_eq(&other.expr) && self.env.ptr_eq(&other.env)
    }
}

/// Signature of built-in operators: evaluated arguments in, value or message out.
pub type NativeFn = fn(&[Value]) -> Result<Value, String>;

/// A named built-in operator.
#[derive(Clone)]
pub struct NativeOp {
    pub name: Name,
    pub func: NativeFn,
}

impl NativeOp {
    pub fn new(name: &str, func: NativeFn) -> Self {
        NativeOp {
            name: Name::new(name),
            func,
        }
    }
}

/// Same name and same function.
impl PartialEq for NativeOp {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && std::ptr::fn_addr_eq(self.func, other.func)
    }
}
