//! Runtime values.
//!
//! Scalars are stored inline; everything else is reference counted, so
//! handing a value to a continuation or a frame never deep-copies it.
//! Closures and cells compare by identity, the rest structurally.
//!
//! ```text
//! let n = Value::int(5);
//! let pair = Value::tuple([Value::int(1), Value::bool(true)]);
//! let cell = Value::cell(Value::int(0));
//! ```

mod composite;

use std::fmt;
use std::rc::Rc;

pub use composite::{Closure, NativeFn, NativeOp, Reference, Thunk};

use epl_ir::Literal;
use epl_stack::ensure_sufficient_stack;

use crate::environment::Environment;
use crate::errors::{type_mismatch, EvalResult};

/// Runtime environment.
pub type Env = Environment<Value>;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Str(Rc<str>),
    Tuple(Rc<[Value]>),
    /// A procedure with its captured environment.
    Closure(Rc<Closure>),
    /// A mutable cell or an alias of a variable binding.
    Ref(Reference),
    /// A deferred expression.
    Thunk(Rc<Thunk>),
    /// A built-in operator supplied by the embedder.
    Native(NativeOp),
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(s.as_ref()))
    }

    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(items.into_iter().collect())
    }

    /// A fresh mutable cell holding `value`.
    pub fn cell(value: Value) -> Self {
        Value::Ref(Reference::cell(value))
    }

    /// A built-in operator.
    pub fn native(name: &str, func: NativeFn) -> Self {
        Value::Native(NativeOp::new(name, func))
    }

    pub fn from_literal(lit: &Literal) -> Self {
        match lit {
            Literal::Int(n) => Value::Int(*n),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Str(s) => Value::string(s),
        }
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::Tuple(_) => "tuple",
            Value::Closure(_) => "procedure",
            Value::Ref(_) => "reference",
            Value::Thunk(_) => "thunk",
            Value::Native(_) => "operator",
        }
    }

    pub fn as_int(&self) -> EvalResult<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(type_mismatch("int", other)),
        }
    }

    pub fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(type_mismatch("bool", other)),
        }
    }

    /// Whether the value can stand in call position.
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Closure(_) | Value::Native(_))
    }
}

impl Value {
    /// Move the contents of a container this value alone keeps alive into
    /// `out`, leaving scalar placeholders behind.
    fn take_contents(&mut self, out: &mut Vec<Value>) {
        match self {
            Value::Tuple(items) => {
                if let Some(items) = Rc::get_mut(items) {
                    out.extend(
                        items
                            .iter_mut()
                            .filter(|item| !item.is_scalar())
                            .map(|item| std::mem::replace(item, Value::Int(0))),
                    );
                }
            }
            Value::Closure(closure) => {
                if let Some(closure) = Rc::get_mut(closure) {
                    closure.env.take_unshared(out);
                }
            }
            Value::Thunk(thunk) => {
                if let Some(thunk) = Rc::get_mut(thunk) {
                    thunk.env.take_unshared(out);
                }
            }
            Value::Ref(Reference::Cell(cell)) => {
                if let Some(cell) = Rc::get_mut(cell) {
                    let value = cell.get_mut();
                    if !value.is_scalar() {
                        out.push(std::mem::replace(value, Value::Int(0)));
                    }
                }
            }
            Value::Ref(Reference::Var { env, .. }) => env.take_unshared(out),
            Value::Int(_) | Value::Bool(_) | Value::Str(_) | Value::Native(_) => {}
        }
    }

    fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Bool(_) | Value::Str(_) | Value::Native(_)
        )
    }
}

/// Nested tuples and closure chains built by deep recursion in a program are
/// torn down with a worklist, not by recursive drops.
impl Drop for Value {
    fn drop(&mut self) {
        let mut work = Vec::new();
        self.take_contents(&mut work);
        while let Some(mut value) = work.pop() {
            value.take_contents(&mut work);
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        let mut work = vec![(self, other)];
        while let Some((a, b)) = work.pop() {
            let same = match (a, b) {
                (Value::Int(a), Value::Int(b)) => a == b,
                (Value::Bool(a), Value::Bool(b)) => a == b,
                (Value::Str(a), Value::Str(b)) => a == b,
                (Value::Tuple(a), Value::Tuple(b)) => {
                    if Rc::ptr_eq(a, b) {
                        true
                    } else if a.len() == b.len() {
                        work.extend(a.iter().zip(b.iter()));
                        true
                    } else {
                        false
                    }
                }
                (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
                (Value::Ref(a), Value::Ref(b)) => a == b,
                (Value::Thunk(a), Value::Thunk(b)) => a == b,
                (Value::Native(a), Value::Native(b)) => a == b,
                _ => false,
            };
            if !same {
                return false;
            }
        }
        true
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A piece of tuple output still to be written.
enum Pending<'a> {
    Value(&'a Value),
    Text(&'static str),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut work = vec![Pending::Value(self)];
        while let Some(piece) = work.pop() {
            match piece {
                Pending::Text(text) => f.write_str(text)?,
                Pending::Value(Value::Tuple(items)) => {
                    f.write_str("(")?;
                    work.push(Pending::Text(")"));
                    for (i, item) in items.iter().enumerate().rev() {
                        work.push(Pending::Value(item));
                        if i > 0 {
                            work.push(Pending::Text(", "));
                        }
                    }
                }
                Pending::Value(Value::Int(n)) => write!(f, "{n}")?,
                Pending::Value(Value::Bool(b)) => write!(f, "{b}")?,
                Pending::Value(Value::Str(s)) => write!(f, "{s:?}")?,
                Pending::Value(Value::Closure(closure)) => write!(f, "{closure}")?,
                Pending::Value(Value::Ref(reference)) => write!(f, "{reference}")?,
                Pending::Value(Value::Thunk(thunk)) => write!(f, "<thunk {}>", thunk.expr)?,
                Pending::Value(Value::Native(op)) => write!(f, "<operator {}>", op.name)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Tuple(items) => {
                ensure_sufficient_stack(|| f.debug_tuple("Tuple").field(items).finish())
            }
            other => write!(f, "{other}"),
        }
    }
}
