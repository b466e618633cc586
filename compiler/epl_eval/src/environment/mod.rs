//! Chained lexical environments.
//!
//! A frame holds ordered bindings and an optional parent. Frames are shared:
//! closures, thunks and variable references keep the frame they captured
//! alive. New scopes come from [`Environment::push`] and
//! [`Environment::extend`]; the only way to change an existing binding
//! further out is [`Environment::replace`].
//!
//! The same structure serves runtime values and, through the type-checker
//! interface, types.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use epl_ir::Name;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::errors::{unbound_variable, EvalResult};

/// One scope level.
struct Frame<V> {
    bindings: IndexMap<Name, V, FxBuildHasher>,
    parent: Option<Environment<V>>,
}

impl<V> Frame<V> {
    fn new(parent: Option<Environment<V>>) -> Self {
        Frame {
            bindings: IndexMap::with_hasher(FxBuildHasher),
            parent,
        }
    }
}

/// Long parent chains are unlinked in a loop rather than by recursive drops.
impl<V> Drop for Frame<V> {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(env) = parent {
            parent = match Rc::try_unwrap(env.0) {
                Ok(cell) => cell.into_inner().parent.take(),
                Err(_) => None,
            };
        }
    }
}

/// A handle to a frame and, through it, the whole chain outward.
pub struct Environment<V>(Rc<RefCell<Frame<V>>>);

impl<V> Clone for Environment<V> {
    #[inline]
    fn clone(&self) -> Self {
        Environment(Rc::clone(&self.0))
    }
}

impl<V: Clone> Environment<V> {
    /// An empty root frame.
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(Frame::new(None))))
    }

    /// A root frame with initial bindings, typically the built-in operators.
    pub fn with_bindings<N: Into<Name>>(bindings: impl IntoIterator<Item = (N, V)>) -> Self {
        let env = Self::new();
        env.0
            .borrow_mut()
            .bindings
            .extend(bindings.into_iter().map(|(n, v)| (n.into(), v)));
        env
    }

    /// A new empty child frame.
    #[must_use]
    pub fn push(&self) -> Self {
        Environment(Rc::new(RefCell::new(Frame::new(Some(self.clone())))))
    }

    /// A new child frame holding `bindings`.
    #[must_use]
    pub fn extend<N: Into<Name>>(&self, bindings: impl IntoIterator<Item = (N, V)>) -> Self {
        let child = self.push();
        child
            .0
            .borrow_mut()
            .bindings
            .extend(bindings.into_iter().map(|(n, v)| (n.into(), v)));
        child
    }

    /// Look `name` up through the chain.
    pub fn lookup(&self, name: &str) -> Option<V> {
        let mut frame = self.clone();
        loop {
            let parent = {
                let current = frame.0.borrow();
                if let Some(value) = current.bindings.get(name) {
                    return Some(value.clone());
                }
                current.parent.clone()
            };
            frame = parent?;
        }
    }

    /// Like [`lookup`](Self::lookup), failing with `UnboundVariable`.
    pub fn get(&self, name: &str) -> EvalResult<V> {
        self.lookup(name).ok_or_else(|| unbound_variable(name))
    }

    /// Add or overwrite a binding in this frame only.
    pub fn set_one(&self, name: impl Into<Name>, value: V) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Overwrite the nearest existing binding of `name`. Never creates one.
    pub fn replace(&self, name: &str, value: V) -> EvalResult<()> {
        let mut frame = self.clone();
        loop {
            let parent = {
                let mut current = frame.0.borrow_mut();
                if let Some(slot) = current.bindings.get_mut(name) {
                    *slot = value;
                    return Ok(());
                }
                current.parent.clone()
            };
            match parent {
                Some(parent) => frame = parent,
                None => return Err(unbound_variable(name)),
            }
        }
    }
}

impl<V> Environment<V> {
    /// Whether `name` is bound anywhere in the chain.
    pub fn contains(&self, name: &str) -> bool {
        let mut frame = self.clone();
        loop {
            let parent = {
                let current = frame.0.borrow();
                if current.bindings.contains_key(name) {
                    return true;
                }
                current.parent.clone()
            };
            match parent {
                Some(parent) => frame = parent,
                None => return false,
            }
        }
    }

    /// Number of frames from here to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut parent = self.0.borrow().parent.clone();
        while let Some(frame) = parent {
            depth += 1;
            parent = frame.0.borrow().parent.clone();
        }
        depth
    }

    /// Names bound in this frame, in insertion order.
    pub fn names(&self) -> Vec<Name> {
        self.0.borrow().bindings.keys().cloned().collect()
    }

    /// Move every binding out of the frames that only this handle keeps alive,
    /// innermost first, stopping at the first shared frame. Used while tearing
    /// down values; the frames are left empty and unlinked.
    pub(crate) fn take_unshared(&mut self, out: &mut Vec<V>) {
        if Rc::strong_count(&self.0) != 1 {
            return;
        }
        let Ok(mut frame) = self.0.try_borrow_mut() else {
            return;
        };
        out.extend(frame.bindings.drain(..).map(|(_, value)| value));
        let mut parent = frame.parent.take();
        drop(frame);
        while let Some(env) = parent {
            parent = match Rc::try_unwrap(env.0) {
                Ok(cell) => {
                    let mut frame = cell.into_inner();
                    out.extend(frame.bindings.drain(..).map(|(_, value)| value));
                    frame.parent.take()
                }
                Err(_) => None,
            };
        }
    }

    /// Whether both handles refer to the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<V: Clone> Default for Environment<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames can reach closures that reach the same frames; only the shape is printed.
impl<V> fmt::Debug for Environment<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.names())
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests;
