//! The continuation hierarchy.
//!
//! A [`Continuation`] is "what happens next" once a value is ready. Each
//! variant owns its successor through [`Next`], so a chain runs from the
//! innermost pending step out to [`Continuation::End`]. The machine in
//! `exec` consumes one link per value it delivers; nothing here calls back
//! into evaluation.

use std::fmt;
use std::vec;

use epl_ir::{Expr, Name};

use crate::value::{Env, Reference, Value};

/// How an [`Continuation::ExprList`] combines its results once every
/// sub-expression has produced a value.
#[derive(Clone, Debug)]
pub enum Combiner {
    /// Build a tuple.
    Tuple,
    /// Keep the last value; an empty list yields `0`.
    Last,
    /// Apply the operator to the results.
    Apply(Value),
}

/// The remainder of a computation.
#[derive(Default)]
pub enum Continuation {
    /// Terminal sentinel: the delivered value is the final result.
    #[default]
    End,
    /// Test the delivered integer for zero.
    IsZero { next: Next },
    /// Pick a branch on the delivered boolean; the branch runs under `next`.
    If {
        then: Expr,
        otherwise: Expr,
        env: Env,
        next: Next,
    },
    /// Evaluate `pending` left to right in `env`, collecting into `results`.
    ExprList {
        pending: vec::IntoIter<Expr>,
        results: Vec<Value>,
        combine: Combiner,
        env: Env,
        next: Next,
    },
    /// Store the delivered value as `bound` in `frame`, then continue with the
    /// remaining bindings (evaluated in `env`) or the body (in `frame`).
    Let {
        pending: vec::IntoIter<(Name, Expr)>,
        bound: Name,
        frame: Env,
        env: Env,
        body: Expr,
        next: Next,
    },
    /// The operator of a call is ready; evaluate `args` next.
    Call {
        args: Vec<Expr>,
        env: Env,
        next: Next,
    },
    /// Over-application: the delivered procedure takes the leftover `args`.
    Apply { args: Vec<Value>, next: Next },
    /// Wrap the delivered value in a fresh cell.
    NewRef { next: Next },
    /// Read through the delivered reference.
    DeRef { next: Next },
    /// The reference of a `setref` is ready; evaluate `value` next.
    SetRefTarget {
        value: Expr,
        env: Env,
        next: Next,
    },
    /// Store the delivered value through `target`.
    SetRefValue { target: Reference, next: Next },
    /// Replace the binding of `name` with the delivered value.
    Assign { name: Name, env: Env, next: Next },
    /// Evaluate the delivered thunk.
    Force { next: Next },
    /// Marker for an enclosing `try`. A value delivered normally passes
    /// through; a raised value runs `handler` with `var` bound, under `next`.
    Try {
        var: Name,
        handler: Expr,
        env: Env,
        next: Next,
    },
    /// Unwind to the nearest [`Continuation::Try`] with the delivered value.
    Raise { next: Next },
}

impl Continuation {
    /// Variant name, for traces.
    pub fn name(&self) -> &'static str {
        match self {
            Continuation::End => "End",
            Continuation::IsZero { .. } => "IsZero",
            Continuation::If { .. } => "If",
            Continuation::ExprList { .. } => "ExprList",
            Continuation::Let { .. } => "Let",
            Continuation::Call { .. } => "Call",
            Continuation::Apply { .. } => "Apply",
            Continuation::NewRef { .. } => "NewRef",
            Continuation::DeRef { .. } => "DeRef",
            Continuation::SetRefTarget { .. } => "SetRefTarget",
            Continuation::SetRefValue { .. } => "SetRefValue",
            Continuation::Assign { .. } => "Assign",
            Continuation::Force { .. } => "Force",
            Continuation::Try { .. } => "Try",
            Continuation::Raise { .. } => "Raise",
        }
    }

    fn next_mut(&mut self) -> Option<&mut Next> {
        match self {
            Continuation::End => None,
            Continuation::IsZero { next }
            | Continuation::If { next, .. }
            | Continuation::ExprList { next, .. }
            | Continuation::Let { next, .. }
            | Continuation::Call { next, .. }
            | Continuation::Apply { next, .. }
            | Continuation::NewRef { next }
            | Continuation::DeRef { next }
            | Continuation::SetRefTarget { next, .. }
            | Continuation::SetRefValue { next, .. }
            | Continuation::Assign { next, .. }
            | Continuation::Force { next }
            | Continuation::Try { next, .. }
            | Continuation::Raise { next } => Some(next),
        }
    }

    fn next_ref(&self) -> Option<&Continuation> {
        match self {
            Continuation::End => None,
            Continuation::IsZero { next }
            | Continuation::If { next, .. }
            | Continuation::ExprList { next, .. }
            | Continuation::Let { next, .. }
            | Continuation::Call { next, .. }
            | Continuation::Apply { next, .. }
            | Continuation::NewRef { next }
            | Continuation::DeRef { next }
            | Continuation::SetRefTarget { next, .. }
            | Continuation::SetRefValue { next, .. }
            | Continuation::Assign { next, .. }
            | Continuation::Force { next }
            | Continuation::Try { next, .. }
            | Continuation::Raise { next } => next.get(),
        }
    }

    /// Drop this link and hand back its successor, `None` at the end.
    pub fn into_next(mut self) -> Option<Next> {
        self.next_mut().map(Next::take)
    }

    /// Number of links from here to the end, inclusive.
    pub fn depth(&self) -> usize {
        let mut len = 1;
        let mut link = self.next_ref();
        while let Some(cont) = link {
            len += 1;
            link = cont.next_ref();
        }
        len
    }

    /// Whether a `try` marker is anywhere on the chain.
    pub fn has_handler(&self) -> bool {
        let mut link = Some(self);
        while let Some(cont) = link {
            if matches!(cont, Continuation::Try { .. }) {
                return true;
            }
            link = cont.next_ref();
        }
        false
    }
}

impl fmt::Debug for Continuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut link = Some(self);
        while let Some(cont) = link {
            list.entry(&format_args!("{}", cont.name()));
            link = cont.next_ref();
        }
        list.finish()
    }
}

/// Owning link to the successor continuation.
///
/// Chains can be as long as the deepest non-tail recursion in the program,
/// so dropping one unlinks it in a loop.
pub struct Next(Option<Box<Continuation>>);

impl Next {
    pub fn new(cont: Continuation) -> Self {
        Next(Some(Box::new(cont)))
    }

    /// Take the continuation out of the link.
    pub fn into_inner(mut self) -> Continuation {
        self.0.take().map_or(Continuation::End, |cont| *cont)
    }

    fn take(&mut self) -> Next {
        Next(self.0.take())
    }

    fn get(&self) -> Option<&Continuation> {
        self.0.as_deref()
    }
}

impl From<Continuation> for Next {
    fn from(cont: Continuation) -> Self {
        Next::new(cont)
    }
}

impl Drop for Next {
    fn drop(&mut self) {
        let mut link = self.0.take();
        while let Some(mut cont) = link {
            link = cont.next_mut().and_then(|next| next.0.take());
        }
    }
}
