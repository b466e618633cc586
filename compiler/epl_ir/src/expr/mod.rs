//! The expression handle.
//!
//! [`Expr`] ties the recursive knot over [`TryLang`]: every child of every
//! layer is again an `Expr`. Nodes are immutable and shared, so cloning an
//! expression (into a closure body, a thunk, a pending continuation) is a
//! reference-count bump.

mod display;
mod tree;

use std::fmt;
use std::rc::Rc;

use epl_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use crate::ast::{
    ExpRefLang, ImpRefLang, LazyLang, LetLang, LetRecLang, ProcLang, Procedure, TryLang,
};
use crate::{Layer, Literal, Name};

/// An expression of the full language.
#[derive(Clone)]
pub struct Expr(Rc<TryLang<Expr>>);

impl Expr {
    /// Wrap a form from any layer.
    pub fn new(form: impl Into<TryLang<Expr>>) -> Self {
        Expr(Rc::new(form.into()))
    }

    /// The outermost form.
    #[inline]
    pub fn kind(&self) -> &TryLang<Expr> {
        &self.0
    }

    /// Direct sub-expressions, in evaluation order.
    pub fn children(&self) -> SmallVec<[&Expr; 4]> {
        self.0.children()
    }

    /// Layer of the outermost form.
    pub fn layer(&self) -> Layer {
        self.0.layer()
    }

    /// Highest layer used anywhere in the tree.
    pub fn required_layer(&self) -> Layer {
        ensure_sufficient_stack(|| {
            self.children()
                .into_iter()
                .map(Expr::required_layer)
                .fold(self.layer(), Ord::max)
        })
    }

    /// Short name of the outermost form.
    pub fn form_name(&self) -> &'static str {
        self.0.form_name()
    }

    /// Whether both handles point at the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Expr) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // LET

    pub fn int(n: i64) -> Self {
        Expr::new(LetLang::<Expr>::Lit(Literal::Int(n)))
    }

    pub fn bool(b: bool) -> Self {
        Expr::new(LetLang::<Expr>::Lit(Literal::Bool(b)))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Expr::new(LetLang::<Expr>::Lit(Literal::Str(s.into())))
    }

    pub fn var(name: impl Into<Name>) -> Self {
        Expr::new(LetLang::<Expr>::Var(name.into()))
    }

    pub fn op(op: impl Into<Name>, args: impl IntoIterator<Item = Expr>) -> Self {
        Expr::new(LetLang::Op {
            op: op.into(),
            args: args.into_iter().collect(),
        })
    }

    pub fn is_zero(e: Expr) -> Self {
        Expr::new(LetLang::IsZero(e))
    }

    pub fn cond(cond: Expr, then: Expr, otherwise: Expr) -> Self {
        Expr::new(LetLang::If {
            cond,
            then,
            otherwise,
        })
    }

    pub fn let_in<N: Into<Name>>(bindings: impl IntoIterator<Item = (N, Expr)>, body: Expr) -> Self {
        Expr::new(LetLang::Let {
            bindings: bindings.into_iter().map(|(n, e)| (n.into(), e)).collect(),
            body,
        })
    }

    pub fn tuple(items: impl IntoIterator<Item = Expr>) -> Self {
        Expr::new(LetLang::Tuple(items.into_iter().collect()))
    }

    // PROC

    pub fn proc<N: Into<Name>>(params: impl IntoIterator<Item = N>, body: Expr) -> Self {
        Expr::new(ProcLang::Proc(Procedure::new(params, body)))
    }

    pub fn call(operator: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        Expr::new(ProcLang::Call {
            operator,
            args: args.into_iter().collect(),
        })
    }

    // LETREC

    pub fn letrec<N: Into<Name>>(
        procs: impl IntoIterator<Item = (N, Procedure<Expr>)>,
        body: Expr,
    ) -> Self {
        Expr::new(LetRecLang::LetRec {
            procs: procs.into_iter().map(|(n, p)| (n.into(), p)).collect(),
            body,
        })
    }

    // EXPLICIT-REFS

    pub fn newref(e: Expr) -> Self {
        Expr::new(ExpRefLang::NewRef(e))
    }

    pub fn var_ref(name: impl Into<Name>) -> Self {
        Expr::new(ExpRefLang::<Expr>::VarRef(name.into()))
    }

    pub fn deref(e: Expr) -> Self {
        Expr::new(ExpRefLang::DeRef(e))
    }

    pub fn setref(target: Expr, value: Expr) -> Self {
        Expr::new(ExpRefLang::SetRef { target, value })
    }

    pub fn block(exprs: impl IntoIterator<Item = Expr>) -> Self {
        Expr::new(ExpRefLang::Block(exprs.into_iter().collect()))
    }

    // IMPLICIT-REFS

    pub fn assign(name: impl Into<Name>, value: Expr) -> Self {
        Expr::new(ImpRefLang::Assign {
            name: name.into(),
            value,
        })
    }

    // LAZY

    pub fn lazy(e: Expr) -> Self {
        Expr::new(LazyLang::Lazy(e))
    }

    pub fn force(e: Expr) -> Self {
        Expr::new(LazyLang::Force(e))
    }

    // TRY

    pub fn try_catch(body: Expr, var: impl Into<Name>, handler: Expr) -> Self {
        Expr::new(TryLang::Try {
            body,
            var: var.into(),
            handler,
        })
    }

    pub fn raise(e: Expr) -> Self {
        Expr::new(TryLang::Raise(e))
    }
}

impl Expr {
    /// Take the node out of a handle that alone owns an inner node, leaving a
    /// childless placeholder behind.
    fn detach(&mut self) -> Option<Rc<TryLang<Expr>>> {
        if Rc::strong_count(&self.0) != 1 || self.0.children().is_empty() {
            return None;
        }
        let hollow = Rc::new(TryLang::from(LetLang::<Expr>::Tuple(Vec::new())));
        Some(std::mem::replace(&mut self.0, hollow))
    }
}

/// Deep trees are taken apart with a worklist rather than by recursive drops.
impl Drop for Expr {
    fn drop(&mut self) {
        let Some(node) = self.detach() else {
            return;
        };
        let mut work = vec![node];
        while let Some(node) = work.pop() {
            if let Ok(form) = Rc::try_unwrap(node) {
                work.extend(form.into_children().iter_mut().filter_map(Expr::detach));
            }
        }
    }
}

/// Structural equality; shared subtrees short-circuit.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || ensure_sufficient_stack(|| *self.0 == *other.0)
    }
}

impl Eq for Expr {}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::int(n)
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::bool(b)
    }
}

/// Debug output shows the source form; the nested layer wrappers are noise.
impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({self})")
    }
}

#[cfg(test)]
mod tests;
