//! LET: the base layer.
//!
//! Literals, variables, operator calls, the zero test, conditionals,
//! non-recursive `let` and tuples.

use smallvec::SmallVec;

use crate::{Layer, Literal, Name};

/// Forms of the LET language, generic over the child expression type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LetLang<E> {
    /// A constant.
    Lit(Literal),
    /// A variable reference, resolved through the environment chain.
    Var(Name),
    /// `op(a, b, ...)`: the operator is looked up by name in the environment.
    Op { op: Name, args: Vec<E> },
    /// `isz(e)`: `true` when `e` evaluates to integer zero.
    IsZero(E),
    /// `if cond then then else otherwise`.
    If { cond: E, then: E, otherwise: E },
    /// `let x = e1 y = e2 in body`. Bindings are evaluated in declaration
    /// order in the enclosing scope and cannot see each other. A repeated
    /// name is still evaluated; the last binding of it is the one in scope.
    Let { bindings: Vec<(Name, E)>, body: E },
    /// `(a, b, ...)`.
    Tuple(Vec<E>),
}

impl<E> LetLang<E> {
    pub fn layer(&self) -> Layer {
        Layer::Let
    }

    /// Short name of the form, for diagnostics.
    pub fn form_name(&self) -> &'static str {
        match self {
            LetLang::Lit(_) => "literal",
            LetLang::Var(_) => "variable",
            LetLang::Op { .. } => "operator call",
            LetLang::IsZero(_) => "zero test",
            LetLang::If { .. } => "if",
            LetLang::Let { .. } => "let",
            LetLang::Tuple(_) => "tuple",
        }
    }

    /// Direct sub-expressions, in evaluation order.
    pub fn children(&self) -> SmallVec<[&E; 4]> {
        match self {
            LetLang::Lit(_) | LetLang::Var(_) => SmallVec::new(),
            LetLang::Op { args, .. } => args.iter().collect(),
            LetLang::IsZero(e) => smallvec::smallvec![e],
            LetLang::If {
                cond,
                then,
                otherwise,
            } => smallvec::smallvec![cond, then, otherwise],
            LetLang::Let { bindings, body } => bindings
                .iter()
                .map(|(_, e)| e)
                .chain(std::iter::once(body))
                .collect(),
            LetLang::Tuple(items) => items.iter().collect(),
        }
    }

    /// Direct sub-expressions, by value.
    pub fn into_children(self) -> SmallVec<[E; 4]> {
        match self {
            LetLang::Lit(_) | LetLang::Var(_) => SmallVec::new(),
            LetLang::Op { args, .. } | LetLang::Tuple(args) => args.into_iter().collect(),
            LetLang::IsZero(e) => smallvec::smallvec![e],
            LetLang::If {
                cond,
                then,
                otherwise,
            } => smallvec::smallvec![cond, then, otherwise],
            LetLang::Let { bindings, body } => bindings
                .into_iter()
                .map(|(_, e)| e)
                .chain(std::iter::once(body))
                .collect(),
        }
    }
}
