//! PROC: first-class procedures.

use smallvec::SmallVec;

use super::LetLang;
use crate::{Layer, Name};

/// A procedure literal: ordered parameter names and a body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Procedure<E> {
    pub params: Vec<Name>,
    pub body: E,
}

impl<E> Procedure<E> {
    pub fn new<N: Into<Name>>(params: impl IntoIterator<Item = N>, body: E) -> Self {
        Procedure {
            params: params.into_iter().map(Into::into).collect(),
            body,
        }
    }
}

/// Forms of the PROC language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcLang<E> {
    Base(LetLang<E>),
    /// `proc(x, y) body`: closes over the environment where it is evaluated.
    Proc(Procedure<E>),
    /// `(operator a b ...)`: curried application.
    Call { operator: E, args: Vec<E> },
}

impl<E> ProcLang<E> {
    pub fn layer(&self) -> Layer {
        match self {
            ProcLang::Base(form) => form.layer(),
            ProcLang::Proc(_) | ProcLang::Call { .. } => Layer::Proc,
        }
    }

    pub fn form_name(&self) -> &'static str {
        match self {
            ProcLang::Base(form) => form.form_name(),
            ProcLang::Proc(_) => "procedure",
            ProcLang::Call { .. } => "call",
        }
    }

    pub fn children(&self) -> SmallVec<[&E; 4]> {
        match self {
            ProcLang::Base(form) => form.children(),
            ProcLang::Proc(proc) => smallvec::smallvec![&proc.body],
            ProcLang::Call { operator, args } => {
                std::iter::once(operator).chain(args.iter()).collect()
            }
        }
    }

    pub fn into_children(self) -> SmallVec<[E; 4]> {
        match self {
            ProcLang::Base(form) => form.into_children(),
            ProcLang::Proc(proc) => smallvec::smallvec![proc.body],
            ProcLang::Call { operator, args } => {
                std::iter::once(operator).chain(args).collect()
            }
        }
    }
}
