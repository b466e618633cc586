//! EXPLICIT-REFS and IMPLICIT-REFS: mutable state.

use smallvec::SmallVec;

use super::LetRecLang;
use crate::{Layer, Name};

/// Forms of the EXPLICIT-REFS language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpRefLang<E> {
    Base(LetRecLang<E>),
    /// `newref(e)`: a fresh cell holding the value of `e`.
    NewRef(E),
    /// `ref x`: a reference aliasing the binding of `x`.
    VarRef(Name),
    /// `deref(r)`.
    DeRef(E),
    /// `setref(r, v)`: stores `v` through `r` and yields `v`.
    SetRef { target: E, value: E },
    /// `begin e1; e2; ... end`: yields the last value.
    Block(Vec<E>),
}

impl<E> ExpRefLang<E> {
    pub fn layer(&self) -> Layer {
        match self {
            ExpRefLang::Base(form) => form.layer(),
            _ => Layer::ExplicitRefs,
        }
    }

    pub fn form_name(&self) -> &'static str {
        match self {
            ExpRefLang::Base(form) => form.form_name(),
            ExpRefLang::NewRef(_) => "newref",
            ExpRefLang::VarRef(_) => "ref",
            ExpRefLang::DeRef(_) => "deref",
            ExpRefLang::SetRef { .. } => "setref",
            ExpRefLang::Block(_) => "block",
        }
    }

    pub fn children(&self) -> SmallVec<[&E; 4]> {
        match self {
            ExpRefLang::Base(form) => form.children(),
            ExpRefLang::NewRef(e) | ExpRefLang::DeRef(e) => smallvec::smallvec![e],
            ExpRefLang::VarRef(_) => SmallVec::new(),
            ExpRefLang::SetRef { target, value } => smallvec::smallvec![target, value],
            ExpRefLang::Block(exprs) => exprs.iter().collect(),
        }
    }

    pub fn into_children(self) -> SmallVec<[E; 4]> {
        match self {
            ExpRefLang::Base(form) => form.into_children(),
            ExpRefLang::NewRef(e) | ExpRefLang::DeRef(e) => smallvec::smallvec![e],
            ExpRefLang::VarRef(_) => SmallVec::new(),
            ExpRefLang::SetRef { target, value } => smallvec::smallvec![target, value],
            ExpRefLang::Block(exprs) => exprs.into_iter().collect(),
        }
    }
}

/// Forms of the IMPLICIT-REFS language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImpRefLang<E> {
    Base(ExpRefLang<E>),
    /// `set x = e`: replaces the nearest binding of `x` and yields the value.
    Assign { name: Name, value: E },
}

impl<E> ImpRefLang<E> {
    pub fn layer(&self) -> Layer {
        match self {
            ImpRefLang::Base(form) => form.layer(),
            ImpRefLang::Assign { .. } => Layer::ImplicitRefs,
        }
    }

    pub fn form_name(&self) -> &'static str {
        match self {
            ImpRefLang::Base(form) => form.form_name(),
            ImpRefLang::Assign { .. } => "assignment",
        }
    }

    pub fn children(&self) -> SmallVec<[&E; 4]> {
        match self {
            ImpRefLang::Base(form) => form.children(),
            ImpRefLang::Assign { value, .. } => smallvec::smallvec![value],
        }
    }

    pub fn into_children(self) -> SmallVec<[E; 4]> {
        match self {
            ImpRefLang::Base(form) => form.into_children(),
            ImpRefLang::Assign { value, .. } => smallvec::smallvec![value],
        }
    }
}
