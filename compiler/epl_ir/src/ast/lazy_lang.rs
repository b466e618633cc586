//! LAZY: deferred evaluation.

use smallvec::SmallVec;

use super::ImpRefLang;
use crate::Layer;

/// Forms of the LAZY language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LazyLang<E> {
    Base(ImpRefLang<E>),
    /// `lazy(e)`: a thunk over `e` and the current environment.
    Lazy(E),
    /// `thunk(e)`: evaluates `e` to a thunk and forces it. Forcing is not
    /// memoized; every force re-evaluates.
    Force(E),
}

impl<E> LazyLang<E> {
    pub fn layer(&self) -> Layer {
        match self {
            LazyLang::Base(form) => form.layer(),
            LazyLang::Lazy(_) | LazyLang::Force(_) => Layer::Lazy,
        }
    }

    pub fn form_name(&self) -> &'static str {
        match self {
            LazyLang::Base(form) => form.form_name(),
            LazyLang::Lazy(_) => "lazy",
            LazyLang::Force(_) => "thunk",
        }
    }

    pub fn children(&self) -> SmallVec<[&E; 4]> {
        match self {
            LazyLang::Base(form) => form.children(),
            LazyLang::Lazy(e) | LazyLang::Force(e) => smallvec::smallvec![e],
        }
    }

    pub fn into_children(self) -> SmallVec<[E; 4]> {
        match self {
            LazyLang::Base(form) => form.into_children(),
            LazyLang::Lazy(e) | LazyLang::Force(e) => smallvec::smallvec![e],
        }
    }
}
