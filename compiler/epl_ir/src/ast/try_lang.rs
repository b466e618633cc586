//! TRY: exceptions with non-local exit.

use smallvec::SmallVec;

use super::LazyLang;
use crate::{Layer, Name};

/// Forms of the TRY language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TryLang<E> {
    Base(LazyLang<E>),
    /// `try body catch (var) handler`.
    Try { body: E, var: Name, handler: E },
    /// `raise(e)`: unwinds to the nearest enclosing `try`.
    Raise(E),
}

impl<E> TryLang<E> {
    pub fn layer(&self) -> Layer {
        match self {
            TryLang::Base(form) => form.layer(),
            TryLang::Try { .. } | TryLang::Raise(_) => Layer::Try,
        }
    }

    pub fn form_name(&self) -> &'static str {
        match self {
            TryLang::Base(form) => form.form_name(),
            TryLang::Try { .. } => "try",
            TryLang::Raise(_) => "raise",
        }
    }

    pub fn children(&self) -> SmallVec<[&E; 4]> {
        match self {
            TryLang::Base(form) => form.children(),
            TryLang::Try { body, handler, .. } => smallvec::smallvec![body, handler],
            TryLang::Raise(e) => smallvec::smallvec![e],
        }
    }

    pub fn into_children(self) -> SmallVec<[E; 4]> {
        match self {
            TryLang::Base(form) => form.into_children(),
            TryLang::Try { body, handler, .. } => smallvec::smallvec![body, handler],
            TryLang::Raise(e) => smallvec::smallvec![e],
        }
    }
}
