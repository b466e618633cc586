//! LETREC: mutually recursive procedure definitions.

use smallvec::SmallVec;

use super::{ProcLang, Procedure};
use crate::{Layer, Name};

/// Forms of the LETREC language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LetRecLang<E> {
    Base(ProcLang<E>),
    /// `letrec f(x) = ... g(y) = ... in body`. Every procedure closes over the
    /// single frame holding all of them. A repeated name keeps the last
    /// definition.
    LetRec {
        procs: Vec<(Name, Procedure<E>)>,
        body: E,
    },
}

impl<E> LetRecLang<E> {
    pub fn layer(&self) -> Layer {
        match self {
            LetRecLang::Base(form) => form.layer(),
            LetRecLang::LetRec { .. } => Layer::LetRec,
        }
    }

    pub fn form_name(&self) -> &'static str {
        match self {
            LetRecLang::Base(form) => form.form_name(),
            LetRecLang::LetRec { .. } => "letrec",
        }
    }

    pub fn children(&self) -> SmallVec<[&E; 4]> {
        match self {
            LetRecLang::Base(form) => form.children(),
            LetRecLang::LetRec { procs, body } => procs
                .iter()
                .map(|(_, proc)| &proc.body)
                .chain(std::iter::once(body))
                .collect(),
        }
    }

    pub fn into_children(self) -> SmallVec<[E; 4]> {
        match self {
            LetRecLang::Base(form) => form.into_children(),
            LetRecLang::LetRec { procs, body } => procs
                .into_iter()
                .map(|(_, proc)| proc.body)
                .chain(std::iter::once(body))
                .collect(),
        }
    }
}
