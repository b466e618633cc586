//! Layered expression forms.
//!
//! Each language layer is its own enum, generic over the child expression
//! type `E`, and embeds the layer below it through a `Base` variant. The
//! full language is [`TryLang`]; the recursive knot is tied by
//! [`Expr`](crate::Expr), which wraps `TryLang<Expr>`.
//!
//! # Module Structure
//!
//! - `let_lang`: literals, variables, operators, `isz`, `if`, `let`, tuples
//! - `proc_lang`: procedure literals and curried calls
//! - `letrec_lang`: mutually recursive procedures
//! - `ref_lang`: explicit references, blocks and assignment
//! - `lazy_lang`: thunks and forcing
//! - `try_lang`: `try`/`catch` and `raise`
//!
//! A form from any layer converts into every larger layer with `From`, so
//! constructors can build a `LetLang` node and lift it straight to `TryLang`.

mod lazy_lang;
mod let_lang;
mod letrec_lang;
mod proc_lang;
mod ref_lang;
mod try_lang;

pub use lazy_lang::LazyLang;
pub use let_lang::LetLang;
pub use letrec_lang::LetRecLang;
pub use proc_lang::{ProcLang, Procedure};
pub use ref_lang::{ExpRefLang, ImpRefLang};
pub use try_lang::TryLang;

/// `impl From<$from<E>> for $to<E>` by wrapping through each `Base` in turn.
macro_rules! lift {
    ($from:ident => $to:ident via [$($hop:ident),*]) => {
        impl<E> From<$from<E>> for $to<E> {
            fn from(form: $from<E>) -> Self {
                $(let form = $hop::Base(form);)*
                $to::Base(form)
            }
        }
    };
}

lift!(LetLang => ProcLang via []);
lift!(LetLang => LetRecLang via [ProcLang]);
lift!(LetLang => ExpRefLang via [ProcLang, LetRecLang]);
lift!(LetLang => ImpRefLang via [ProcLang, LetRecLang, ExpRefLang]);
lift!(LetLang => LazyLang via [ProcLang, LetRecLang, ExpRefLang, ImpRefLang]);
lift!(LetLang => TryLang via [ProcLang, LetRecLang, ExpRefLang, ImpRefLang, LazyLang]);

lift!(ProcLang => LetRecLang via []);
lift!(ProcLang => ExpRefLang via [LetRecLang]);
lift!(ProcLang => ImpRefLang via [LetRecLang, ExpRefLang]);
lift!(ProcLang => LazyLang via [LetRecLang, ExpRefLang, ImpRefLang]);
lift!(ProcLang => TryLang via [LetRecLang, ExpRefLang, ImpRefLang, LazyLang]);

lift!(LetRecLang => ExpRefLang via []);
lift!(LetRecLang => ImpRefLang via [ExpRefLang]);
lift!(LetRecLang => LazyLang via [ExpRefLang, ImpRefLang]);
lift!(LetRecLang => TryLang via [ExpRefLang, ImpRefLang, LazyLang]);

lift!(ExpRefLang => ImpRefLang via []);
lift!(ExpRefLang => LazyLang via [ImpRefLang]);
lift!(ExpRefLang => TryLang via [ImpRefLang, LazyLang]);

lift!(ImpRefLang => LazyLang via []);
lift!(ImpRefLang => TryLang via [LazyLang]);

lift!(LazyLang => TryLang via []);
