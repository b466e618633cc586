//! Expression trees for the EPL interpreter family.
//!
//! The language grows in layers: LET, PROC, LETREC, EXPLICIT-REFS,
//! IMPLICIT-REFS, LAZY and TRY. Each layer is a closed enum that embeds the
//! previous one, and [`Expr`] is the shared handle over the largest.
//!
//! ```text
//! let e = Expr::let_in([("x", Expr::int(5))], Expr::op("-", [Expr::var("x"), Expr::int(3)]));
//! assert_eq!(e.to_string(), "let x = 5 in -(x, 3)");
//! ```

pub mod ast;
mod expr;
mod layer;
mod literal;
mod name;
mod printable;

pub use ast::{
    ExpRefLang, ImpRefLang, LazyLang, LetLang, LetRecLang, ProcLang, Procedure, TryLang,
};
pub use expr::Expr;
pub use layer::Layer;
pub use literal::Literal;
pub use name::Name;
pub use printable::Printable;
