//! Source-like rendering.
//!
//! Output follows the concrete syntax of the chapter languages:
//! `-(x, 3)`, `(f 5 3)`, `let x = 5 in b`, `begin a; b end`.

use std::fmt::{self, Display, Formatter};

use epl_stack::ensure_sufficient_stack;

use super::Expr;
use crate::ast::{
    ExpRefLang, ImpRefLang, LazyLang, LetLang, LetRecLang, ProcLang, Procedure, TryLang,
};

/// Write `items` separated by `sep`.
fn join<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl<E: Display> Display for LetLang<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LetLang::Lit(lit) => write!(f, "{lit}"),
            LetLang::Var(name) => write!(f, "{name}"),
            LetLang::Op { op, args } => {
                write!(f, "{op}(")?;
                join(f, args, ", ")?;
                f.write_str(")")
            }
            LetLang::IsZero(e) => write!(f, "isz({e})"),
            LetLang::If {
                cond,
                then,
                otherwise,
            } => write!(f, "if {cond} then {then} else {otherwise}"),
            LetLang::Let { bindings, body } => {
                f.write_str("let")?;
                for (name, e) in bindings {
                    write!(f, " {name} = {e}")?;
                }
                write!(f, " in {body}")
            }
            LetLang::Tuple(items) => {
                f.write_str("(")?;
                join(f, items, ", ")?;
                f.write_str(")")
            }
        }
    }
}

impl<E: Display> Display for ProcLang<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProcLang::Base(form) => form.fmt(f),
            ProcLang::Proc(Procedure { params, body }) => {
                f.write_str("proc(")?;
                join(f, params, ", ")?;
                write!(f, ") {body}")
            }
            ProcLang::Call { operator, args } => {
                write!(f, "({operator}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl<E: Display> Display for LetRecLang<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LetRecLang::Base(form) => form.fmt(f),
            LetRecLang::LetRec { procs, body } => {
                f.write_str("letrec")?;
                for (name, Procedure { params, body }) in procs {
                    write!(f, " {name}(")?;
                    join(f, params, ", ")?;
                    write!(f, ") = {body}")?;
                }
                write!(f, " in {body}")
            }
        }
    }
}

impl<E: Display> Display for ExpRefLang<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExpRefLang::Base(form) => form.fmt(f),
            ExpRefLang::NewRef(e) => write!(f, "newref({e})"),
            ExpRefLang::VarRef(name) => write!(f, "ref {name}"),
            ExpRefLang::DeRef(e) => write!(f, "deref({e})"),
            ExpRefLang::SetRef { target, value } => write!(f, "setref({target}, {value})"),
            ExpRefLang::Block(exprs) if exprs.is_empty() => f.write_str("begin end"),
            ExpRefLang::Block(exprs) => {
                f.write_str("begin ")?;
                join(f, exprs, "; ")?;
                f.write_str(" end")
            }
        }
    }
}

impl<E: Display> Display for ImpRefLang<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ImpRefLang::Base(form) => form.fmt(f),
            ImpRefLang::Assign { name, value } => write!(f, "set {name} = {value}"),
        }
    }
}

impl<E: Display> Display for LazyLang<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LazyLang::Base(form) => form.fmt(f),
            LazyLang::Lazy(e) => write!(f, "lazy({e})"),
            LazyLang::Force(e) => write!(f, "thunk({e})"),
        }
    }
}

impl<E: Display> Display for TryLang<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TryLang::Base(form) => form.fmt(f),
            TryLang::Try { body, var, handler } => {
                write!(f, "try {body} catch ({var}) {handler}")
            }
            TryLang::Raise(e) => write!(f, "raise({e})"),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.kind().fmt(f))
    }
}
