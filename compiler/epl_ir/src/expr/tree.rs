//! Building [`Printable`] dumps.

use epl_stack::ensure_sufficient_stack;

use super::Expr;
use crate::ast::{
    ExpRefLang, ImpRefLang, LazyLang, LetLang, LetRecLang, ProcLang, Procedure, TryLang,
};
use crate::{Name, Printable};

impl Expr {
    /// An indented tree dump of this expression.
    pub fn printable(&self) -> Printable {
        ensure_sufficient_stack(|| match self.kind() {
            TryLang::Base(form) => lazy_tree(form),
            TryLang::Try { body, var, handler } => Printable::group(
                0,
                vec![
                    Printable::line(0, "Try"),
                    nested(1, body),
                    Printable::line(0, format!("Catch ({var})")),
                    nested(1, handler),
                ],
            ),
            TryLang::Raise(e) => headed("Raise", [e]),
        })
    }
}

fn nested(indent: usize, e: &Expr) -> Printable {
    Printable::group(indent, vec![e.printable()])
}

/// A header line followed by each child one level in.
fn headed<'a>(head: impl Into<String>, children: impl IntoIterator<Item = &'a Expr>) -> Printable {
    let mut items = vec![Printable::line(0, head)];
    items.extend(children.into_iter().map(|e| nested(1, e)));
    Printable::group(0, items)
}

fn lazy_tree(form: &LazyLang<Expr>) -> Printable {
    match form {
        LazyLang::Base(ImpRefLang::Base(form)) => ref_tree(form),
        LazyLang::Base(ImpRefLang::Assign { name, value }) => {
            headed(format!("Set {name} ="), [value])
        }
        LazyLang::Lazy(e) => headed("Lazy", [e]),
        LazyLang::Force(e) => headed("Thunk", [e]),
    }
}

fn ref_tree(form: &ExpRefLang<Expr>) -> Printable {
    match form {
        ExpRefLang::Base(LetRecLang::Base(form)) => proc_tree(form),
        ExpRefLang::Base(LetRecLang::LetRec { procs, body }) => {
            let mut items = vec![Printable::line(0, "LetRec")];
            for (name, Procedure { params, body }) in procs {
                let params: Vec<&str> = params.iter().map(Name::as_str).collect();
                items.push(Printable::line(1, format!("{name}({}) =", params.join(", "))));
                items.push(nested(2, body));
            }
            items.push(Printable::line(0, "In"));
            items.push(nested(1, body));
            Printable::group(0, items)
        }
        ExpRefLang::NewRef(e) => headed("NewRef", [e]),
        ExpRefLang::VarRef(name) => Printable::line(0, format!("Ref {name}")),
        ExpRefLang::DeRef(e) => headed("DeRef", [e]),
        ExpRefLang::SetRef { target, value } => headed("SetRef", [target, value]),
        ExpRefLang::Block(exprs) => headed("Block", exprs),
    }
}

fn proc_tree(form: &ProcLang<Expr>) -> Printable {
    match form {
        ProcLang::Base(form) => let_tree(form),
        ProcLang::Proc(Procedure { params, body }) => {
            let params: Vec<&str> = params.iter().map(Name::as_str).collect();
            headed(format!("Proc ({}) =", params.join(", ")), [body])
        }
        ProcLang::Call { operator, args } => {
            let mut items = vec![
                Printable::line(0, "Call"),
                Printable::line(1, "Operator"),
                nested(2, operator),
                Printable::line(1, "Args"),
            ];
            items.extend(args.iter().map(|a| nested(2, a)));
            Printable::group(0, items)
        }
    }
}

fn let_tree(form: &LetLang<Expr>) -> Printable {
    match form {
        LetLang::Lit(lit) => Printable::line(0, format!("Lit {lit}")),
        LetLang::Var(name) => Printable::line(0, format!("Var {name}")),
        LetLang::Op { op, args } => headed(format!("Op {op}"), args),
        LetLang::IsZero(e) => headed("IsZero", [e]),
        LetLang::If {
            cond,
            then,
            otherwise,
        } => Printable::group(
            0,
            vec![
                Printable::line(0, "If"),
                nested(1, cond),
                Printable::line(0, "Then"),
                nested(1, then),
                Printable::line(0, "Else"),
                nested(1, otherwise),
            ],
        ),
        LetLang::Let { bindings, body } => {
            let mut items = vec![Printable::line(0, "Let")];
            for (name, e) in bindings {
                items.push(Printable::line(1, format!("{name} =")));
                items.push(nested(2, e));
            }
            items.push(Printable::line(0, "In"));
            items.push(nested(1, body));
            Printable::group(0, items)
        }
        LetLang::Tuple(items) => headed("Tuple", items),
    }
}
