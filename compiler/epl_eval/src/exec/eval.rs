//! Dispatch on expression forms.
//!
//! One function per layer. Each handles the forms its layer introduces and
//! passes `Base` forms down to the layer below.

use std::rc::Rc;

use epl_ir::{
    ExpRefLang, Expr, ImpRefLang, LazyLang, LetLang, LetRecLang, ProcLang, TryLang,
};

use super::{sequence, State};
use crate::cont::{Combiner, Continuation, Next};
use crate::errors::{not_a_procedure, unbound_variable, EvalResult};
use crate::value::{Closure, Env, Reference, Thunk, Value};

pub(super) fn eval(expr: &Expr, env: Env, cont: Next) -> EvalResult<State> {
    match expr.kind() {
        TryLang::Base(form) => eval_lazy(form, env, cont),
        TryLang::Try { body, var, handler } => Ok(State::eval(
            body.clone(),
            env.clone(),
            Continuation::Try {
                var: var.clone(),
                handler: handler.clone(),
                env,
                next: cont,
            },
        )),
        TryLang::Raise(payload) => Ok(State::eval(
            payload.clone(),
            env,
            Continuation::Raise { next: cont },
        )),
    }
}

fn eval_lazy(form: &LazyLang<Expr>, env: Env, cont: Next) -> EvalResult<State> {
    match form {
        LazyLang::Base(form) => eval_imp_ref(form, env, cont),
        LazyLang::Lazy(e) => {
            let thunk = Thunk {
                expr: e.clone(),
                env,
            };
            Ok(State::resume(cont, Value::Thunk(Rc::new(thunk))))
        }
        LazyLang::Force(e) => Ok(State::eval(
            e.clone(),
            env,
            Continuation::Force { next: cont },
        )),
    }
}

fn eval_imp_ref(form: &ImpRefLang<Expr>, env: Env, cont: Next) -> EvalResult<State> {
    match form {
        ImpRefLang::Base(form) => eval_exp_ref(form, env, cont),
        ImpRefLang::Assign { name, value } => Ok(State::eval(
            value.clone(),
            env.clone(),
            Continuation::Assign {
                name: name.clone(),
                env,
                next: cont,
            },
        )),
    }
}

fn eval_exp_ref(form: &ExpRefLang<Expr>, env: Env, cont: Next) -> EvalResult<State> {
    match form {
        ExpRefLang::Base(form) => eval_letrec(form, env, cont),
        ExpRefLang::NewRef(e) => Ok(State::eval(
            e.clone(),
            env,
            Continuation::NewRef { next: cont },
        )),
        ExpRefLang::VarRef(name) => {
            if !env.contains(name.as_str()) {
                return Err(unbound_variable(name.as_str()));
            }
            let reference = Reference::Var {
                env,
                name: name.clone(),
            };
            Ok(State::resume(cont, Value::Ref(reference)))
        }
        ExpRefLang::DeRef(e) => Ok(State::eval(
            e.clone(),
            env,
            Continuation::DeRef { next: cont },
        )),
        ExpRefLang::SetRef { target, value } => Ok(State::eval(
            target.clone(),
            env.clone(),
            Continuation::SetRefTarget {
                value: value.clone(),
                env,
                next: cont,
            },
        )),
        ExpRefLang::Block(exprs) => sequence(exprs.clone(), Combiner::Last, env, cont),
    }
}

fn eval_letrec(form: &LetRecLang<Expr>, env: Env, cont: Next) -> EvalResult<State> {
    match form {
        LetRecLang::Base(form) => eval_proc(form, env, cont),
        LetRecLang::LetRec { procs, body } => {
            // Every procedure closes over the frame that binds all of them.
            let frame = env.push();
            for (name, proc) in procs {
                let closure = Closure {
                    name: Some(name.clone()),
                    params: proc.params.iter().cloned().collect(),
                    body: proc.body.clone(),
                    env: frame.clone(),
                };
                frame.set_one(name.clone(), Value::Closure(Rc::new(closure)));
            }
            Ok(State::eval(body.clone(), frame, cont))
        }
    }
}

fn eval_proc(form: &ProcLang<Expr>, env: Env, cont: Next) -> EvalResult<State> {
    match form {
        ProcLang::Base(form) => eval_let(form, env, cont),
        ProcLang::Proc(proc) => {
            let closure = Closure {
                name: None,
                params: proc.params.iter().cloned().collect(),
                body: proc.body.clone(),
                env,
            };
            Ok(State::resume(cont, Value::Closure(Rc::new(closure))))
        }
        ProcLang::Call { operator, args } => Ok(State::eval(
            operator.clone(),
            env.clone(),
            Continuation::Call {
                args: args.clone(),
                env,
                next: cont,
            },
        )),
    }
}

fn eval_let(form: &LetLang<Expr>, env: Env, cont: Next) -> EvalResult<State> {
    match form {
        LetLang::Lit(lit) => Ok(State::resume(cont, Value::from_literal(lit))),
        LetLang::Var(name) => Ok(State::resume(cont, env.get(name.as_str())?)),
        LetLang::Op { op, args } => {
            let operator = env.get(op.as_str())?;
            if !operator.is_callable() {
                return Err(not_a_procedure(&operator)
                    .with_note(format!("`{op}` is bound to {operator}")));
            }
            sequence(args.clone(), Combiner::Apply(operator), env, cont)
        }
        LetLang::IsZero(e) => Ok(State::eval(
            e.clone(),
            env,
            Continuation::IsZero { next: cont },
        )),
        LetLang::If {
            cond,
            then,
            otherwise,
        } => Ok(State::eval(
            cond.clone(),
            env.clone(),
            Continuation::If {
                then: then.clone(),
                otherwise: otherwise.clone(),
                env,
                next: cont,
            },
        )),
        LetLang::Let { bindings, body } => {
            let frame = env.push();
            let mut pending = bindings.clone().into_iter();
            match pending.next() {
                Some((bound, first)) => Ok(State::eval(
                    first,
                    env.clone(),
                    Continuation::Let {
                        pending,
                        bound,
                        frame,
                        env,
                        body: body.clone(),
                        next: cont,
                    },
                )),
                None => Ok(State::eval(body.clone(), frame, cont)),
            }
        }
        LetLang::Tuple(items) => sequence(items.clone(), Combiner::Tuple, env, cont),
    }
}
