use pretty_assertions::assert_eq;

use super::*;

fn minus(a: Expr, b: Expr) -> Expr {
    Expr::op("-", [a, b])
}

fn double() -> Expr {
    Expr::letrec(
        [(
            "double",
            Procedure::new(
                ["x"],
                Expr::cond(
                    Expr::is_zero(Expr::var("x")),
                    Expr::int(0),
                    minus(
                        Expr::call(Expr::var("double"), [minus(Expr::var("x"), Expr::int(1))]),
                        Expr::int(-2),
                    ),
                ),
            ),
        )],
        Expr::call(Expr::var("double"), [Expr::int(6)]),
    )
}

#[test]
fn equality_is_structural() {
    let a = Expr::let_in([("x", Expr::int(5))], minus(Expr::var("x"), Expr::int(3)));
    let b = Expr::let_in([("x", Expr::int(5))], minus(Expr::var("x"), Expr::int(3)));
    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));
    assert_ne!(a, Expr::int(2));
}

#[test]
fn lifted_forms_match_constructors() {
    let lifted = Expr::new(LetLang::<Expr>::Var(Name::from("x")));
    assert_eq!(lifted, Expr::var("x"));
    assert!(matches!(
        lifted.kind(),
        TryLang::Base(LazyLang::Base(ImpRefLang::Base(ExpRefLang::Base(
            LetRecLang::Base(ProcLang::Base(LetLang::Var(_)))
        ))))
    ));
}

#[test]
fn children_in_evaluation_order() {
    let e = Expr::let_in(
        [("x", Expr::int(1)), ("y", Expr::int(2))],
        Expr::var("body"),
    );
    let children: Vec<String> = e.children().iter().map(ToString::to_string).collect();
    assert_eq!(children, ["1", "2", "body"]);

    let call = Expr::call(Expr::var("f"), [Expr::int(1), Expr::int(2)]);
    let children: Vec<String> = call.children().iter().map(ToString::to_string).collect();
    assert_eq!(children, ["f", "1", "2"]);

    assert!(Expr::var_ref("x").children().is_empty());
}

#[test]
fn layer_of_outermost_form() {
    assert_eq!(Expr::int(1).layer(), Layer::Let);
    assert_eq!(Expr::proc(["x"], Expr::var("x")).layer(), Layer::Proc);
    assert_eq!(double().layer(), Layer::LetRec);
    assert_eq!(Expr::newref(Expr::int(0)).layer(), Layer::ExplicitRefs);
    assert_eq!(Expr::assign("x", Expr::int(0)).layer(), Layer::ImplicitRefs);
    assert_eq!(Expr::lazy(Expr::int(0)).layer(), Layer::Lazy);
    assert_eq!(Expr::raise(Expr::int(0)).layer(), Layer::Try);
}

#[test]
fn required_layer_looks_inside() {
    let e = Expr::let_in([("x", Expr::raise(Expr::int(1)))], Expr::var("x"));
    assert_eq!(e.layer(), Layer::Let);
    assert_eq!(e.required_layer(), Layer::Try);
    assert_eq!(double().required_layer(), Layer::LetRec);
    assert_eq!(minus(Expr::int(1), Expr::int(2)).required_layer(), Layer::Let);
}

#[test]
fn required_layer_of_deep_tree() {
    let mut e = Expr::lazy(Expr::int(0));
    for _ in 0..200_000 {
        e = Expr::is_zero(e);
    }
    assert_eq!(e.required_layer(), Layer::Lazy);
}

fn zero_tests(depth: usize) -> Expr {
    let mut e = Expr::var("x");
    for _ in 0..depth {
        e = Expr::is_zero(e);
    }
    e
}

#[test]
fn deep_trees_compare_render_and_drop() {
    let a = zero_tests(200_000);
    let b = zero_tests(200_000);
    assert!(a == b);
    assert!(a != zero_tests(199_999));
    assert_eq!(a.to_string().len(), "isz()".len() * 200_000 + 1);
    drop(a);
    drop(b);
}

#[test]
fn deep_blocks_and_calls_drop() {
    let mut e = Expr::int(0);
    for n in 0..100_000 {
        e = Expr::block([Expr::int(n), Expr::call(Expr::var("f"), [e])]);
    }
    assert_eq!(e.form_name(), "block");
    drop(e);
}

#[test]
fn shared_subtrees_survive_a_drop() {
    let shared = zero_tests(3);
    let outer = Expr::tuple([shared.clone(), Expr::is_zero(shared.clone())]);
    drop(outer);
    assert_eq!(shared.to_string(), "isz(isz(isz(x)))");
    assert_eq!(shared, zero_tests(3));
}

#[test]
fn display_let_family() {
    let e = Expr::let_in(
        [("x", Expr::int(5)), ("y", Expr::bool(true))],
        Expr::cond(
            Expr::is_zero(Expr::var("x")),
            Expr::tuple([Expr::var("x"), Expr::string("s")]),
            minus(Expr::var("x"), Expr::int(3)),
        ),
    );
    assert_eq!(
        e.to_string(),
        r#"let x = 5 y = true in if isz(x) then (x, "s") else -(x, 3)"#
    );
}

#[test]
fn display_procedures() {
    let f = Expr::let_in(
        [("f", Expr::proc(["x", "y"], minus(Expr::var("x"), Expr::var("y"))))],
        Expr::call(Expr::call(Expr::var("f"), [Expr::int(5)]), [Expr::int(3)]),
    );
    assert_eq!(f.to_string(), "let f = proc(x, y) -(x, y) in ((f 5) 3)");
    assert_eq!(
        double().to_string(),
        "letrec double(x) = if isz(x) then 0 else -((double -(x, 1)), -2) in (double 6)"
    );
}

#[test]
fn display_state_forms() {
    let e = Expr::block([
        Expr::setref(Expr::var_ref("a"), Expr::deref(Expr::newref(Expr::int(1)))),
        Expr::assign("b", Expr::int(2)),
        Expr::var("b"),
    ]);
    assert_eq!(
        e.to_string(),
        "begin setref(ref a, deref(newref(1))); set b = 2; b end"
    );
    assert_eq!(Expr::block([]).to_string(), "begin end");
}

#[test]
fn display_lazy_and_try() {
    assert_eq!(
        Expr::force(Expr::lazy(Expr::var("x"))).to_string(),
        "thunk(lazy(x))"
    );
    assert_eq!(
        Expr::try_catch(Expr::raise(Expr::int(99)), "e", Expr::var("e")).to_string(),
        "try raise(99) catch (e) e"
    );
}

#[test]
fn debug_shows_source() {
    assert_eq!(format!("{:?}", minus(Expr::int(1), Expr::int(2))), "Expr(-(1, 2))");
}

#[test]
fn form_names() {
    assert_eq!(Expr::int(1).form_name(), "literal");
    assert_eq!(Expr::block([]).form_name(), "block");
    assert_eq!(Expr::force(Expr::int(1)).form_name(), "thunk");
    assert_eq!(Expr::try_catch(Expr::int(1), "e", Expr::int(2)).form_name(), "try");
}
