use wisp_common::ast::pretty::Prettier;
use wisp_common::ast::{Decls, Expr};
use wisp_common::message::Messages;
use wisp_common::types::{Scheme, Subst, Type, VarSupply};
use wisp_common::{Driver, Mode, Propagation};

use super::{infer_types, infer_types_with, instantiate, typeck, unify, Env, TypeError, UnifyError};
use crate::lex::lex;
use crate::parse::parse;

#[derive(Default)]
struct MockDriver {
    messages: Messages,
}

impl Driver for MockDriver {
    fn report(&mut self, messages: Messages) {
        self.messages.merge(messages);
    }
}

const MODES: [bool; 2] = [false, true];

fn parsed(src: &str) -> Decls {
    let mut driver = MockDriver::default();
    let tokens = lex(&mut driver, src, 0);
    let decls = parse(&mut driver, tokens, 0);
    assert!(
        driver.messages.is_empty(),
        "{src:?} does not parse: {:?}",
        driver.messages.codes()
    );

    decls
}

fn infer(src: &str, top_down: bool) -> Result<Decls, Vec<TypeError>> {
    let mut decls = parsed(src);
    infer_types(&mut decls, top_down)?;
    Ok(decls)
}

/// Check that `name` gets the scheme `expected` in both modes.
fn check(src: &str, name: &str, expected: &str) {
    for top_down in MODES {
        let decls = match infer(src, top_down) {
            Ok(decls) => decls,
            Err(errors) => panic!("{src:?} (top-down: {top_down}) failed: {errors:?}"),
        };

        let scheme = decls.scheme_of(name).map(Scheme::to_string);
        assert_eq!(Some(expected), scheme.as_deref(), "top-down: {top_down}");
    }
}

/// The errors of a program in both modes.
fn fail(src: &str) -> [Vec<TypeError>; 2] {
    MODES.map(|top_down| match infer(src, top_down) {
        Ok(_) => panic!("{src:?} (top-down: {top_down}) should fail"),
        Err(errors) => errors,
    })
}

fn single(errors: &[TypeError]) -> &TypeError {
    assert_eq!(1, errors.len(), "expected a single error, got {errors:?}");
    &errors[0]
}

#[test]
fn infer_literals() {
    let src = r#"let a = 1 let b = 2.5 let c = "s" let d = true let e = ()"#;
    check(src, "a", "Int");
    check(src, "b", "Float");
    check(src, "c", "String");
    check(src, "d", "Bool");
    check(src, "e", "Unit");
}

#[test]
fn infer_identity() {
    check("let id = fn(x) -> x", "id", "forall 'a. 'a -> 'a");
}

#[test]
fn infer_const_quantifies_in_order() {
    check("let k = fn(x, y) -> x", "k", "forall 'a 'b. 'a -> 'b -> 'a");
}

#[test]
fn infer_compose() {
    check(
        "let compose = fn(f, g, x) -> f(g(x))",
        "compose",
        "forall 'a 'b 'c. ('a -> 'b) -> ('c -> 'a) -> 'c -> 'b",
    );
}

#[test]
fn infer_prelude() {
    let src = r#"
        let swap = fn(p) -> (snd(p), fst(p))
        let s = "a" ++ "b"
        let eq = fn(a, b) -> a == b && not(a != b)
        let f = to_float(neg(1))
    "#;

    check(src, "swap", "forall 'a 'b. ('a, 'b) -> ('b, 'a)");
    check(src, "s", "String");
    check(src, "eq", "forall 'a. 'a -> 'a -> Bool");
    check(src, "f", "Float");
}

#[test]
fn let_polymorphism() {
    check(
        "let main = let id = fn(x) -> x in (id(1), id(true))",
        "main",
        "(Int, Bool)",
    );
}

#[test]
fn top_level_polymorphism() {
    let src = "let id = fn(x) -> x\nlet pair = (id(1), id(\"s\"))";
    check(src, "pair", "(Int, String)");
}

#[test]
fn let_does_not_generalize_over_the_environment() {
    check("let g = fn(x) -> let y = x in y", "g", "forall 'a. 'a -> 'a");

    for errors in fail("let bad = fn(x) -> let y = x in (y + 1, y && true)") {
        match single(&errors) {
            TypeError::TypeMismatch {
                expected, found, ..
            } => {
                assert_eq!(&Type::bool(), expected);
                assert_eq!(&Type::int(), found);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn occurs_check() {
    for errors in fail("let f = fn(x) -> x(x)") {
        assert!(matches!(single(&errors), TypeError::OccursCheck { .. }));
    }
}

#[test]
fn occurs_check_on_direct_unification() {
    let mut vars = VarSupply::new();
    let v = vars.fresh();
    let ty = Type::fun(Type::Var(v), Type::int());

    let err = unify(&Type::Var(v), &ty, Subst::new()).unwrap_err();
    assert_eq!(UnifyError::Occurs { var: v, ty }, err);
}

#[test]
fn unbound_identifier_stops_inference() {
    for errors in fail("let x = (y, z)") {
        match single(&errors) {
            TypeError::UnboundIdentifier { name, span } => {
                assert_eq!("y", name);
                assert_eq!((9, 10), (span.start, span.end));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn ascription_rejects_wrong_argument() {
    for errors in fail("let main = (fn(x) -> x : Int -> Int)(true)") {
        match single(&errors) {
            TypeError::TypeMismatch {
                expected, found, ..
            } => {
                assert_eq!(&Type::int(), expected);
                assert_eq!(&Type::bool(), found);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn ascription_accepts_right_argument() {
    check("let main = (fn(x) -> x : Int -> Int)(5)", "main", "Int");
}

#[test]
fn branches_must_agree() {
    for errors in fail("let main = if true then 1 else false") {
        match single(&errors) {
            TypeError::BranchTypeMismatch { then, other, span } => {
                assert_eq!(&Type::int(), then);
                assert_eq!(&Type::bool(), other);
                assert_eq!((11, 36), (span.start, span.end));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    check("let main = if true then 1 else 2", "main", "Int");
}

#[test]
fn condition_must_be_bool() {
    for errors in fail("let main = if 1 then 2 else 3") {
        match single(&errors) {
            TypeError::TypeMismatch {
                expected, found, ..
            } => {
                assert_eq!(&Type::bool(), expected);
                assert_eq!(&Type::int(), found);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn declaration_annotations() {
    check("let f : Int -> Int = fn(x) -> x", "f", "Int -> Int");
    check("let g : _ -> Bool = fn(x) -> x", "g", "Bool -> Bool");
    check("let h = fn(x : Int) -> x", "h", "Int -> Int");
    check("let p : (Int, _) = (1, ())", "p", "(Int, Unit)");

    for errors in fail("let x : Bool = 1") {
        match single(&errors) {
            TypeError::AscriptionMismatch {
                expected,
                found,
                anno,
                ..
            } => {
                assert_eq!(&Type::bool(), expected);
                assert_eq!(&Type::int(), found);
                assert_eq!((8, 12), (anno.start, anno.end));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn parameter_annotation_conflicts_with_declaration() {
    for errors in fail("let f : Int -> Int = fn(x : Bool) -> x") {
        assert!(matches!(
            single(&errors),
            TypeError::AscriptionMismatch { .. }
        ));
    }
}

#[test]
fn ambiguous_types_are_reported_per_declaration() {
    for errors in fail("let x = (fn(y) -> 5)(fn(z) -> z)") {
        assert!(matches!(single(&errors), TypeError::AmbiguousType { .. }));
    }

    let src = "let a = (fn(y) -> 5)(fn(z) -> z)\nlet b = (fn(y) -> 1)(fn(z) -> z)";
    for errors in fail(src) {
        assert_eq!(2, errors.len());
        assert!(errors
            .iter()
            .all(|err| matches!(err, TypeError::AmbiguousType { .. })));
    }
}

#[test]
fn disabled_propagation_matches_bottom_up() {
    let off = Mode::TopDown(Propagation {
        arguments: false,
        branches: false,
        annotations: false,
    });

    let programs = [
        "let main = (fn(x) -> x : Int -> Int)(true)",
        "let main = if true then 1 else false",
        "let x : Bool = 1",
    ];

    for src in programs {
        let mut bottom_up = parsed(src);
        let mut top_down = parsed(src);

        let expected = infer_types_with(&mut bottom_up, Mode::BottomUp);
        let actual = infer_types_with(&mut top_down, off);
        assert_eq!(expected, actual, "{src:?}");
    }
}

#[test]
fn modes_are_confluent() {
    let programs = [
        "let id = fn(x) -> x\nlet main = (id(1), id(true))",
        "let compose = fn(f, g, x) -> f(g(x))",
        "let twice = fn(f) -> fn(x) -> f(f(x))\nlet inc = fn(n) -> n + 1\nlet four = twice(inc)(2)",
        "let fact = fn(n) -> if n <= 1 then 1 else n * 2",
        "let swap = fn(p) -> (snd(p), fst(p))",
        "let main = let k = fn(a, b) -> a in (k(1, \"x\"), k(true, ()))",
        "let apply : (Int -> Bool) -> Int -> Bool = fn(f, x) -> f(x)",
        "let choose = fn(c, a, b) -> if c then a else b\nlet n = choose(true, 1, 2)",
        "let eq = fn(a, b) -> a == b && not(a != b)",
        "let f = (fn(x) -> x : Int -> Int)(5)",
        "let g = fn(x : Float) -> (x, to_float(1))",
        "let h : _ -> (Int, _) = fn(x) -> (x + 1, if x > 0 then \"pos\" else \"neg\")",
    ];

    let prettier = Prettier::new().with_width(1000);

    for src in programs {
        let mut decls = parsed(src);

        infer_types(&mut decls, false).unwrap_or_else(|errs| panic!("{src:?}: {errs:?}"));
        let bottom_up = prettier.pretty_decls(&decls);

        infer_types(&mut decls, true).unwrap_or_else(|errs| panic!("{src:?}: {errs:?}"));
        let top_down = prettier.pretty_decls(&decls);

        assert_eq!(bottom_up, top_down, "{src:?}");
    }
}

#[test]
fn every_node_is_annotated() {
    let src = "let main = let id = fn(x) -> x in (id(1), if id(true) then \"y\" else \"n\")";

    for top_down in MODES {
        let decls = infer(src, top_down).unwrap();

        let mut missing = 0;
        decls.walk(&mut |ex: &Expr| {
            if ex.ty().is_none() {
                missing += 1;
            }
        });

        assert_eq!(0, missing);
    }
}

#[test]
fn typed_tree_prints_schemes() {
    let decls = infer("let id = fn(x) -> x", true).unwrap();
    let prettier = Prettier::new();

    assert_eq!(
        "(let [id : forall 'a. 'a -> 'a] (fn [x : 'a] (name x : 'a) : 'a -> 'a))",
        prettier.pretty_decls(&decls)
    );
}

#[test]
fn typeck_reports_diagnostics() {
    let mut driver = MockDriver::default();
    let mut decls = parsed("let main = if true then 1 else false");
    assert!(!typeck(&mut driver, &mut decls, Mode::top_down()));
    assert_eq!(vec!["ET03"], driver.messages.codes());

    let mut driver = MockDriver::default();
    let mut decls = parsed("let a = (fn(y) -> 5)(fn(z) -> z)\nlet b = (fn(y) -> 1)(fn(z) -> z)");
    assert!(!typeck(&mut driver, &mut decls, Mode::BottomUp));
    assert_eq!(vec!["ET05", "ET05"], driver.messages.codes());
}

#[test]
fn unify_reports_innermost_mismatch() {
    let t = Type::fun(Type::int(), Type::bool());
    let u = Type::fun(Type::int(), Type::string());

    let err = unify(&t, &u, Subst::new()).unwrap_err();
    assert_eq!(
        UnifyError::Mismatch {
            expected: Type::bool(),
            found: Type::string(),
        },
        err
    );
}

#[test]
fn unify_checks_arity() {
    let t = Type::tuple(vec![Type::int(), Type::bool()]);
    let u = Type::tuple(vec![Type::int(), Type::bool(), Type::int()]);

    assert!(matches!(
        unify(&t, &u, Subst::new()),
        Err(UnifyError::Mismatch { .. })
    ));
}

#[test]
fn unify_threads_bindings_left_to_right() {
    let mut vars = VarSupply::new();
    let a = vars.fresh_type();
    let b = vars.fresh_type();

    let t = Type::tuple(vec![a.clone(), a]);
    let u = Type::tuple(vec![Type::int(), b.clone()]);

    let subst = unify(&t, &u, Subst::new()).unwrap();
    assert_eq!(Type::int(), subst.apply(&b));
}

#[test]
fn unify_same_variable_is_noop() {
    let mut vars = VarSupply::new();
    let a = vars.fresh_type();

    let subst = unify(&a, &a, Subst::new()).unwrap();
    assert!(subst.is_empty());
}

#[test]
fn env_extension_is_pure() {
    let outer = Env::new().extend("x", Scheme::mono(Type::int()));
    let inner = outer.extend("x", Scheme::mono(Type::bool()));

    assert_eq!(Some(&Scheme::mono(Type::int())), outer.lookup("x"));
    assert_eq!(Some(&Scheme::mono(Type::bool())), inner.lookup("x"));
    assert_eq!(None, inner.lookup("y"));
}

#[test]
fn instantiate_is_fresh_per_use() {
    let mut vars = VarSupply::new();
    let a = vars.fresh();
    let scheme = Scheme::poly(vec![a], Type::fun(Type::Var(a), Type::Var(a)));

    let t = instantiate(&scheme, &mut vars);
    let u = instantiate(&scheme, &mut vars);

    assert_ne!(t, u);
    assert!(!t.occurs(&a));
    assert_eq!(1, t.free_vars().len());
}

#[test]
fn generalize_skips_environment_variables() {
    let mut vars = VarSupply::new();
    let a = vars.fresh();
    let b = vars.fresh();

    let env = Env::new().extend("x", Scheme::mono(Type::Var(a)));
    let scheme = env.generalize(&Subst::new(), &Type::fun(Type::Var(a), Type::Var(b)));

    assert_eq!(vec![b], scheme.vars);
}
