use wisp_common::ast::pretty::Prettier;
use wisp_common::ast::{Decls, ExprNode};
use wisp_common::message::Messages;
use wisp_common::Driver;

use super::parse;
use crate::lex::lex;

#[derive(Default)]
struct MockDriver {
    messages: Messages,
}

impl Driver for MockDriver {
    fn report(&mut self, messages: Messages) {
        self.messages.merge(messages);
    }
}

fn parse_source(src: &str) -> (Decls, MockDriver) {
    let mut driver = MockDriver::default();
    let tokens = lex(&mut driver, src, 0);
    let decls = parse(&mut driver, tokens, 0);
    (decls, driver)
}

fn check(src: &str, expected: &str) {
    let (decls, driver) = parse_source(src);
    assert!(
        driver.messages.is_empty(),
        "unexpected messages: {:?}",
        driver.messages.codes()
    );

    let prettier = Prettier::new().with_width(1000);
    assert_eq!(expected, prettier.pretty_decls(&decls));
}

fn check_codes(src: &str, expected: &[&str]) {
    let (_, driver) = parse_source(src);
    assert_eq!(expected, driver.messages.codes().as_slice());
}

#[test]
fn parse_nothing() {
    let (decls, driver) = parse_source("  -- just a comment");
    assert!(decls.values.is_empty());
    assert!(driver.messages.is_empty());
}

#[test]
fn parse_operator_precedence() {
    check(
        "let x = 1 + 2 * 3",
        "(let x (app (app (name +) (int 1)) (app (app (name *) (int 2)) (int 3))))",
    );
}

#[test]
fn parse_operators_associate_left() {
    check(
        "let x = a - b - c",
        "(let x (app (app (name -) (app (app (name -) (name a)) (name b))) (name c)))",
    );
}

#[test]
fn parse_logic_binds_loosest() {
    check(
        "let x = a < b && c || d",
        "(let x (app (app (name ||) (app (app (name &&) (app (app (name <) (name a)) (name b))) (name c))) (name d)))",
    );
}

#[test]
fn parse_curried_lambda_and_call() {
    check(
        "let f = fn(x, y) -> g(x, y)",
        "(let f (fn x (fn y (app (app (name g) (name x)) (name y)))))",
    );
}

#[test]
fn parse_empty_call_passes_unit() {
    check("let u = f()", "(let u (app (name f) (unit)))");
}

#[test]
fn parse_ascription() {
    check(
        "let p = (fn(x) -> x : Int -> Int)(5)",
        "(let p (app (the [Int -> Int] (fn x (name x))) (int 5)))",
    );
}

#[test]
fn parse_tuples_and_literals() {
    check(
        r#"let t = (1, 2.5, "a", true, ())"#,
        r#"(let t (tuple (int 1) (float 2.5) (string "a") (bool true) (unit)))"#,
    );
}

#[test]
fn parse_let_and_if() {
    check(
        "let v = let y = 1 in if y == 1 then y else 0",
        "(let v (let y (int 1) (if (app (app (name ==) (name y)) (int 1)) (name y) (int 0))))",
    );
}

#[test]
fn parse_annotations() {
    check(
        "let k : (Int -> Bool) -> _ = fn(a : Int, b) -> a;\nlet u : (Int, ()) = (1, ())",
        "(let [k : (Int -> Bool) -> _] (fn [a : Int] (fn b (name a))))\n(let [u : (Int, Unit)] (tuple (int 1) (unit)))",
    );
}

#[test]
fn parse_group_is_transparent() {
    let (decls, _) = parse_source("let x = ((y))");
    assert!(matches!(&decls.values[0].bind.node, ExprNode::Name(name) if name == "y"));
}

#[test]
fn parse_spans() {
    let (decls, _) = parse_source("let x = f(1)");
    let def = &decls.values[0];
    assert_eq!((0, 12), (def.span.start, def.span.end));
    assert_eq!((4, 5), (def.binder.span.start, def.binder.span.end));
    assert_eq!((8, 12), (def.bind.span.start, def.bind.span.end));
}

#[test]
fn parse_errors() {
    check_codes("let x = )", &["EP00"]);
    check_codes("1 2", &["EP05"]);
    check_codes("let x = (1", &["EP03"]);
    check_codes("let x : Foo = 1", &["EP06"]);
    check_codes("let = 1", &["EP02"]);
    check_codes("let x : = 1", &["EP01", "EP04"]);
    check_codes("let x = if a then b", &["EP04", "EP00"]);
}

#[test]
fn parse_moderate_nesting() {
    let src = format!("let x = {}1{}", "(".repeat(50), ")".repeat(50));
    check(&src, "(let x (int 1))");
}

#[test]
fn parse_deep_nesting_is_an_error() {
    let src = format!("let x = {}1{}", "(".repeat(20000), ")".repeat(20000));
    check_codes(&src, &["EP07"]);

    let src = format!("let f = fn(x) -> {}x", "fn(y) -> ".repeat(20000));
    check_codes(&src, &["EP07"]);

    let src = format!("let t : {}Int = 1", "(Int -> ".repeat(20000));
    check_codes(&src, &["EP07"]);
}

#[test]
fn parse_long_chains_are_an_error() {
    let src = format!("let x = 1{}", " + 1".repeat(20000));
    check_codes(&src, &["EP07"]);

    let src = format!("let x = f{}", "(1)".repeat(20000));
    check_codes(&src, &["EP07"]);

    let src = format!("let x = f(1{})", ", 1".repeat(20000));
    check_codes(&src, &["EP07"]);
}

#[test]
fn parse_deep_nesting_keeps_earlier_messages() {
    let src = format!(
        "let a = (1\nlet b = {}1{}",
        "(".repeat(20000),
        ")".repeat(20000)
    );

    check_codes(&src, &["EP03", "EP07"]);
}
