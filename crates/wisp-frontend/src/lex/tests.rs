use wisp_common::message::{Messages, Span};
use wisp_common::Driver;

use super::{lex, Token};

#[derive(Default)]
struct MockDriver {
    messages: Messages,
}

impl Driver for MockDriver {
    fn report(&mut self, messages: Messages) {
        self.messages.merge(messages);
    }
}

fn tokens(src: &str) -> (Vec<Token>, MockDriver) {
    let mut driver = MockDriver::default();
    let toks = lex(&mut driver, src, 0)
        .into_iter()
        .map(|(tok, _)| tok)
        .collect();
    (toks, driver)
}

#[test]
fn lex_keywords_and_names() {
    let (toks, driver) = tokens("let in if then else fn true false letter x' to_float");
    let expected = vec![
        Token::Let,
        Token::In,
        Token::If,
        Token::Then,
        Token::Else,
        Token::Fn,
        Token::Bool(true),
        Token::Bool(false),
        Token::Name("letter".into()),
        Token::Name("x'".into()),
        Token::Name("to_float".into()),
    ];

    assert_eq!(expected, toks);
    assert!(driver.messages.is_empty());
}

#[test]
fn lex_operators_take_longest_match() {
    let (toks, _) = tokens("+ ++ - -> = == != < <= > >= && || * / _");
    let expected = vec![
        Token::Plus,
        Token::PlusPlus,
        Token::Minus,
        Token::MinArrow,
        Token::Equal,
        Token::EqEq,
        Token::NotEq,
        Token::Less,
        Token::LessEq,
        Token::Greater,
        Token::GreaterEq,
        Token::AndAnd,
        Token::OrOr,
        Token::Star,
        Token::Slash,
        Token::Wildcard,
    ];

    assert_eq!(expected, toks);
}

#[test]
fn lex_literals() {
    let (toks, driver) = tokens(r#"12 1_000 2.5 "a\n\"b\"""#);
    let expected = vec![
        Token::Int(12),
        Token::Int(1000),
        Token::Float(2.5),
        Token::String("a\n\"b\"".into()),
    ];

    assert_eq!(expected, toks);
    assert!(driver.messages.is_empty());
}

#[test]
fn lex_skips_comments() {
    let (toks, _) = tokens("x -- the rest is ignored ( ) \ny");
    assert_eq!(
        vec![Token::Name("x".into()), Token::Name("y".into())],
        toks
    );
}

#[test]
fn lex_spans() {
    let mut driver = MockDriver::default();
    let toks = lex(&mut driver, "ab  cd", 3);
    let spans: Vec<_> = toks.into_iter().map(|(_, span)| span).collect();
    assert_eq!(vec![Span::new(3, 0, 2), Span::new(3, 4, 6)], spans);
}

#[test]
fn lex_reports_errors() {
    let (toks, driver) = tokens("a $ 99999999999999999999 \"bad\\q\"");
    assert_eq!(
        vec![
            Token::Name("a".into()),
            Token::Invalid,
            Token::Invalid,
            Token::Invalid,
        ],
        toks
    );
    assert_eq!(vec!["EL00", "EL02", "EL03"], driver.messages.codes());
}

#[test]
fn lex_unterminated_string() {
    let (toks, driver) = tokens("\"never closed\nx");
    assert_eq!(vec![Token::Invalid, Token::Name("x".into())], toks);
    assert_eq!(vec!["EL01"], driver.messages.codes());
}

#[test]
fn lex_invalid_character_names_the_text() {
    let (_, driver) = tokens("x = 1 @ 2");
    assert_eq!(vec!["EL00"], driver.messages.codes());

    let label = &driver.messages.msgs[0].labels[0];
    assert_eq!(6..7, label.range);
    assert!(label.message.contains("'@'"));
}
