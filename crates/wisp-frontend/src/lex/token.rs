use logos::Logos;

#[derive(Logos, Debug, PartialEq)]
pub enum FreeToken<'src> {
    #[token("let")]
    Let,

    #[token("in")]
    In,

    #[token("if")]
    If,

    #[token("then")]
    Then,

    #[token("else")]
    Else,

    #[token("fn")]
    Fn,

    #[token("true")]
    True,

    #[token("false")]
    False,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token("=")]
    Equal,

    #[token("->")]
    MinArrow,

    #[token("_")]
    Underscore,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("++")]
    PlusPlus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("==")]
    EqEq,

    #[token("!=")]
    NotEq,

    #[token("<")]
    Less,

    #[token("<=")]
    LessEq,

    #[token(">")]
    Greater,

    #[token(">=")]
    GreaterEq,

    #[token("&&")]
    AndAnd,

    #[token("||")]
    OrOr,

    #[regex(r"[a-zA-Z][a-zA-Z0-9_']*")]
    Name(&'src str),

    #[regex(r"[0-9][0-9_]*")]
    DecNumber(&'src str),

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*")]
    DecFloat(&'src str),

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String(&'src str),

    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedString(&'src str),

    #[error]
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    #[regex(r"--[^\n\r]*", logos::skip)]
    Error,
}
