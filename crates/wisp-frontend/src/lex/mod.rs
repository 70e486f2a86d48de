mod convert;
mod token;

#[cfg(test)]
mod tests;

use log::{info, trace};
use logos::Logos;

use convert::{parse_dec, parse_float, unescape};
use token::FreeToken;
use wisp_common::message::{File, Messages, Span};
use wisp_common::Driver;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Let,
    In,
    If,
    Then,
    Else,
    Fn,

    GroupOpen,
    GroupClose,
    Comma,
    Colon,
    Semicolon,
    Equal,
    MinArrow,
    Wildcard,

    Plus,
    Minus,
    PlusPlus,
    Star,
    Slash,
    EqEq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    AndAnd,
    OrOr,

    Name(String),
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),

    Invalid,
}

impl Token {
    /// The prelude name a binary operator token refers to.
    pub fn operator_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::PlusPlus => "++",
            Self::Star => "*",
            Self::Slash => "/",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            _ => return None,
        })
    }
}

pub fn lex(driver: &mut impl Driver, src: impl AsRef<str>, file: File) -> Vec<(Token, Span)> {
    info!("lexing file with id {file}");
    let mut lexer = Lexer::new(src.as_ref(), file);
    lexer.lex();
    driver.report(lexer.msgs);
    trace!("done lexing {file}");
    lexer.res
}

struct Lexer<'src> {
    src: &'src str,
    lex: logos::SpannedIter<'src, FreeToken<'src>>,
    file: File,
    res: Vec<(Token, Span)>,
    msgs: Messages,
}

impl<'src> Lexer<'src> {
    fn new(src: &'src str, file: File) -> Self {
        Self {
            src,
            lex: FreeToken::lexer(src).spanned(),
            file,
            res: Vec::new(),
            msgs: Messages::new(),
        }
    }

    fn lex(&mut self) {
        while self.dispatch() {}
    }

    fn dispatch(&mut self) -> bool {
        let Some((tok, range)) = self.lex.next() else {
            return false;
        };

        let span = Span::new(self.file, range.start, range.end);
        let tok = match tok {
            FreeToken::Let => Token::Let,
            FreeToken::In => Token::In,
            FreeToken::If => Token::If,
            FreeToken::Then => Token::Then,
            FreeToken::Else => Token::Else,
            FreeToken::Fn => Token::Fn,
            FreeToken::True => Token::Bool(true),
            FreeToken::False => Token::Bool(false),

            FreeToken::LParen => Token::GroupOpen,
            FreeToken::RParen => Token::GroupClose,
            FreeToken::Comma => Token::Comma,
            FreeToken::Colon => Token::Colon,
            FreeToken::Semicolon => Token::Semicolon,
            FreeToken::Equal => Token::Equal,
            FreeToken::MinArrow => Token::MinArrow,
            FreeToken::Underscore => Token::Wildcard,

            FreeToken::Plus => Token::Plus,
            FreeToken::Minus => Token::Minus,
            FreeToken::PlusPlus => Token::PlusPlus,
            FreeToken::Star => Token::Star,
            FreeToken::Slash => Token::Slash,
            FreeToken::EqEq => Token::EqEq,
            FreeToken::NotEq => Token::NotEq,
            FreeToken::Less => Token::Less,
            FreeToken::LessEq => Token::LessEq,
            FreeToken::Greater => Token::Greater,
            FreeToken::GreaterEq => Token::GreaterEq,
            FreeToken::AndAnd => Token::AndAnd,
            FreeToken::OrOr => Token::OrOr,

            FreeToken::Name(name) => Token::Name(name.into()),

            FreeToken::DecNumber(num) => match parse_dec(num) {
                Some(num) => Token::Int(num),
                None => {
                    self.msgs.at(span).lex_number_too_large();
                    Token::Invalid
                }
            },

            FreeToken::DecFloat(num) => match parse_float(num) {
                Some(num) => Token::Float(num),
                None => {
                    self.msgs.at(span).lex_number_too_large();
                    Token::Invalid
                }
            },

            FreeToken::String(text) => match unescape(&text[1..text.len() - 1]) {
                Ok(text) => Token::String(text),
                Err(escape) => {
                    self.msgs.at(span).lex_invalid_escape(escape);
                    Token::Invalid
                }
            },

            FreeToken::UnterminatedString(_) => {
                self.msgs.at(span).lex_unterminated_string();
                Token::Invalid
            }

            FreeToken::Error => {
                self.msgs.at(span).lex_invalid_character(&self.src[range]);
                Token::Invalid
            }
        };

        self.res.push((tok, span));
        true
    }
}
