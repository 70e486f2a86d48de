use crate::lex::Token;

pub trait Matcher {
    fn matches(&self, tok: &Token) -> bool;
}

impl Matcher for Token {
    fn matches(&self, tok: &Token) -> bool {
        match (self, tok) {
            (_, Token::Invalid) => true,
            (Token::Name(..), Token::Name(..))
            | (Token::Int(..), Token::Int(..))
            | (Token::Float(..), Token::Float(..))
            | (Token::String(..), Token::String(..))
            | (Token::Bool(..), Token::Bool(..)) => true,
            (t, u) => t == u,
        }
    }
}

impl Matcher for &[Token] {
    fn matches(&self, tok: &Token) -> bool {
        self.iter().any(|other| other.matches(tok))
    }
}
