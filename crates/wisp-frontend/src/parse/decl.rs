use wisp_common::ast::{Binder, Decls, Name, ValueDef};
use wisp_common::message::Span;

use super::Parser;
use crate::lex::Token;

impl<I> Parser<I>
where
    I: Iterator<Item = (Token, Span)>,
{
    /// ```abnf
    /// program = *decl
    /// ; and nothing else
    /// ```
    pub fn parse_program(&mut self) -> Decls {
        let mut values = Vec::new();

        while !self.is_done() {
            if self.peek(Token::Let) {
                values.push(self.value_def());
                continue;
            }

            let mut opener_span = None;
            while !self.is_done() && !self.peek(Token::Let) {
                self.advance();
                if opener_span.is_none() {
                    opener_span = self.prev.as_ref().map(|(_, span)| *span);
                }
            }

            if let Some(span) = opener_span {
                self.msgs.at(span).parse_expected_declaration();
            }
        }

        Decls { values }
    }

    /// ```abnf
    /// decl = "let" binder "=" expr [";"]
    /// ```
    fn value_def(&mut self) -> ValueDef {
        let start = self.curr_span();
        self.advance();

        let binder = self.binder();
        self.expect(Token::Equal, "=");
        let bind = self.parse_expr();
        self.consume(Token::Semicolon);

        ValueDef {
            span: start + bind.span,
            binder,
            bind,
        }
    }

    /// ```abnf
    /// binder = NAME [":" type]
    /// ```
    pub fn binder(&mut self) -> Binder {
        let (name, span) = self.name();
        let anno = if self.consume(Token::Colon) {
            Some(self.parse_type())
        } else {
            None
        };

        Binder::new(name, span, anno)
    }

    fn name(&mut self) -> (Name, Span) {
        if self.consume(Token::Name(String::new())) {
            match &self.prev {
                Some((Token::Name(name), span)) => (name.clone(), *span),
                _ => (Name::new(), self.prev_span()),
            }
        } else {
            let span = self.curr_span();
            self.msgs.at(span).parse_not_a_name();
            (Name::new(), span)
        }
    }
}
