use wisp_common::ast::{TypeExpr, TypeNode};
use wisp_common::message::Span;
use wisp_common::types::Con;

use super::Parser;
use crate::lex::Token;

impl<I> Parser<I>
where
    I: Iterator<Item = (Token, Span)>,
{
    /// ```abnf
    /// type = base-type ["->" type]
    /// ```
    pub fn parse_type(&mut self) -> TypeExpr {
        if !self.descend() {
            return TypeExpr {
                node: TypeNode::Invalid,
                span: self.curr_span(),
            };
        }

        let ty = self.base_type();
        let ty = if self.consume(Token::MinArrow) {
            let ret = self.parse_type();
            let span = ty.span + ret.span;

            TypeExpr {
                node: TypeNode::Fun(Box::new(ty), Box::new(ret)),
                span,
            }
        } else {
            ty
        };

        self.depth -= 1;
        ty
    }

    /// ```abnf
    /// base-type  = NAME / "_"
    /// base-type =/ "(" ")"
    /// base-type =/ "(" type ")"
    /// base-type =/ "(" type 1*("," type) ")"
    /// ```
    fn base_type(&mut self) -> TypeExpr {
        let Some((tok, span)) = self.curr.clone() else {
            let span = self.curr_span();
            self.msgs.at(span).parse_not_a_type();
            return TypeExpr {
                node: TypeNode::Invalid,
                span,
            };
        };

        self.advance();

        let node = match tok {
            Token::Name(name) => match Con::primitive(&name) {
                Some(con) => TypeNode::Prim(con),
                None => {
                    self.msgs.at(span).parse_unknown_type(name);
                    TypeNode::Invalid
                }
            },

            Token::Wildcard => TypeNode::Wildcard,

            Token::GroupOpen => return self.type_group(span),

            Token::Invalid => TypeNode::Invalid,

            _ => {
                self.msgs.at(span).parse_not_a_type();
                TypeNode::Invalid
            }
        };

        TypeExpr { node, span }
    }

    fn type_group(&mut self, opener: Span) -> TypeExpr {
        if let Some(closer) = self.matches(Token::GroupClose) {
            return TypeExpr {
                node: TypeNode::Prim(Con::Unit),
                span: opener + closer,
            };
        }

        let ty = self.parse_type();
        if !self.peek(Token::Comma) {
            self.close_group(opener);
            return ty;
        }

        let mut elems = vec![ty];
        while self.consume(Token::Comma) {
            elems.push(self.parse_type());
        }

        self.close_group(opener);

        TypeExpr {
            node: TypeNode::Tuple(elems),
            span: opener + self.prev_span(),
        }
    }
}
