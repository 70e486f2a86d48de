use wisp_common::ast::{Expr, ExprNode, Lit};
use wisp_common::message::Span;

use super::Parser;
use crate::lex::Token;

impl<I> Parser<I>
where
    I: Iterator<Item = (Token, Span)>,
{
    /// ```abnf
    /// expr = let-expr / if-expr / fn-expr / or-expr
    /// ```
    pub fn parse_expr(&mut self) -> Expr {
        if !self.descend() {
            return Expr::new(ExprNode::Invalid, self.curr_span());
        }

        let expr = if let Some(span) = self.matches(Token::Let) {
            self.let_expr(span)
        } else if let Some(span) = self.matches(Token::If) {
            self.if_expr(span)
        } else if let Some(span) = self.matches(Token::Fn) {
            self.fn_expr(span)
        } else {
            self.or_expr()
        };

        self.depth -= 1;
        expr
    }

    /// ```abnf
    /// let-expr = "let" binder "=" expr "in" expr
    /// ```
    fn let_expr(&mut self, opener: Span) -> Expr {
        let binder = self.binder();
        self.expect(Token::Equal, "=");
        let bind = self.parse_expr();
        self.expect(Token::In, "in");
        let body = self.parse_expr();

        let span = opener + body.span;
        Expr::new(ExprNode::Let(binder, Box::new(bind), Box::new(body)), span)
    }

    /// ```abnf
    /// if-expr = "if" expr "then" expr "else" expr
    /// ```
    fn if_expr(&mut self, opener: Span) -> Expr {
        let cond = self.parse_expr();
        self.expect(Token::Then, "then");
        let then = self.parse_expr();
        self.expect(Token::Else, "else");
        let elze = self.parse_expr();

        let span = opener + elze.span;
        Expr::new(
            ExprNode::If(Box::new(cond), Box::new(then), Box::new(elze)),
            span,
        )
    }

    /// ```abnf
    /// fn-expr = "fn" "(" binder *("," binder) ")" "->" expr
    /// ; 'fn(x, y) -> e' is 'fn(x) -> fn(y) -> e'
    /// ```
    fn fn_expr(&mut self, opener: Span) -> Expr {
        self.expect(Token::GroupOpen, "(");

        let depth = self.depth;
        let mut params = vec![self.binder()];
        while self.consume(Token::Comma) && self.descend() {
            params.push(self.binder());
        }

        self.expect(Token::GroupClose, ")");
        self.expect(Token::MinArrow, "->");

        let mut body = self.parse_expr();
        while let Some(param) = params.pop() {
            let start = if params.is_empty() { opener } else { param.span };
            let span = start + body.span;
            body = Expr::new(ExprNode::Lam(param, Box::new(body)), span);
        }

        self.depth = depth;
        body
    }

    /// ```abnf
    /// or-expr = and-expr *("||" and-expr)
    /// ```
    fn or_expr(&mut self) -> Expr {
        self.binary(&[Token::OrOr], Self::and_expr)
    }

    /// ```abnf
    /// and-expr = cmp-expr *("&&" cmp-expr)
    /// ```
    fn and_expr(&mut self) -> Expr {
        self.binary(&[Token::AndAnd], Self::cmp_expr)
    }

    /// ```abnf
    /// cmp-expr = add-expr [("==" / "!=" / "<" / "<=" / ">" / ">=") add-expr]
    /// ```
    fn cmp_expr(&mut self) -> Expr {
        const OPS: &[Token] = &[
            Token::EqEq,
            Token::NotEq,
            Token::Less,
            Token::LessEq,
            Token::Greater,
            Token::GreaterEq,
        ];

        let expr = self.add_expr();
        if self.consume(OPS) {
            let op = self.operator();
            let other = self.add_expr();
            Self::apply_operator(op, expr, other)
        } else {
            expr
        }
    }

    /// ```abnf
    /// add-expr = mul-expr *(("+" / "-" / "++") mul-expr)
    /// ```
    fn add_expr(&mut self) -> Expr {
        self.binary(&[Token::Plus, Token::Minus, Token::PlusPlus], Self::mul_expr)
    }

    /// ```abnf
    /// mul-expr = call-expr *(("*" / "/") call-expr)
    /// ```
    fn mul_expr(&mut self) -> Expr {
        self.binary(&[Token::Star, Token::Slash], Self::call_expr)
    }

    /// A left-associative chain of the operators in `ops`.
    fn binary(&mut self, ops: &[Token], operand: fn(&mut Self) -> Expr) -> Expr {
        let depth = self.depth;
        let mut expr = operand(self);

        while self.consume(ops) && self.descend() {
            let op = self.operator();
            let other = operand(self);
            expr = Self::apply_operator(op, expr, other);
        }

        self.depth = depth;
        expr
    }

    /// The operator that was just consumed, as a reference to its prelude name.
    fn operator(&self) -> Expr {
        let name = self
            .prev
            .as_ref()
            .and_then(|(tok, _)| tok.operator_name())
            .unwrap_or_default();

        Expr::new(ExprNode::Name(name.into()), self.prev_span())
    }

    /// `a op b` is `(op)(a)(b)`.
    fn apply_operator(op: Expr, lhs: Expr, rhs: Expr) -> Expr {
        let partial_span = lhs.span + op.span;
        let span = lhs.span + rhs.span;

        let partial = Expr::new(ExprNode::App(Box::new(op), Box::new(lhs)), partial_span);
        Expr::new(ExprNode::App(Box::new(partial), Box::new(rhs)), span)
    }

    /// ```abnf
    /// call-expr = base-expr *("(" [expr *("," expr)] ")")
    /// ; 'f(a, b)' is 'f(a)(b)' and 'f()' is 'f(())'
    /// ```
    fn call_expr(&mut self) -> Expr {
        let depth = self.depth;
        let mut expr = self.parse_base_expr();

        while let Some(opener) = self.matches(Token::GroupOpen) {
            if !self.descend() {
                break;
            }

            let args = if let Some(closer) = self.matches(Token::GroupClose) {
                vec![Expr::new(ExprNode::Lit(Lit::Unit), opener + closer)]
            } else {
                let mut args = vec![self.parse_expr()];
                while self.consume(Token::Comma) && self.descend() {
                    args.push(self.parse_expr());
                }

                if !self.consume(Token::GroupClose) {
                    self.msgs.at(opener).parse_unclosed_group();
                }

                args
            };

            let close_span = self.prev_span();
            for arg in args {
                let span = expr.span + arg.span + close_span;
                expr = Expr::new(ExprNode::App(Box::new(expr), Box::new(arg)), span);
            }
        }

        self.depth = depth;
        expr
    }

    /// ```abnf
    /// base-expr  = INT / FLOAT / STRING / "true" / "false" / NAME
    /// base-expr =/ "(" ")"
    /// base-expr =/ "(" expr [":" type] ")"
    /// base-expr =/ "(" expr 1*("," expr) ")"
    /// ```
    pub fn parse_base_expr(&mut self) -> Expr {
        let Some((tok, span)) = self.curr.clone() else {
            let span = self.curr_span();
            self.msgs.at(span).parse_expected_base_expr();
            return Expr::new(ExprNode::Invalid, span);
        };

        self.advance();

        let node = match tok {
            Token::Int(value) => ExprNode::Lit(Lit::Int(value)),
            Token::Float(value) => ExprNode::Lit(Lit::Float(value)),
            Token::String(value) => ExprNode::Lit(Lit::String(value)),
            Token::Bool(value) => ExprNode::Lit(Lit::Bool(value)),
            Token::Name(name) => ExprNode::Name(name),

            Token::GroupOpen => return self.group(span),

            Token::Invalid => ExprNode::Invalid,

            _ => {
                self.msgs.at(span).parse_expected_base_expr();
                ExprNode::Invalid
            }
        };

        Expr::new(node, span)
    }

    fn group(&mut self, opener: Span) -> Expr {
        if let Some(closer) = self.matches(Token::GroupClose) {
            return Expr::new(ExprNode::Lit(Lit::Unit), opener + closer);
        }

        let expr = self.parse_expr();

        let node = if self.consume(Token::Colon) {
            let anno = self.parse_type();
            ExprNode::Anno(Box::new(expr), anno)
        } else if self.peek(Token::Comma) {
            let mut elems = vec![expr];
            while self.consume(Token::Comma) {
                elems.push(self.parse_expr());
            }

            ExprNode::Tuple(elems)
        } else {
            self.close_group(opener);
            return expr;
        };

        self.close_group(opener);

        let span = opener + self.prev_span();
        Expr::new(node, span)
    }
}
