mod decl;
mod expr;
mod matcher;
mod types;

#[cfg(test)]
mod tests;

use log::{info, trace};
use wisp_common::ast::Decls;
use wisp_common::message::{File, Messages, Span};
use wisp_common::Driver;

use crate::lex::Token;
use matcher::Matcher;

/// How deep the tree may get before the parser abandons the input.
const MAX_DEPTH: usize = 128;

pub fn parse(driver: &mut impl Driver, tokens: Vec<(Token, Span)>, file: File) -> Decls {
    info!("parsing file with id {file}");

    let mut parser = Parser::new(tokens, file);
    let decls = parser.parse_program();

    if let Some(count) = parser.abandoned {
        parser.msgs.msgs.truncate(count);
    }

    driver.report(parser.msgs);

    trace!("done parsing {file}");

    decls
}

#[derive(Debug)]
struct Parser<I> {
    tokens: I,
    curr: Option<(Token, Span)>,
    prev: Option<(Token, Span)>,
    msgs: Messages,
    default_span: Span,

    depth: usize,
    abandoned: Option<usize>,
}

impl<I> Parser<I>
where
    I: Iterator<Item = (Token, Span)>,
{
    pub fn new<In>(tokens: In, file: File) -> Self
    where
        In: IntoIterator<Item = (Token, Span), IntoIter = I>,
    {
        let mut parser = Self {
            tokens: tokens.into_iter(),

            curr: None,
            prev: None,

            msgs: Messages::new(),
            default_span: Span::new(file, 0, 0),

            depth: 0,
            abandoned: None,
        };

        parser.advance();
        parser
    }

    fn is_done(&self) -> bool {
        self.curr.is_none()
    }

    fn advance(&mut self) {
        self.prev = self.curr.take();
        if let Some(curr) = self.tokens.next() {
            self.curr = Some(curr);
        }
    }

    fn peek(&self, matcher: impl Matcher) -> bool {
        self.curr
            .as_ref()
            .map(|(tok, _)| matcher.matches(tok))
            .unwrap_or(false)
    }

    fn consume(&mut self, matcher: impl Matcher) -> bool {
        if self.peek(matcher) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn matches(&mut self, matcher: impl Matcher) -> Option<Span> {
        if self.peek(matcher) {
            self.advance();
            self.prev.as_ref().map(|(_, span)| *span)
        } else {
            None
        }
    }

    /// Consume the given token, or report that `what` was expected.
    fn expect(&mut self, tok: Token, what: &str) -> bool {
        if self.consume(tok) {
            true
        } else {
            let span = self.curr_span();
            self.msgs.at(span).parse_expected_token(what);
            false
        }
    }

    fn close_group(&mut self, opener: Span) {
        if !self.consume(Token::GroupClose) {
            self.msgs.at(opener).parse_unclosed_group();
        }
    }

    /// Go one level deeper into the tree. Past [`MAX_DEPTH`], the rest of the
    /// input is skipped and `false` returned; only messages up to that point
    /// are kept.
    fn descend(&mut self) -> bool {
        if self.depth < MAX_DEPTH {
            self.depth += 1;
            return true;
        }

        if self.abandoned.is_none() {
            let span = self.curr_span();
            self.msgs.at(span).parse_too_deep(MAX_DEPTH);
            self.abandoned = Some(self.msgs.len());
        }

        while !self.is_done() {
            self.advance();
        }

        false
    }

    fn prev_span(&self) -> Span {
        self.prev
            .as_ref()
            .map(|(_, span)| *span)
            .unwrap_or(self.default_span)
    }

    /// The span of the current token, or an empty span just past the previous
    /// one at the end of input.
    fn curr_span(&self) -> Span {
        match (&self.curr, &self.prev) {
            (Some((_, span)), _) => *span,
            (None, Some((_, span))) => Span::new(span.file, span.end, span.end),
            (None, None) => self.default_span,
        }
    }
}
