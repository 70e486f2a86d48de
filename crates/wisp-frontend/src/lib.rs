pub mod lex;
pub mod parse;
pub mod tyck;

use wisp_common::ast::Decls;
use wisp_common::message::{File, Messages};
use wisp_common::{Driver, Mode};

/// Lex, parse and (if the driver asks for it) infer types for one source.
/// Returns `None` if any phase reported an error; the diagnostics have been
/// passed to the driver by then.
pub fn check_source(driver: &mut impl Driver, source: impl AsRef<str>, file: File) -> Option<Decls> {
    let mut tally = Tally::new(driver);

    let tokens = lex::lex(&mut tally, source, file);
    let mut decls = parse::parse(&mut tally, tokens, file);

    if tally.errors {
        return None;
    }

    if let Some(mode) = tally.inference() {
        if !tyck::typeck(&mut tally, &mut decls, mode) {
            return None;
        }
    }

    Some(decls)
}

/// Passes messages on to another driver, remembering whether any of them were
/// errors.
struct Tally<'a, D> {
    inner: &'a mut D,
    errors: bool,
}

impl<'a, D: Driver> Tally<'a, D> {
    fn new(inner: &'a mut D) -> Self {
        Self {
            inner,
            errors: false,
        }
    }
}

impl<D: Driver> Driver for Tally<'_, D> {
    fn report(&mut self, messages: Messages) {
        self.errors |= messages.has_errors();
        self.inner.report(messages);
    }

    fn inference(&mut self) -> Option<Mode> {
        self.inner.inference()
    }
}
