use codespan_reporting::diagnostic::{Diagnostic, Label};

use super::MessageAdder;

const INVALID_CHARACTER: &str = "EL00";
const UNTERMINATED_STRING: &str = "EL01";
const NUMBER_TOO_LARGE: &str = "EL02";
const INVALID_ESCAPE: &str = "EL03";

impl<'a> MessageAdder<'a> {
    pub fn lex_invalid_character(&mut self, text: impl Into<String>) {
        let labels = vec![Label::primary(self.at.file, self.at)
            .with_message(format!("'{}' is not part of any token", text.into()))];

        self.add(
            Diagnostic::error()
                .with_code(INVALID_CHARACTER)
                .with_message("invalid character")
                .with_labels(labels),
        );
    }

    pub fn lex_unterminated_string(&mut self) {
        let labels = vec![Label::primary(self.at.file, self.at)];
        let notes = vec![String::from("string literals end at a matching '\"'")];

        self.add(
            Diagnostic::error()
                .with_code(UNTERMINATED_STRING)
                .with_message("unterminated string literal")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn lex_number_too_large(&mut self) {
        let labels = vec![Label::primary(self.at.file, self.at)
            .with_message(format!("integers must be at most {}", i64::MAX))];

        self.add(
            Diagnostic::error()
                .with_code(NUMBER_TOO_LARGE)
                .with_message("integer literal is too large")
                .with_labels(labels),
        );
    }

    pub fn lex_invalid_escape(&mut self, escape: char) {
        let labels = vec![Label::primary(self.at.file, self.at)
            .with_message(format!("unknown escape sequence '\\{escape}'"))];

        self.add(
            Diagnostic::error()
                .with_code(INVALID_ESCAPE)
                .with_message("invalid escape in string literal")
                .with_labels(labels),
        );
    }
}
