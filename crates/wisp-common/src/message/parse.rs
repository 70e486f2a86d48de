use codespan_reporting::diagnostic::{Diagnostic, Label};

use super::MessageAdder;

const BASE_EXPR: &str = "EP00";
const NOT_A_TYPE: &str = "EP01";
const NOT_A_NAME: &str = "EP02";
const UNCLOSED_GROUP: &str = "EP03";
const EXPECTED_TOKEN: &str = "EP04";
const EXPECTED_DECLARATION: &str = "EP05";
const UNKNOWN_TYPE: &str = "EP06";
const TOO_DEEP: &str = "EP07";

impl<'a> MessageAdder<'a> {
    pub fn parse_expected_base_expr(&mut self) {
        let labels = vec![Label::primary(self.at.file, self.at)
            .with_message("expected a literal, a name, or a parenthesized expression")];

        self.add(
            Diagnostic::error()
                .with_code(BASE_EXPR)
                .with_message("expected an expression")
                .with_labels(labels),
        );
    }

    pub fn parse_not_a_type(&mut self) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(NOT_A_TYPE)
                .with_message("expected a type")
                .with_labels(labels),
        );
    }

    pub fn parse_not_a_name(&mut self) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(NOT_A_NAME)
                .with_message("expected a name")
                .with_labels(labels),
        );
    }

    pub fn parse_unclosed_group(&mut self) {
        let labels = vec![Label::primary(self.at.file, self.at)
            .with_message("this parenthesis is never closed")];

        self.add(
            Diagnostic::error()
                .with_code(UNCLOSED_GROUP)
                .with_message("unclosed group")
                .with_labels(labels),
        );
    }

    pub fn parse_expected_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        let labels = vec![
            Label::primary(self.at.file, self.at).with_message(format!("expected '{token}' here"))
        ];

        self.add(
            Diagnostic::error()
                .with_code(EXPECTED_TOKEN)
                .with_message(format!("expected '{token}'"))
                .with_labels(labels),
        );
    }

    pub fn parse_expected_declaration(&mut self) {
        let labels = vec![Label::primary(self.at.file, self.at)];
        let notes = vec![String::from("top-level declarations start with 'let'")];

        self.add(
            Diagnostic::error()
                .with_code(EXPECTED_DECLARATION)
                .with_message("expected a declaration")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn parse_unknown_type(&mut self, name: impl Into<String>) {
        let labels = vec![Label::primary(self.at.file, self.at)
            .with_message(format!("'{}' does not name a type", name.into()))];
        let notes = vec![String::from(
            "the types are 'Int', 'Float', 'Bool', 'String', 'Unit', and '_'",
        )];

        self.add(
            Diagnostic::error()
                .with_code(UNKNOWN_TYPE)
                .with_message("unknown type")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn parse_too_deep(&mut self, limit: usize) {
        let labels = vec![Label::primary(self.at.file, self.at)
            .with_message("the parser gave up here")];
        let notes = vec![format!(
            "expressions and types may nest at most {limit} levels deep"
        )];

        self.add(
            Diagnostic::error()
                .with_code(TOO_DEEP)
                .with_message("expression nested too deeply")
                .with_labels(labels)
                .with_notes(notes),
        );
    }
}
