use codespan_reporting::diagnostic::{Diagnostic, Label};

use super::{MessageAdder, Span};

const INCOMPATIBLE_TYPES: &str = "ET00";
const UNBOUND_NAME: &str = "ET01";
const RECURSIVE: &str = "ET02";
const BRANCH_MISMATCH: &str = "ET03";
const ASCRIPTION_MISMATCH: &str = "ET04";
const AMBIGUOUS: &str = "ET05";

impl<'a> MessageAdder<'a> {
    pub fn tyck_incompatible(&mut self, expected: impl Into<String>, actual: impl Into<String>) {
        let labels = vec![Label::primary(self.at.file, self.at).with_message(format!(
            "expected '{}', got '{}'",
            expected.into(),
            actual.into()
        ))];

        self.add(
            Diagnostic::error()
                .with_code(INCOMPATIBLE_TYPES)
                .with_message("incompatible types")
                .with_labels(labels),
        );
    }

    pub fn tyck_unbound_name(&mut self, name: impl Into<String>) {
        let labels = vec![Label::primary(self.at.file, self.at)
            .with_message(format!("'{}' is not defined here", name.into()))];

        self.add(
            Diagnostic::error()
                .with_code(UNBOUND_NAME)
                .with_message("unbound name")
                .with_labels(labels),
        );
    }

    pub fn tyck_recursive_inference(&mut self, var: impl Into<String>, ty: impl Into<String>) {
        let labels = vec![Label::primary(self.at.file, self.at)];
        let notes = vec![format!(
            "the variable '{}' occurs inside the type '{}', so the two cannot be unified",
            var.into(),
            ty.into()
        )];

        self.add(
            Diagnostic::error()
                .with_code(RECURSIVE)
                .with_message("attempted to infer a recursive type")
                .with_labels(labels)
                .with_notes(notes),
        )
    }

    pub fn tyck_branch_mismatch(&mut self, then: impl Into<String>, other: impl Into<String>) {
        let labels = vec![Label::primary(self.at.file, self.at).with_message(format!(
            "one branch has type '{}', the other '{}'",
            then.into(),
            other.into()
        ))];

        self.add(
            Diagnostic::error()
                .with_code(BRANCH_MISMATCH)
                .with_message("conditional branches have different types")
                .with_labels(labels),
        );
    }

    pub fn tyck_ascription_mismatch(
        &mut self,
        anno: Span,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) {
        let labels = vec![
            Label::primary(self.at.file, self.at)
                .with_message(format!("this has type '{}'", actual.into())),
            Label::secondary(anno.file, anno)
                .with_message(format!("but is annotated as '{}'", expected.into())),
        ];

        self.add(
            Diagnostic::error()
                .with_code(ASCRIPTION_MISMATCH)
                .with_message("expression does not match its annotation")
                .with_labels(labels),
        );
    }

    pub fn tyck_ambiguous(&mut self, ty: impl Into<String>) {
        let labels = vec![Label::primary(self.at.file, self.at).with_message(format!(
            "this expression has type '{}', which is never fully determined",
            ty.into()
        ))];

        self.add(
            Diagnostic::error()
                .with_code(AMBIGUOUS)
                .with_message("cannot infer the type of an ambiguous expression")
                .with_labels(labels),
        );
    }
}
