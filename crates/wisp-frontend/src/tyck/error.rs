use thiserror::Error;
use wisp_common::ast::Name;
use wisp_common::message::{Messages, Span};
use wisp_common::types::{pretty_type, PrettyMap, Type, UniVar};

use super::Because;

/// A failure to make two types equal. Both types are fully substituted as of
/// the moment unification failed.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UnifyError {
    #[error("cannot unify '{expected}' with '{found}'")]
    Mismatch { expected: Type, found: Type },

    #[error("'{}' occurs in '{ty}'", pretty_var(.var))]
    Occurs { var: UniVar, ty: Type },
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TypeError {
    #[error("unbound identifier '{name}'")]
    UnboundIdentifier { name: Name, span: Span },

    #[error("type mismatch: expected '{expected}', found '{found}'")]
    TypeMismatch {
        expected: Type,
        found: Type,
        span: Span,
    },

    #[error("recursive type: '{}' occurs in '{ty}'", pretty_var(.var))]
    OccursCheck { var: UniVar, ty: Type, span: Span },

    #[error("conditional branches differ: '{then}' and '{other}'")]
    BranchTypeMismatch { then: Type, other: Type, span: Span },

    #[error("annotated as '{expected}', but found '{found}'")]
    AscriptionMismatch {
        expected: Type,
        found: Type,
        span: Span,
        anno: Span,
    },

    #[error("ambiguous type '{ty}'")]
    AmbiguousType { ty: Type, span: Span },
}

impl TypeError {
    /// Attribute a unification failure at `span` to the reason the types were
    /// unified in the first place.
    pub fn from_unify(err: UnifyError, because: &Because, span: Span) -> Self {
        match (err, because) {
            (UnifyError::Occurs { var, ty }, _) => Self::OccursCheck { var, ty, span },

            (UnifyError::Mismatch { expected, found }, Because::Ascription(anno)) => {
                Self::AscriptionMismatch {
                    expected,
                    found,
                    span,
                    anno: *anno,
                }
            }

            (UnifyError::Mismatch { expected, found }, Because::Branch(at)) => {
                Self::BranchTypeMismatch {
                    then: expected,
                    other: found,
                    span: *at,
                }
            }

            (UnifyError::Mismatch { expected, found }, Because::Condition | Because::Argument) => {
                Self::TypeMismatch {
                    expected,
                    found,
                    span,
                }
            }
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UnboundIdentifier { span, .. }
            | Self::TypeMismatch { span, .. }
            | Self::OccursCheck { span, .. }
            | Self::BranchTypeMismatch { span, .. }
            | Self::AscriptionMismatch { span, .. }
            | Self::AmbiguousType { span, .. } => *span,
        }
    }

    /// Add a diagnostic for this error. Types mentioned together share their
    /// variable names.
    pub fn report(&self, messages: &mut Messages) {
        let mut names = PrettyMap::new();
        let mut pretty = |ty: &Type| pretty_type(&mut names, ty);

        match self {
            Self::UnboundIdentifier { name, span } => messages.at(*span).tyck_unbound_name(name),

            Self::TypeMismatch {
                expected,
                found,
                span,
            } => {
                let expected = pretty(expected);
                let found = pretty(found);
                messages.at(*span).tyck_incompatible(expected, found);
            }

            Self::OccursCheck { var, ty, span } => {
                let var = pretty(&Type::Var(*var));
                let ty = pretty(ty);
                messages.at(*span).tyck_recursive_inference(var, ty);
            }

            Self::BranchTypeMismatch { then, other, span } => {
                let then = pretty(then);
                let other = pretty(other);
                messages.at(*span).tyck_branch_mismatch(then, other);
            }

            Self::AscriptionMismatch {
                expected,
                found,
                span,
                anno,
            } => {
                let expected = pretty(expected);
                let found = pretty(found);
                messages
                    .at(*span)
                    .tyck_ascription_mismatch(*anno, expected, found);
            }

            Self::AmbiguousType { ty, span } => {
                let ty = pretty(ty);
                messages.at(*span).tyck_ambiguous(ty);
            }
        }
    }
}

fn pretty_var(var: &UniVar) -> String {
    Type::Var(*var).to_string()
}
