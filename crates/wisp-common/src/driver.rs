use crate::message::Messages;

pub trait Driver {
    fn report(&mut self, messages: Messages);

    /// The inference discipline to run after parsing, if any.
    fn inference(&mut self) -> Option<Mode> {
        None
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Synthesize a type for every node without expectations, solving
    /// equality constraints by unification.
    BottomUp,

    /// Push expected types inward where the context supplies one, synthesizing
    /// only where it doesn't.
    TopDown(Propagation),
}

impl Mode {
    pub fn top_down() -> Self {
        Self::TopDown(Propagation::default())
    }
}

/// Which contexts are allowed to push an expected type into a subexpression in
/// [`Mode::TopDown`]. A disabled context synthesizes and then unifies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Propagation {
    /// Parameter types of a known function type flow into call arguments.
    pub arguments: bool,

    /// The expected type of a conditional flows into both of its arms.
    pub branches: bool,

    /// Ascriptions and declaration annotations flow into the annotated
    /// expression.
    pub annotations: bool,
}

impl Default for Propagation {
    fn default() -> Self {
        Self {
            arguments: true,
            branches: true,
            annotations: true,
        }
    }
}
