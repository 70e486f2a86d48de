use wisp_common::ast::Expr;
use wisp_common::types::Type;

use super::{Discipline, Env, TypeError, Typer};

/// Algorithm W: every node synthesizes a type without looking at what its
/// context expects, and every constraint is solved by unification.
#[derive(Debug, Default)]
pub struct BottomUp;

impl Discipline for BottomUp {
    fn synth(&mut self, typer: &mut Typer, env: &Env, ex: &mut Expr) -> Result<Type, TypeError> {
        typer.synth_node(self, env, ex)
    }
}
