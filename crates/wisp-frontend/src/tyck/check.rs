use wisp_common::ast::{Expr, ExprNode};
use wisp_common::types::{Scheme, Type};
use wisp_common::Propagation;

use super::{synth_then_unify, Because, Discipline, Env, TypeError, Typer};

/// Checks nodes against the type their context expects whenever there is one,
/// and synthesizes otherwise.
#[derive(Debug)]
pub struct Bidirectional {
    propagation: Propagation,
}

impl Bidirectional {
    pub fn new(propagation: Propagation) -> Self {
        Self { propagation }
    }

    /// Whether an expectation arising for this reason is pushed into the
    /// expression, rather than compared with its synthesized type.
    fn propagates(&self, because: &Because) -> bool {
        match because {
            Because::Ascription(_) => self.propagation.annotations,
            Because::Branch(_) => self.propagation.branches,
            Because::Argument => self.propagation.arguments,
            Because::Condition => true,
        }
    }
}

impl Discipline for Bidirectional {
    fn synth(&mut self, typer: &mut Typer, env: &Env, ex: &mut Expr) -> Result<Type, TypeError> {
        let ty = match &mut ex.node {
            ExprNode::App(fun, arg) => {
                let t = self.synth(typer, env, fun)?;
                let t = typer.resolve(&t);

                match t.as_fun() {
                    Some((param, ret)) if self.propagation.arguments => {
                        self.check(typer, env, arg, Because::Argument, param)?;
                        ret.clone()
                    }

                    _ => {
                        let u = self.synth(typer, env, arg)?;
                        let r = typer.fresh();
                        typer.unify(&Because::Argument, ex.span, &t, &Type::fun(u, r.clone()))?;
                        r
                    }
                }
            }

            ExprNode::If(cond, then, elze) => {
                self.check(typer, env, cond, Because::Condition, &Type::bool())?;
                let t = self.synth(typer, env, then)?;
                self.check(typer, env, elze, Because::Branch(ex.span), &t)?;
                t
            }

            _ => return typer.synth_node(self, env, ex),
        };

        typer.annotate(ex, &ty);
        Ok(ty)
    }

    fn check(
        &mut self,
        typer: &mut Typer,
        env: &Env,
        ex: &mut Expr,
        because: Because,
        expected: &Type,
    ) -> Result<(), TypeError> {
        if !self.propagates(&because) {
            return synth_then_unify(self, typer, env, ex, because, expected);
        }

        let expected = typer.resolve(expected);

        match &mut ex.node {
            ExprNode::Lam(param, body) => {
                let Some((t, u)) = expected.as_fun() else {
                    return synth_then_unify(self, typer, env, ex, because, &expected);
                };

                let t = match &param.anno {
                    Some(anno) => {
                        let a = typer.lower(anno);
                        typer.unify(&Because::Ascription(anno.span), param.span, &a, t)?;
                        a
                    }

                    None => t.clone(),
                };

                param.scheme.fill(Scheme::mono(t.clone()));
                let inner = env.extend(param.name.clone(), Scheme::mono(t));
                self.check(typer, &inner, body, because, u)?;
            }

            ExprNode::If(cond, then, elze) if self.propagation.branches => {
                self.check(typer, env, cond, Because::Condition, &Type::bool())?;
                self.check(typer, env, then, because, &expected)?;
                self.check(typer, env, elze, Because::Branch(ex.span), &expected)?;
            }

            ExprNode::Let(binder, bind, body) => {
                let scheme = typer.bind_let(self, env, binder, bind)?;
                let inner = env.extend(binder.name.clone(), scheme);
                self.check(typer, &inner, body, because, &expected)?;
            }

            ExprNode::Tuple(elems) => {
                let Some(tys) = expected.as_tuple().filter(|tys| tys.len() == elems.len()) else {
                    return synth_then_unify(self, typer, env, ex, because, &expected);
                };

                for (elem, ty) in elems.iter_mut().zip(tys) {
                    self.check(typer, env, elem, because.clone(), ty)?;
                }
            }

            _ => return synth_then_unify(self, typer, env, ex, because, &expected),
        }

        typer.annotate(ex, &expected);
        Ok(())
    }
}
