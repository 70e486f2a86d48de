use log::trace;
use wisp_common::ast::{Binder, Expr, ExprNode};
use wisp_common::types::{Scheme, Type};

use super::env::instantiate;
use super::{Because, Discipline, Env, TypeError, Typer};

impl Typer {
    /// Type the definition of a `let` or a declaration and generalize it. An
    /// annotation on the binder is what the definition is checked against.
    pub fn bind_let<D: Discipline + ?Sized>(
        &mut self,
        discipline: &mut D,
        env: &Env,
        binder: &mut Binder,
        bind: &mut Expr,
    ) -> Result<Scheme, TypeError> {
        let ty = match &binder.anno {
            Some(anno) => {
                let ty = self.lower(anno);
                discipline.check(self, env, bind, Because::Ascription(anno.span), &ty)?;
                ty
            }

            None => discipline.synth(self, env, bind)?,
        };

        let scheme = env.generalize(&self.subst, &ty);
        trace!("generalized {} to {scheme}", binder.name);

        binder.scheme.fill(scheme.clone());
        Ok(scheme)
    }

    /// The type of a lambda parameter: its annotation, or a fresh variable.
    pub fn bind_param(&mut self, param: &mut Binder) -> Type {
        let ty = match &param.anno {
            Some(anno) => self.lower(anno),
            None => self.fresh(),
        };

        param.scheme.fill(Scheme::mono(ty.clone()));
        ty
    }

    /// Synthesize a type for any node kind, recursing through `discipline`.
    pub fn synth_node<D: Discipline + ?Sized>(
        &mut self,
        discipline: &mut D,
        env: &Env,
        ex: &mut Expr,
    ) -> Result<Type, TypeError> {
        let ty = match &mut ex.node {
            ExprNode::Lit(lit) => lit.ty(),

            ExprNode::Name(name) => match env.lookup(name) {
                Some(scheme) => instantiate(scheme, &mut self.vars),
                None => {
                    return Err(TypeError::UnboundIdentifier {
                        name: name.clone(),
                        span: ex.span,
                    })
                }
            },

            ExprNode::Lam(param, body) => {
                let t = self.bind_param(param);
                let inner = env.extend(param.name.clone(), Scheme::mono(t.clone()));
                let u = discipline.synth(self, &inner, body)?;
                Type::fun(t, u)
            }

            ExprNode::App(fun, arg) => {
                let t = discipline.synth(self, env, fun)?;
                let u = discipline.synth(self, env, arg)?;
                let r = self.fresh();
                self.unify(&Because::Argument, ex.span, &t, &Type::fun(u, r.clone()))?;
                r
            }

            ExprNode::Let(binder, bind, body) => {
                let scheme = self.bind_let(discipline, env, binder, bind)?;
                let inner = env.extend(binder.name.clone(), scheme);
                discipline.synth(self, &inner, body)?
            }

            ExprNode::If(cond, then, elze) => {
                let c = discipline.synth(self, env, cond)?;
                self.unify(&Because::Condition, cond.span, &Type::bool(), &c)?;

                let t = discipline.synth(self, env, then)?;
                let e = discipline.synth(self, env, elze)?;
                self.unify(&Because::Branch(ex.span), ex.span, &t, &e)?;
                t
            }

            ExprNode::Anno(inner, anno) => {
                let t = self.lower(anno);
                discipline.check(self, env, inner, Because::Ascription(anno.span), &t)?;
                t
            }

            ExprNode::Tuple(elems) => {
                let mut tys = Vec::with_capacity(elems.len());
                for elem in elems.iter_mut() {
                    tys.push(discipline.synth(self, env, elem)?);
                }

                Type::tuple(tys)
            }

            ExprNode::Invalid => self.fresh(),
        };

        self.annotate(ex, &ty);
        Ok(ty)
    }
}
