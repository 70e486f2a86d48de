use wisp_common::ast::{Binder, Decls, Expr, ExprNode};
use wisp_common::message::Span;
use wisp_common::types::{Subst, Type, UniVar};

use super::TypeError;

/// Rewrite every annotation in the tree with its fully resolved type.
///
/// A type may only mention variables quantified by the scheme of a binder
/// whose definition it sits in. The first node in each declaration that breaks
/// this is reported as ambiguous.
pub fn assemble(subst: &Subst, decls: &mut Decls) -> Vec<TypeError> {
    let mut errors = Vec::new();

    for def in decls.values.iter_mut() {
        let mut assembler = Assembler {
            subst,
            bound: Vec::new(),
            ambiguous: None,
        };

        assembler.binder(&mut def.binder);
        assembler.expr(&mut def.bind);

        errors.extend(assembler.ambiguous);
    }

    errors
}

struct Assembler<'a> {
    subst: &'a Subst,
    bound: Vec<UniVar>,
    ambiguous: Option<TypeError>,
}

impl Assembler<'_> {
    /// Resolve the scheme of a binder and bring its quantified variables into
    /// scope. Returns how many were added.
    fn binder(&mut self, binder: &mut Binder) -> usize {
        let subst = self.subst;
        binder.scheme.resolve(|scheme| subst.apply_scheme(&scheme));

        let vars = binder
            .scheme
            .get()
            .map(|scheme| scheme.vars.clone())
            .unwrap_or_default();

        let count = vars.len();
        self.bound.extend(vars);
        count
    }

    fn unbind(&mut self, count: usize) {
        self.bound.truncate(self.bound.len() - count);
    }

    fn expr(&mut self, ex: &mut Expr) {
        let subst = self.subst;
        ex.ty.resolve(|ty| subst.apply(&ty));

        if let Some(ty) = ex.ty.get() {
            self.check(ty, ex.span);
        }

        match &mut ex.node {
            ExprNode::Lit(_) | ExprNode::Name(_) | ExprNode::Invalid => {}

            ExprNode::Lam(param, body) => {
                let count = self.binder(param);
                self.expr(body);
                self.unbind(count);
            }

            ExprNode::App(fun, arg) => {
                self.expr(fun);
                self.expr(arg);
            }

            ExprNode::Let(binder, bind, body) => {
                let count = self.binder(binder);
                self.expr(bind);
                self.unbind(count);
                self.expr(body);
            }

            ExprNode::If(cond, then, elze) => {
                self.expr(cond);
                self.expr(then);
                self.expr(elze);
            }

            ExprNode::Anno(inner, _) => self.expr(inner),

            ExprNode::Tuple(elems) => {
                for elem in elems.iter_mut() {
                    self.expr(elem);
                }
            }
        }
    }

    fn check(&mut self, ty: &Type, span: Span) {
        if self.ambiguous.is_some() {
            return;
        }

        if ty.free_vars().iter().any(|var| !self.bound.contains(var)) {
            self.ambiguous = Some(TypeError::AmbiguousType {
                ty: ty.clone(),
                span,
            });
        }
    }
}
