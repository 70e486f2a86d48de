//! Type inference.
//!
//! Both disciplines walk the tree once, filling every annotation slot as they
//! go and threading a single substitution through the walk. The bottom-up
//! discipline synthesizes a type for every node and relates them purely by
//! unification; the bidirectional one pushes expected types inward wherever the
//! context supplies one and falls back to synthesis elsewhere. Once the walk is
//! done, the assembler rewrites every slot with its fully resolved type.

mod assemble;
mod bind;
mod check;
mod env;
mod error;
mod infer;
mod prelude;
mod unify;

#[cfg(test)]
mod tests;

pub use env::{instantiate, Env};
pub use error::{TypeError, UnifyError};
pub use unify::unify;

use log::{debug, info, trace};
use wisp_common::ast::{Decls, Expr, TypeExpr, TypeNode};
use wisp_common::message::{Messages, Span};
use wisp_common::types::{Subst, Type, VarSupply};
use wisp_common::{Driver, Mode};

use check::Bidirectional;
use infer::BottomUp;

/// Infer types for every declaration, bottom-up or bidirectionally. On success
/// every annotation slot in the tree holds a resolved type.
pub fn infer_types(decls: &mut Decls, mode_is_top_down: bool) -> Result<(), Vec<TypeError>> {
    let mode = if mode_is_top_down {
        Mode::top_down()
    } else {
        Mode::BottomUp
    };

    infer_types_with(decls, mode)
}

pub fn infer_types_with(decls: &mut Decls, mode: Mode) -> Result<(), Vec<TypeError>> {
    info!("beginning type inference");

    decls.clear_types();

    let mut typer = Typer::new();
    let env = prelude::prelude(&mut typer.vars);

    let res = match mode {
        Mode::BottomUp => typer.infer_decls(&mut BottomUp, env, decls),
        Mode::TopDown(propagation) => {
            typer.infer_decls(&mut Bidirectional::new(propagation), env, decls)
        }
    };

    if let Err(err) = res {
        debug!("inference failed: {err}");
        return Err(vec![err]);
    }

    info!(
        "assembling types with {} solved variables out of {}",
        typer.subst.len(),
        typer.vars.count()
    );

    let errors = assemble::assemble(&typer.subst, decls);

    trace!("done type inference");

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Run inference and report any errors to the driver. Returns `true` if the
/// tree was fully typed.
pub fn typeck(driver: &mut impl Driver, decls: &mut Decls, mode: Mode) -> bool {
    match infer_types_with(decls, mode) {
        Ok(()) => true,
        Err(errors) => {
            let mut messages = Messages::new();
            for error in errors.iter() {
                error.report(&mut messages);
            }

            driver.report(messages);
            false
        }
    }
}

/// Why two types are being unified. Decides which error a mismatch turns into.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Because {
    /// An annotation, with its span, constrains the type.
    Ascription(Span),

    /// The arms of the conditional at this span must agree.
    Branch(Span),

    /// The condition of a conditional must be a boolean.
    Condition,

    /// An argument must fit the parameter of the function it is given to.
    Argument,
}

/// A way of walking the tree. Each discipline gives every node kind a
/// synthesis rule, and may give some of them a checking rule.
trait Discipline {
    /// Produce a type for an expression with no expectations.
    fn synth(&mut self, typer: &mut Typer, env: &Env, ex: &mut Expr) -> Result<Type, TypeError>;

    /// Make an expression conform to an expected type.
    fn check(
        &mut self,
        typer: &mut Typer,
        env: &Env,
        ex: &mut Expr,
        because: Because,
        expected: &Type,
    ) -> Result<(), TypeError> {
        synth_then_unify(self, typer, env, ex, because, expected)
    }
}

/// The checking rule every node kind has: synthesize, then unify with what was
/// expected.
fn synth_then_unify<D: Discipline + ?Sized>(
    discipline: &mut D,
    typer: &mut Typer,
    env: &Env,
    ex: &mut Expr,
    because: Because,
    expected: &Type,
) -> Result<(), TypeError> {
    let actual = discipline.synth(typer, env, ex)?;
    typer.unify(&because, ex.span, expected, &actual)
}

/// The state of one inference run.
#[derive(Debug, Default)]
struct Typer {
    vars: VarSupply,
    subst: Subst,
}

impl Typer {
    pub fn new() -> Self {
        Self {
            vars: VarSupply::new(),
            subst: Subst::new(),
        }
    }

    pub fn fresh(&mut self) -> Type {
        self.vars.fresh_type()
    }

    /// Make `expected` and `actual` equal, or fail with the error `because`
    /// calls for.
    pub fn unify(
        &mut self,
        because: &Because,
        span: Span,
        expected: &Type,
        actual: &Type,
    ) -> Result<(), TypeError> {
        let subst = std::mem::take(&mut self.subst);
        self.subst = unify(expected, actual, subst)
            .map_err(|err| TypeError::from_unify(err, because, span))?;
        Ok(())
    }

    /// The type with every solved variable replaced.
    pub fn resolve(&self, ty: &Type) -> Type {
        self.subst.apply(ty)
    }

    /// Turn an annotation into a type. Every wildcard becomes a fresh variable.
    pub fn lower(&mut self, anno: &TypeExpr) -> Type {
        match &anno.node {
            TypeNode::Prim(con) => Type::Con(*con, Vec::new()),
            TypeNode::Fun(t, u) => {
                let t = self.lower(t);
                let u = self.lower(u);
                Type::fun(t, u)
            }
            TypeNode::Tuple(elems) => Type::tuple(elems.iter().map(|elem| self.lower(elem)).collect()),
            TypeNode::Wildcard | TypeNode::Invalid => self.fresh(),
        }
    }

    /// Fill the slot of an expression with its type as currently known.
    pub fn annotate(&self, ex: &mut Expr, ty: &Type) {
        ex.ty.fill(self.resolve(ty));
    }

    fn infer_decls<D: Discipline>(
        &mut self,
        discipline: &mut D,
        mut env: Env,
        decls: &mut Decls,
    ) -> Result<(), TypeError> {
        for def in decls.values.iter_mut() {
            let scheme = self.bind_let(discipline, &env, &mut def.binder, &mut def.bind)?;
            debug!("inferred {} : {scheme}", def.binder.name);
            env = env.extend(def.binder.name.clone(), scheme);
        }

        Ok(())
    }
}
