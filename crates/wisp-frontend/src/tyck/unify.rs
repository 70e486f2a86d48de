use log::trace;
use wisp_common::types::{Subst, Type, UniVar};

use super::error::UnifyError;

/// Extend `subst` so that `expected` and `actual` become equal under it.
///
/// Constructor arguments are unified pairwise from left to right, so a later
/// argument sees the bindings made for earlier ones. The first failure aborts.
pub fn unify(expected: &Type, actual: &Type, subst: Subst) -> Result<Subst, UnifyError> {
    let t = subst.shallow(expected).clone();
    let u = subst.shallow(actual).clone();

    match (t, u) {
        (Type::Var(v), Type::Var(w)) if v == w => Ok(subst),

        (Type::Var(v), u) => bind(v, &u, subst),
        (t, Type::Var(w)) => bind(w, &t, subst),

        (Type::Con(c, ts), Type::Con(d, us)) => {
            if c != d || ts.len() != us.len() {
                return Err(UnifyError::Mismatch {
                    expected: subst.apply(&Type::Con(c, ts)),
                    found: subst.apply(&Type::Con(d, us)),
                });
            }

            ts.iter()
                .zip(us.iter())
                .try_fold(subst, |subst, (t, u)| unify(t, u, subst))
        }
    }
}

fn bind(var: UniVar, ty: &Type, subst: Subst) -> Result<Subst, UnifyError> {
    let ty = subst.apply(ty);
    if ty.occurs(&var) {
        return Err(UnifyError::Occurs { var, ty });
    }

    trace!("solved {} := {ty}", Type::Var(var));
    Ok(subst.bind(var, ty))
}
