use std::collections::BTreeSet;

use wisp_common::ast::Name;
use wisp_common::types::{Scheme, Subst, Type, UniVar, VarSupply};

/// The schemes of the names in scope. Extending an environment leaves the
/// original untouched, so sibling scopes can share their parent.
#[derive(Clone, Debug, Default)]
pub struct Env {
    names: im::HashMap<Name, Scheme>,
}

impl Env {
    pub fn new() -> Self {
        Self {
            names: im::HashMap::new(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Scheme> {
        self.names.get(name)
    }

    /// A new environment where `name` has the given scheme, shadowing any
    /// outer binding of it.
    pub fn extend(&self, name: impl Into<Name>, scheme: Scheme) -> Env {
        Self {
            names: self.names.update(name.into(), scheme),
        }
    }

    /// The variables free in some scheme of the environment, under `subst`.
    pub fn free_vars(&self, subst: &Subst) -> BTreeSet<UniVar> {
        self.names
            .values()
            .flat_map(|scheme| subst.apply_scheme(scheme).free_vars())
            .collect()
    }

    /// Quantify over the variables of `ty` that are not free in the
    /// environment. The quantified variables are listed in the order they
    /// occur in the type.
    pub fn generalize(&self, subst: &Subst, ty: &Type) -> Scheme {
        let ty = subst.apply(ty);
        let fixed = self.free_vars(subst);
        let vars = ty
            .vars()
            .into_iter()
            .filter(|var| !fixed.contains(var))
            .collect();

        Scheme::poly(vars, ty)
    }
}

/// Replace the quantified variables of a scheme with fresh ones.
pub fn instantiate(scheme: &Scheme, vars: &mut VarSupply) -> Type {
    if scheme.is_mono() {
        return scheme.ty.clone();
    }

    let inst = scheme
        .vars
        .iter()
        .fold(Subst::new(), |inst, var| inst.bind(*var, vars.fresh_type()));

    inst.apply(&scheme.ty)
}
