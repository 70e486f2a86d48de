use std::collections::HashMap;

use super::{Scheme, Type, UniVar};

/// A finite map from variables to the types they have been solved to.
///
/// Bindings may refer to other bound variables; [`Subst::apply`] follows such
/// chains until it reaches a type with no bound variables left, so applying a
/// substitution twice gives the same result as applying it once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Subst {
    map: HashMap<UniVar, Type>,
}

impl Subst {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn singleton(var: UniVar, ty: Type) -> Self {
        Self::new().bind(var, ty)
    }

    pub fn get(&self, var: &UniVar) -> Option<&Type> {
        self.map.get(var)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Extend the substitution with a binding for a variable that has none
    /// yet.
    pub fn bind(mut self, var: UniVar, ty: Type) -> Self {
        assert!(self.map.insert(var, ty).is_none());
        self
    }

    /// Replace every bound variable in `ty`, chasing chains of bindings.
    pub fn apply(&self, ty: &Type) -> Type {
        match ty {
            Type::Var(var) => match self.map.get(var) {
                Some(bound) => self.apply(bound),
                None => Type::Var(*var),
            },
            Type::Con(con, args) => Type::Con(*con, args.iter().map(|arg| self.apply(arg)).collect()),
        }
    }

    /// Like [`Subst::apply`], but leaves the quantified variables of the
    /// scheme alone.
    pub fn apply_scheme(&self, scheme: &Scheme) -> Scheme {
        if scheme.vars.iter().all(|var| !self.map.contains_key(var)) {
            return Scheme::poly(scheme.vars.clone(), self.apply(&scheme.ty));
        }

        let mut inner = self.clone();
        for var in scheme.vars.iter() {
            inner.map.remove(var);
        }

        Scheme::poly(scheme.vars.clone(), inner.apply(&scheme.ty))
    }

    /// Resolve the head of a type: a bound variable is replaced by what it is
    /// bound to, until the result is a constructor or an unbound variable.
    pub fn shallow<'a>(&'a self, mut ty: &'a Type) -> &'a Type {
        while let Type::Var(var) = ty {
            match self.map.get(var) {
                Some(bound) => ty = bound,
                None => break,
            }
        }

        ty
    }

    /// Apply `other` to every type in the range of `self`, then add the
    /// bindings of `other`. On a collision the binding from `other` wins.
    pub fn compose(&self, other: &Subst) -> Subst {
        let mut map: HashMap<_, _> = self
            .map
            .iter()
            .map(|(var, ty)| (*var, other.apply(ty)))
            .collect();

        for (var, ty) in other.map.iter() {
            map.insert(*var, ty.clone());
        }

        Subst { map }
    }
}
