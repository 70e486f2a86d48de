//! The type algebra shared by the inference engine, the printer, and the
//! driver.
//!
//! Every type is either a unification variable or a constructor applied to an
//! ordered list of arguments. Primitives are constructors of arity zero, and a
//! function type is the constructor [`Con::Fun`] applied to its parameter and
//! result types.

mod pretty;
mod subst;


pub use pretty::{pretty_scheme, pretty_type, PrettyMap};
pub use subst::Subst;

use std::collections::BTreeSet;
use std::fmt;

/// A unification variable. Two variables are the same exactly when their ids
/// are.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UniVar(usize);

/// Hands out fresh [`UniVar`]s. Each inference run owns exactly one supply, so
/// independent runs never share variables.
#[derive(Debug, Default)]
pub struct VarSupply {
    curr: usize,
}

impl VarSupply {
    pub fn new() -> Self {
        Self { curr: 0 }
    }

    pub fn fresh(&mut self) -> UniVar {
        let var = UniVar(self.curr);
        self.curr += 1;
        var
    }

    pub fn fresh_type(&mut self) -> Type {
        Type::Var(self.fresh())
    }

    /// The number of variables handed out so far.
    pub fn count(&self) -> usize {
        self.curr
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Con {
    Int,
    Float,
    Bool,
    String,
    Unit,
    Fun,
    Tuple,
}

impl Con {
    pub fn name(&self) -> &'static str {
        match self {
            Con::Int => "Int",
            Con::Float => "Float",
            Con::Bool => "Bool",
            Con::String => "String",
            Con::Unit => "Unit",
            Con::Fun => "->",
            Con::Tuple => "(,)",
        }
    }

    /// Look up a primitive type by the name it is written with.
    pub fn primitive(name: &str) -> Option<Con> {
        match name {
            "Int" => Some(Con::Int),
            "Float" => Some(Con::Float),
            "Bool" => Some(Con::Bool),
            "String" => Some(Con::String),
            "Unit" => Some(Con::Unit),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Type {
    Var(UniVar),
    Con(Con, Vec<Type>),
}

impl Type {
    pub fn int() -> Self {
        Type::Con(Con::Int, Vec::new())
    }

    pub fn float() -> Self {
        Type::Con(Con::Float, Vec::new())
    }

    pub fn bool() -> Self {
        Type::Con(Con::Bool, Vec::new())
    }

    pub fn string() -> Self {
        Type::Con(Con::String, Vec::new())
    }

    pub fn unit() -> Self {
        Type::Con(Con::Unit, Vec::new())
    }

    pub fn fun(t: Type, u: Type) -> Self {
        Type::Con(Con::Fun, vec![t, u])
    }

    pub fn tuple(elems: Vec<Type>) -> Self {
        Type::Con(Con::Tuple, elems)
    }

    /// The parameter and return type, if this is a function type.
    pub fn as_fun(&self) -> Option<(&Type, &Type)> {
        match self {
            Type::Con(Con::Fun, args) if args.len() == 2 => Some((&args[0], &args[1])),
            _ => None,
        }
    }

    /// The element types, if this is a tuple type.
    pub fn as_tuple(&self) -> Option<&[Type]> {
        match self {
            Type::Con(Con::Tuple, args) => Some(args),
            _ => None,
        }
    }

    /// Every variable in this type, ordered by id.
    pub fn free_vars(&self) -> BTreeSet<UniVar> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    /// Every variable in this type, in the order they first occur when read
    /// left to right.
    pub fn vars(&self) -> Vec<UniVar> {
        let mut vars = Vec::new();
        self.collect_ordered(&mut vars);
        vars
    }

    fn collect_ordered(&self, vars: &mut Vec<UniVar>) {
        match self {
            Type::Var(var) if !vars.contains(var) => vars.push(*var),
            Type::Var(_) => {}
            Type::Con(_, args) => {
                for arg in args {
                    arg.collect_ordered(vars);
                }
            }
        }
    }

    fn collect_vars(&self, vars: &mut BTreeSet<UniVar>) {
        match self {
            Type::Var(var) => {
                vars.insert(*var);
            }
            Type::Con(_, args) => {
                for arg in args {
                    arg.collect_vars(vars);
                }
            }
        }
    }

    pub fn occurs(&self, var: &UniVar) -> bool {
        match self {
            Type::Var(war) => var == war,
            Type::Con(_, args) => args.iter().any(|arg| arg.occurs(var)),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", pretty_type(&mut PrettyMap::new(), self))
    }
}

/// A type together with the variables it is polymorphic over.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scheme {
    pub vars: Vec<UniVar>,
    pub ty: Type,
}

impl Scheme {
    pub fn mono(ty: Type) -> Self {
        Self {
            vars: Vec::new(),
            ty,
        }
    }

    pub fn poly(vars: Vec<UniVar>, ty: Type) -> Self {
        Self { vars, ty }
    }

    pub fn is_mono(&self) -> bool {
        self.vars.is_empty()
    }

    /// The variables of the type that the scheme does not quantify over.
    pub fn free_vars(&self) -> BTreeSet<UniVar> {
        let mut vars = self.ty.free_vars();
        for var in self.vars.iter() {
            vars.remove(var);
        }
        vars
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", pretty_scheme(&mut PrettyMap::new(), self))
    }
}
