//! The syntax tree handed from the parser to the inference engine.
//!
//! Every expression owns a [`Slot`] for its type, and every binder a slot for
//! its scheme. The engine fills each slot once while it walks the tree and
//! resolves them all against the final substitution at the end.

pub mod pretty;


use crate::message::Span;
use crate::types::{Con, Scheme, Type};

pub type Name = String;

/// A write-once annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Slot<T>(Option<T>);

impl<T> Slot<T> {
    pub fn empty() -> Self {
        Self(None)
    }

    /// Fill the slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot has already been filled.
    pub fn fill(&mut self, value: T) {
        assert!(self.0.replace(value).is_none(), "annotation slot filled twice");
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn is_filled(&self) -> bool {
        self.0.is_some()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Rewrite the value in a filled slot. Does nothing to an empty slot.
    pub fn resolve(&mut self, f: impl FnOnce(T) -> T) {
        if let Some(value) = self.0.take() {
            self.0 = Some(f(value));
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Decls {
    pub values: Vec<ValueDef>,
}

impl Decls {
    /// The final scheme of the last top-level declaration called `name`.
    pub fn scheme_of(&self, name: &str) -> Option<&Scheme> {
        self.values
            .iter()
            .rev()
            .find(|def| def.binder.name == name)
            .and_then(|def| def.binder.scheme.get())
    }

    /// Empty every annotation slot in the tree.
    pub fn clear_types(&mut self) {
        for def in self.values.iter_mut() {
            def.binder.scheme.clear();
            def.bind.clear_types();
        }
    }

    /// Visit every expression in every declaration, in pre-order.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Expr)) {
        for def in self.values.iter() {
            def.bind.walk(f);
        }
    }
}

#[derive(Clone, Debug)]
pub struct ValueDef {
    pub span: Span,
    pub binder: Binder,
    pub bind: Expr,
}

/// A name introduced by a lambda, a `let`, or a declaration.
#[derive(Clone, Debug)]
pub struct Binder {
    pub name: Name,
    pub span: Span,
    pub anno: Option<TypeExpr>,
    pub scheme: Slot<Scheme>,
}

impl Binder {
    pub fn new(name: impl Into<Name>, span: Span, anno: Option<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            span,
            anno,
            scheme: Slot::empty(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Expr {
    pub node: ExprNode,
    pub span: Span,
    pub ty: Slot<Type>,
}

#[derive(Clone, Debug)]
pub enum ExprNode {
    Lit(Lit),
    Name(Name),

    Lam(Binder, Box<Expr>),
    App(Box<Expr>, Box<Expr>),

    Let(Binder, Box<Expr>, Box<Expr>),
    If(Box<Expr>, Box<Expr>, Box<Expr>),

    Anno(Box<Expr>, TypeExpr),
    Tuple(Vec<Expr>),

    Invalid,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Lit {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
    Unit,
}

impl Lit {
    pub fn ty(&self) -> Type {
        match self {
            Lit::Int(_) => Type::int(),
            Lit::Float(_) => Type::float(),
            Lit::Bool(_) => Type::bool(),
            Lit::String(_) => Type::string(),
            Lit::Unit => Type::unit(),
        }
    }
}

impl Expr {
    pub fn new(node: ExprNode, span: Span) -> Self {
        Self {
            node,
            span,
            ty: Slot::empty(),
        }
    }

    /// The annotated type of this node, if inference has reached it.
    pub fn ty(&self) -> Option<&Type> {
        self.ty.get()
    }

    /// The immediate subexpressions, left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match &self.node {
            ExprNode::Lit(_) | ExprNode::Name(_) | ExprNode::Invalid => Vec::new(),
            ExprNode::Lam(_, body) => vec![body.as_ref()],
            ExprNode::App(fun, arg) => vec![fun.as_ref(), arg.as_ref()],
            ExprNode::Let(_, bind, body) => vec![bind.as_ref(), body.as_ref()],
            ExprNode::If(cond, then, elze) => vec![cond.as_ref(), then.as_ref(), elze.as_ref()],
            ExprNode::Anno(ex, _) => vec![ex.as_ref()],
            ExprNode::Tuple(elems) => elems.iter().collect(),
        }
    }

    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Expr)) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    pub fn clear_types(&mut self) {
        self.ty.clear();
        match &mut self.node {
            ExprNode::Lit(_) | ExprNode::Name(_) | ExprNode::Invalid => {}
            ExprNode::Lam(param, body) => {
                param.scheme.clear();
                body.clear_types();
            }
            ExprNode::App(fun, arg) => {
                fun.clear_types();
                arg.clear_types();
            }
            ExprNode::Let(binder, bind, body) => {
                binder.scheme.clear();
                bind.clear_types();
                body.clear_types();
            }
            ExprNode::If(cond, then, elze) => {
                cond.clear_types();
                then.clear_types();
                elze.clear_types();
            }
            ExprNode::Anno(ex, _) => ex.clear_types(),
            ExprNode::Tuple(elems) => {
                for elem in elems {
                    elem.clear_types();
                }
            }
        }
    }
}

/// A type as written in an annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeExpr {
    pub node: TypeNode,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeNode {
    Prim(Con),
    Fun(Box<TypeExpr>, Box<TypeExpr>),
    Tuple(Vec<TypeExpr>),
    Wildcard,
    Invalid,
}
