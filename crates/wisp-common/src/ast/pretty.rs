use pretty::{Arena, DocAllocator, DocBuilder};

use super::{Binder, Decls, Expr, ExprNode, Lit, TypeExpr, TypeNode, ValueDef};
use crate::types::{pretty_scheme, pretty_type, PrettyMap};

/// Renders a tree as S-expressions, with each node followed by its type once
/// it has one. Type variables are named consistently within a declaration.
pub struct Prettier<'a> {
    allocator: Arena<'a>,
    width: usize,
}

impl<'a> Prettier<'a> {
    pub fn new() -> Self {
        Self {
            allocator: Arena::new(),
            width: 80,
        }
    }

    pub fn with_width(self, width: usize) -> Self {
        Self { width, ..self }
    }

    pub fn pretty_decls(&'a self, decls: &Decls) -> String {
        let doc = self.doc_decls(decls);
        self.render(doc)
    }

    fn render(&'a self, doc: DocBuilder<'a, Arena<'a>>) -> String {
        let mut res = Vec::new();
        doc.render(self.width, &mut res)
            .expect("rendering into memory does not fail");
        String::from_utf8_lossy(&res).into_owned()
    }

    fn doc_decls(&'a self, decls: &Decls) -> DocBuilder<'a, Arena<'a>> {
        self.allocator.intersperse(
            decls.values.iter().map(|def| self.doc_value_def(def)),
            self.allocator.hardline(),
        )
    }

    fn doc_value_def(&'a self, def: &ValueDef) -> DocBuilder<'a, Arena<'a>> {
        let mut names = PrettyMap::new();
        let binder = self.doc_binder(&mut names, &def.binder);
        let bind = self.doc_expr(&mut names, &def.bind);

        self.allocator
            .text("(let ")
            .append(binder)
            .append(self.allocator.line().append(bind).nest(2))
            .append(self.allocator.text(")"))
            .group()
    }

    fn doc_binder(&'a self, names: &mut PrettyMap, binder: &Binder) -> DocBuilder<'a, Arena<'a>> {
        let ty = match (binder.scheme.get(), &binder.anno) {
            (Some(scheme), _) => Some(pretty_scheme(names, scheme)),
            (None, Some(anno)) => Some(pretty_type_expr(anno)),
            (None, None) => None,
        };

        match ty {
            Some(ty) => self
                .allocator
                .text(format!("[{} : {ty}]", binder.name)),
            None => self.allocator.text(binder.name.clone()),
        }
    }

    fn doc_expr(&'a self, names: &mut PrettyMap, ex: &Expr) -> DocBuilder<'a, Arena<'a>> {
        let (head, children) = match &ex.node {
            ExprNode::Lit(lit) => (self.allocator.text(pretty_lit(lit)), Vec::new()),
            ExprNode::Name(name) => (self.allocator.text(format!("name {name}")), Vec::new()),

            ExprNode::Lam(param, body) => {
                let param = self.doc_binder(names, param);
                let head = self.allocator.text("fn ").append(param);
                (head, vec![self.doc_expr(names, body)])
            }

            ExprNode::App(fun, arg) => {
                let fun = self.doc_expr(names, fun);
                let arg = self.doc_expr(names, arg);
                (self.allocator.text("app"), vec![fun, arg])
            }

            ExprNode::Let(binder, bind, body) => {
                let binder = self.doc_binder(names, binder);
                let head = self.allocator.text("let ").append(binder);
                let bind = self.doc_expr(names, bind);
                let body = self.doc_expr(names, body);
                (head, vec![bind, body])
            }

            ExprNode::If(cond, then, elze) => {
                let cond = self.doc_expr(names, cond);
                let then = self.doc_expr(names, then);
                let elze = self.doc_expr(names, elze);
                (self.allocator.text("if"), vec![cond, then, elze])
            }

            ExprNode::Anno(inner, anno) => {
                let head = self
                    .allocator
                    .text(format!("the [{}]", pretty_type_expr(anno)));
                (head, vec![self.doc_expr(names, inner)])
            }

            ExprNode::Tuple(elems) => {
                let elems = elems.iter().map(|elem| self.doc_expr(names, elem)).collect();
                (self.allocator.text("tuple"), elems)
            }

            ExprNode::Invalid => (self.allocator.text("invalid"), Vec::new()),
        };

        let suffix = match ex.ty.get() {
            Some(ty) => self.allocator.text(format!(" : {}", pretty_type(names, ty))),
            None => self.allocator.nil(),
        };

        let children = self
            .allocator
            .concat(children.into_iter().map(|child| self.allocator.line().append(child)))
            .nest(2);

        self.allocator
            .text("(")
            .append(head)
            .append(children)
            .append(suffix)
            .append(self.allocator.text(")"))
            .group()
    }
}

impl Default for Prettier<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn pretty_lit(lit: &Lit) -> String {
    match lit {
        Lit::Int(v) => format!("int {v}"),
        Lit::Float(v) => format!("float {v:?}"),
        Lit::Bool(v) => format!("bool {v}"),
        Lit::String(v) => format!("string {v:?}"),
        Lit::Unit => "unit".into(),
    }
}

/// Render an annotation the way it would be written in source.
pub fn pretty_type_expr(ty: &TypeExpr) -> String {
    match &ty.node {
        TypeNode::Fun(t, u) => {
            let t = match t.node {
                TypeNode::Fun(..) => format!("({})", pretty_type_expr(t)),
                _ => pretty_type_expr(t),
            };

            format!("{t} -> {}", pretty_type_expr(u))
        }

        TypeNode::Prim(con) => con.name().into(),
        TypeNode::Tuple(elems) => {
            let elems: Vec<_> = elems.iter().map(pretty_type_expr).collect();
            format!("({})", elems.join(", "))
        }

        TypeNode::Wildcard => "_".into(),
        TypeNode::Invalid => "<error>".into(),
    }
}
