use std::collections::HashMap;

use super::{Con, Scheme, Type, UniVar};

/// Names variables `'a`, `'b`, ... in the order they are first printed. Share
/// one map between several types to keep the names consistent between them.
#[derive(Debug, Default)]
pub struct PrettyMap {
    names: HashMap<UniVar, String>,
    curr: usize,
}

impl PrettyMap {
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
            curr: 0,
        }
    }

    const ALPHABET: &'static [char] = &[
        'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
        's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    ];

    pub fn var(&mut self, var: &UniVar) -> String {
        if let Some(name) = self.names.get(var) {
            return name.clone();
        }

        let id = self.curr;
        self.curr += 1;

        let n = Self::ALPHABET.len();
        let mut name = format!("'{}", Self::ALPHABET[id % n]);
        if id >= n {
            name.push_str(&(id / n).to_string());
        }

        self.names.entry(*var).or_insert(name).clone()
    }
}

pub fn pretty_type(map: &mut PrettyMap, ty: &Type) -> String {
    pretty_arrow(map, ty)
}

pub fn pretty_scheme(map: &mut PrettyMap, scheme: &Scheme) -> String {
    if scheme.vars.is_empty() {
        return pretty_type(map, &scheme.ty);
    }

    let vars: Vec<_> = scheme.vars.iter().map(|var| map.var(var)).collect();
    let ty = pretty_type(map, &scheme.ty);
    format!("forall {}. {ty}", vars.join(" "))
}

fn pretty_arrow(map: &mut PrettyMap, ty: &Type) -> String {
    match ty.as_fun() {
        Some((t, u)) => {
            let t = pretty_base(map, t);
            let u = pretty_arrow(map, u);
            format!("{t} -> {u}")
        }

        None => pretty_base(map, ty),
    }
}

fn pretty_base(map: &mut PrettyMap, ty: &Type) -> String {
    match ty {
        Type::Var(var) => map.var(var),

        Type::Con(Con::Tuple, elems) => {
            let elems: Vec<_> = elems.iter().map(|elem| pretty_arrow(map, elem)).collect();
            format!("({})", elems.join(", "))
        }

        Type::Con(Con::Fun, args) if args.len() == 2 => format!("({})", pretty_arrow(map, ty)),

        Type::Con(con, args) if args.is_empty() => con.name().into(),

        Type::Con(con, args) => {
            let args: Vec<_> = args.iter().map(|arg| pretty_base(map, arg)).collect();
            format!("{} {}", con.name(), args.join(" "))
        }
    }
}
