use wisp_common::types::{Scheme, Type, VarSupply};

use super::env::Env;

/// The environment every program starts in.
pub fn prelude(vars: &mut VarSupply) -> Env {
    let int = Type::int;
    let boolean = Type::bool;
    let binary = |t: Type, u: Type| Type::fun(t.clone(), Type::fun(t, u));

    let mut env = Env::new();

    for op in ["+", "-", "*", "/"] {
        env = env.extend(op, Scheme::mono(binary(int(), int())));
    }

    for op in ["<", "<=", ">", ">="] {
        env = env.extend(op, Scheme::mono(binary(int(), boolean())));
    }

    for op in ["==", "!="] {
        let a = vars.fresh();
        env = env.extend(op, Scheme::poly(vec![a], binary(Type::Var(a), boolean())));
    }

    for op in ["&&", "||"] {
        env = env.extend(op, Scheme::mono(binary(boolean(), boolean())));
    }

    env = env.extend("not", Scheme::mono(Type::fun(boolean(), boolean())));
    env = env.extend("neg", Scheme::mono(Type::fun(int(), int())));
    env = env.extend("++", Scheme::mono(binary(Type::string(), Type::string())));
    env = env.extend("to_float", Scheme::mono(Type::fun(int(), Type::float())));

    let (a, b) = (vars.fresh(), vars.fresh());
    let pair = Type::tuple(vec![Type::Var(a), Type::Var(b)]);
    env = env.extend("fst", Scheme::poly(vec![a, b], Type::fun(pair.clone(), Type::Var(a))));
    env = env.extend("snd", Scheme::poly(vec![a, b], Type::fun(pair, Type::Var(b))));

    let a = vars.fresh();
    env.extend("id", Scheme::poly(vec![a], Type::fun(Type::Var(a), Type::Var(a))))
}
