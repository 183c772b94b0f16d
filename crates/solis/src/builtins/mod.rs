//! The native prelude bindings installed by [`crate::value::Environment::builtins`].
//!
//! Each builtin is a curried native [`FunctionValue`], one file per name,
//! mirroring how the rest of the core keeps one declaration per module.
//! These operate on already-forced list spines but otherwise preserve
//! laziness: arguments are handed to user closures unforced.

mod filter;
mod foldl;
mod length;
mod map;
mod not;
mod reverse;
mod show;

use std::rc::Rc;

use crate::error::SolisResult;
use crate::value::{Env, FunctionValue, Value, ValueRef};

pub fn install(env: &Env) {
    not::install(env);
    length::install(env);
    reverse::install(env);
    map::install(env);
    filter::install(env);
    foldl::install(env);
    show::install(env);
}

/// Wraps a Rust closure as a curried native function value.
pub(crate) fn native1(f: impl Fn(ValueRef) -> SolisResult<ValueRef> + 'static) -> ValueRef {
    Rc::new(Value::Function(Rc::new(FunctionValue::Native(Rc::new(f)))))
}
