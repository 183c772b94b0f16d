//! Runtime values and the environment they live in.
//!
//! Values are shared by reference ([`ValueRef`] is an `Rc`); the interior
//! mutability needed for thunk memoization lives on the `Thunk` variant
//! alone, not on the environment or on values in general.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::ast::{Expr, Pattern};
use crate::bigint::BigInt;

pub type ValueRef = Rc<Value>;

#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    List(Vec<ValueRef>),
    /// Closing over an environment, a function value maps one argument
    /// handle to one result handle. Multi-parameter declarations and
    /// multi-argument natives curry through chains of this variant.
    Function(Rc<FunctionValue>),
    Thunk(Rc<RefCell<ThunkState>>),
    Record(IndexMap<String, ValueRef>),
    /// A tagged tuple produced by applying a data constructor. Empty `args`
    /// encodes a nullary constructor (`Nothing`, `Nil`, …).
    Constructor(String, Vec<ValueRef>),
    BigInt(BigInt),
}

impl Value {
    pub fn unit_true() -> ValueRef {
        Rc::new(Value::Bool(true))
    }

    /// A short tag used in `TypeMismatch` messages; not a full `show`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
            Value::Bool(_) => "Bool",
            Value::List(_) => "List",
            Value::Function(_) => "Function",
            Value::Thunk(_) => "Thunk",
            Value::Record(_) => "Record",
            Value::Constructor(..) => "Constructor",
            Value::BigInt(_) => "BigInt",
        }
    }
}

pub enum FunctionValue {
    Closure { param: Pattern, body: Rc<Expr>, env: Env },
    Native(Rc<dyn Fn(ValueRef) -> crate::error::SolisResult<ValueRef>>),
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionValue::Closure { param, .. } => write!(f, "Closure({param:?})"),
            FunctionValue::Native(_) => write!(f, "Native(..)"),
        }
    }
}

/// A thunk's memoization slot. `Evaluating` is a transient state installed
/// while the suspended computation runs, so a second entry can be detected
/// and reported as [`crate::error::ErrorKind::InfiniteLoop`].
pub enum ThunkState {
    Suspended(Env, Rc<Expr>),
    Evaluating,
    Forced(ValueRef),
}

/// An ordered identifier-to-value mapping, extended per function call with
/// parameter bindings. Lookup walks the parent chain; nothing already
/// installed is ever mutated, only shadowed by a child scope's own binding.
pub struct Environment {
    parent: Option<Env>,
    bindings: RefCell<IndexMap<String, ValueRef>>,
}

pub type Env = Rc<Environment>;

impl Environment {
    pub fn root() -> Env {
        Rc::new(Environment { parent: None, bindings: RefCell::new(IndexMap::new()) })
    }

    /// Installs the prelude's native bindings into a fresh root environment.
    pub fn builtins() -> Env {
        let env = Self::root();
        crate::builtins::install(&env);
        env
    }

    pub fn extend(self: &Env) -> Env {
        Rc::new(Environment { parent: Some(Rc::clone(self)), bindings: RefCell::new(IndexMap::new()) })
    }

    pub fn bind(&self, name: impl Into<String>, value: ValueRef) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    pub fn lookup(&self, name: &str) -> Option<ValueRef> {
        if let Some(v) = self.bindings.borrow().get(name) {
            return Some(Rc::clone(v));
        }
        self.parent.as_ref().and_then(|p| p.lookup(name))
    }

    pub fn has(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Names bound directly in this scope, in insertion order. Used by
    /// `Interpreter::get_binding_names` against the global environment,
    /// which has no parent.
    pub fn local_names(&self) -> Vec<String> {
        self.bindings.borrow().keys().cloned().collect()
    }
}
