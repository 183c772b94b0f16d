//! The lazy evaluator: installs declarations into a global environment and
//! evaluates expressions against it, forcing thunks on demand.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use indexmap::IndexMap;
use num_integer::Integer;

use crate::ast::{Decl, Expr, ExprLit, FunctionDecl, Pattern, TypeDecl, TypeRhs};
use crate::bigint::BigInt;
use crate::error::{Error, SolisResult};
use crate::module::{ModuleResolver, NamespaceTable};
use crate::value::{Env, Environment, FunctionValue, ThunkState, Value, ValueRef};

/// Follows `Thunk` indirections until a non-thunk value is reached,
/// memoizing each link. A thunk entered while it is itself being forced
/// raises [`crate::error::ErrorKind::InfiniteLoop`] rather than recursing
/// forever.
pub fn force(value: &ValueRef) -> SolisResult<ValueRef> {
    let mut current = Rc::clone(value);
    loop {
        let Value::Thunk(cell) = &*current else {
            return Ok(current);
        };
        let next = {
            let mut state = cell.borrow_mut();
            match &*state {
                ThunkState::Forced(v) => v.clone(),
                ThunkState::Evaluating => return Err(Error::infinite_loop()),
                ThunkState::Suspended(env, expr) => {
                    let env = Rc::clone(env);
                    let expr = Rc::clone(expr);
                    *state = ThunkState::Evaluating;
                    drop(state);
                    let result = eval(&expr, &env);
                    match result {
                        Ok(v) => {
                            *cell.borrow_mut() = ThunkState::Forced(Rc::clone(&v));
                            v
                        }
                        Err(e) => {
                            // Restore the suspended state so a retry re-raises the
                            // same error instead of a spurious `InfiniteLoop`.
                            *cell.borrow_mut() = ThunkState::Suspended(env, expr);
                            return Err(e);
                        }
                    }
                }
            }
        };
        current = next;
    }
}

/// Applies a forced or unforced function value to one argument, curried.
pub fn apply(f: &ValueRef, arg: ValueRef) -> SolisResult<ValueRef> {
    let forced = force(f)?;
    let Value::Function(func) = &*forced else {
        return Err(Error::type_mismatch(format!("cannot apply a value of type {}", forced.type_name())));
    };
    match &**func {
        FunctionValue::Native(native) => native(arg),
        FunctionValue::Closure { param, body, env } => {
            let call_env = env.extend();
            if !match_pattern(param, &arg, &call_env)? {
                return Err(Error::match_failure("function argument did not match its parameter pattern"));
            }
            eval(body, &call_env)
        }
    }
}

/// Builds a closure for a (possibly multi-parameter) lambda. Parameters
/// beyond the first are desugared into a nested `Lambda` so every runtime
/// `Function` value remains strictly arity-one.
fn make_closure(params: &[Pattern], body: &Expr, env: &Env) -> ValueRef {
    let (first, rest) = params.split_first().expect("lambda always has at least one parameter");
    let body_expr = if rest.is_empty() {
        Rc::new(body.clone())
    } else {
        Rc::new(Expr::Lambda(rest.to_vec(), Box::new(body.clone())))
    };
    Rc::new(Value::Function(Rc::new(FunctionValue::Closure { param: first.clone(), body: body_expr, env: Rc::clone(env) })))
}

fn make_thunk(expr: &Expr, env: &Env) -> ValueRef {
    Rc::new(Value::Thunk(Rc::new(std::cell::RefCell::new(ThunkState::Suspended(Rc::clone(env), Rc::new(expr.clone()))))))
}

/// Builds a curried native constructor function that accumulates `arity`
/// arguments before producing `Constructor(name, args)`. Nullary
/// constructors skip the function wrapper entirely.
fn make_constructor(name: &str, arity: usize) -> ValueRef {
    fn step(name: Rc<str>, remaining: usize, collected: Vec<ValueRef>) -> ValueRef {
        if remaining == 0 {
            return Rc::new(Value::Constructor(name.to_string(), collected));
        }
        let name = Rc::clone(&name);
        Rc::new(Value::Function(Rc::new(FunctionValue::Native(Rc::new(move |arg: ValueRef| {
            let mut next = collected.clone();
            next.push(arg);
            Ok(step(Rc::clone(&name), remaining - 1, next))
        })))))
    }
    step(Rc::from(name), arity, Vec::new())
}

/// Evaluates an expression against an environment, per the semantics table.
fn eval(expr: &Expr, env: &Env) -> SolisResult<ValueRef> {
    match expr {
        Expr::Var(name) => env.lookup(name).ok_or_else(|| Error::unbound_variable(name)),
        Expr::Lit(lit) => Ok(lit_to_value(lit)),
        Expr::Lambda(params, body) => Ok(make_closure(params, body, env)),
        Expr::App(f, a) => {
            let fv = eval(f, env)?;
            let arg = make_thunk(a, env);
            apply(&fv, arg)
        }
        Expr::Let(pat, value, body) => {
            let child = env.extend();
            let thunk = make_thunk(value, &child);
            if !match_pattern(pat, &thunk, &child)? {
                return Err(Error::match_failure("let binding pattern did not match its value"));
            }
            eval(body, &child)
        }
        Expr::Match(scrutinee, arms) => {
            let value = eval(scrutinee, env)?;
            for (pat, arm_body) in arms {
                let child = env.extend();
                if match_pattern(pat, &value, &child)? {
                    return eval(arm_body, &child);
                }
            }
            Err(Error::match_failure("no match arm applies"))
        }
        Expr::If(cond, then_branch, else_branch) => {
            let c = force(&eval(cond, env)?)?;
            match &*c {
                Value::Bool(true) => eval(then_branch, env),
                Value::Bool(false) => eval(else_branch, env),
                other => Err(Error::type_mismatch(format!("`if` condition must be Bool, got {}", other.type_name()))),
            }
        }
        Expr::BinOp(op, l, r) => eval_binop(op, l, r, env),
        Expr::List(elems) => Ok(Rc::new(Value::List(elems.iter().map(|e| make_thunk(e, env)).collect()))),
        Expr::Record(fields) => {
            let mut map = IndexMap::new();
            for (name, value) in fields {
                map.insert(name.clone(), make_thunk(value, env));
            }
            Ok(Rc::new(Value::Record(map)))
        }
        Expr::RecordAccess(r, field) => {
            let base = force(&eval(r, env)?)?;
            let Value::Record(map) = &*base else {
                return Err(Error::type_mismatch(format!("field access on a {}", base.type_name())));
            };
            let value = map.get(field).ok_or_else(|| Error::no_such_field(field))?;
            force(value)
        }
        Expr::RecordUpdate(base, updates) => {
            let base_val = force(&eval(base, env)?)?;
            let Value::Record(map) = &*base_val else {
                return Err(Error::type_mismatch(format!("record update on a {}", base_val.type_name())));
            };
            let mut next = map.clone();
            for (name, value) in updates {
                next.insert(name.clone(), make_thunk(value, env));
            }
            Ok(Rc::new(Value::Record(next)))
        }
        Expr::Block(stmts, _is_do) => {
            let child = env.extend();
            let mut result = Value::unit_true();
            for stmt in stmts {
                result = eval_block_statement(stmt, &child)?;
            }
            Ok(result)
        }
        Expr::Bind(pat, action, body) => {
            let value = force(&eval(action, env)?)?;
            let child = env.extend();
            if !match_pattern(pat, &value, &child)? {
                return Err(Error::match_failure("bind pattern did not match the action's result"));
            }
            eval(body, &child)
        }
        Expr::Strict(e) => {
            let v = eval(e, env)?;
            force(&v)
        }
    }
}

/// A block statement that is itself a `let` installs into the shared child
/// scope rather than producing a nested one, so later statements see it.
fn eval_block_statement(stmt: &Expr, env: &Env) -> SolisResult<ValueRef> {
    if let Expr::Let(pat, value, _unit_body) = stmt {
        let thunk = make_thunk(value, env);
        if !match_pattern(pat, &thunk, env)? {
            return Err(Error::match_failure("let-statement pattern did not match its value"));
        }
        Ok(Value::unit_true())
    } else {
        eval(stmt, env)
    }
}

fn lit_to_value(lit: &ExprLit) -> ValueRef {
    match lit {
        ExprLit::Int(n) => Rc::new(Value::Int(*n)),
        ExprLit::Float(f) => Rc::new(Value::Float(*f)),
        ExprLit::Str(s) => Rc::new(Value::Str(s.clone())),
        ExprLit::Bool(b) => Rc::new(Value::Bool(*b)),
        ExprLit::Big(b) => Rc::new(Value::BigInt(b.clone())),
    }
}

/// The numeric common type two forced scalars are promoted to before an
/// arithmetic or comparison operator is applied.
enum Numeric {
    Int(i64),
    Float(f64),
    Big(BigInt),
}

fn as_numeric(v: &Value) -> Option<Numeric> {
    match v {
        Value::Int(n) => Some(Numeric::Int(*n)),
        Value::Float(f) => Some(Numeric::Float(*f)),
        Value::BigInt(b) => Some(Numeric::Big(b.clone())),
        _ => None,
    }
}

/// Widens two numerics to their common representation: float beats
/// big-integer beats machine integer.
fn widen(a: Numeric, b: Numeric) -> (Numeric, Numeric) {
    use Numeric::{Big, Float, Int};
    if matches!(a, Float(_)) || matches!(b, Float(_)) {
        let af = match a {
            Int(n) => n as f64,
            Float(f) => f,
            Big(bi) => bi.to_f64(),
        };
        let bf = match b {
            Int(n) => n as f64,
            Float(f) => f,
            Big(bi) => bi.to_f64(),
        };
        return (Float(af), Float(bf));
    }
    if matches!(a, Big(_)) || matches!(b, Big(_)) {
        let ab = match a {
            Int(n) => BigInt::from_i64(n),
            Big(bi) => bi,
            Float(_) => unreachable!("float already widened above"),
        };
        let bb = match b {
            Int(n) => BigInt::from_i64(n),
            Big(bi) => bi,
            Float(_) => unreachable!("float already widened above"),
        };
        return (Big(ab), Big(bb));
    }
    (a, b)
}

fn eval_binop(op: &str, l: &Expr, r: &Expr, env: &Env) -> SolisResult<ValueRef> {
    // Short-circuit operators evaluate the right side only when needed.
    if op == "&&" || op == "||" {
        let left = force(&eval(l, env)?)?;
        let Value::Bool(lb) = &*left else {
            return Err(Error::type_mismatch(format!("`{op}` expects Bool operands, got {}", left.type_name())));
        };
        if op == "&&" && !lb {
            return Ok(Rc::new(Value::Bool(false)));
        }
        if op == "||" && *lb {
            return Ok(Rc::new(Value::Bool(true)));
        }
        let right = force(&eval(r, env)?)?;
        let Value::Bool(rb) = &*right else {
            return Err(Error::type_mismatch(format!("`{op}` expects Bool operands, got {}", right.type_name())));
        };
        return Ok(Rc::new(Value::Bool(*rb)));
    }

    // `::` / `:` cons: keep the tail lazy, wrap the head as a thunk if it
    // is not one already.
    if op == "::" || op == ":" {
        let head = make_thunk(l, env);
        let tail_value = force(&eval(r, env)?)?;
        let Value::List(items) = &*tail_value else {
            return Err(Error::type_mismatch(format!("`{op}` expects a List on the right, got {}", tail_value.type_name())));
        };
        let mut out = Vec::with_capacity(items.len() + 1);
        out.push(head);
        out.extend(items.iter().cloned());
        return Ok(Rc::new(Value::List(out)));
    }

    let left = force(&eval(l, env)?)?;
    let right = force(&eval(r, env)?)?;

    if op == "++" {
        return match (&*left, &*right) {
            (Value::Str(a), Value::Str(b)) => Ok(Rc::new(Value::Str(format!("{a}{b}")))),
            (Value::List(a), Value::List(b)) => {
                let mut out = a.clone();
                out.extend(b.iter().cloned());
                Ok(Rc::new(Value::List(out)))
            }
            _ => Err(Error::type_mismatch(format!(
                "`++` expects two Str or two List operands, got {} and {}",
                left.type_name(),
                right.type_name()
            ))),
        };
    }

    if op == "|>" {
        // Reverse pipe application: `x |> f` is `f x`.
        return apply(&right, left);
    }

    if op == "==" || op == "!=" {
        let eq = structural_equal(&left, &right)?;
        return Ok(Rc::new(Value::Bool(if op == "==" { eq } else { !eq })));
    }

    match (op, as_numeric(&left), as_numeric(&right)) {
        ("<" | ">" | "<=" | ">=", None, None) => {
            let ordering = lexicographic_or_element_ordering(&left, &right)?;
            Ok(Rc::new(Value::Bool(apply_ordering(op, ordering))))
        }
        (_, Some(ln), Some(rn)) => eval_numeric_binop(op, ln, rn),
        _ => Err(Error::type_mismatch(format!(
            "`{op}` cannot be applied to {} and {}",
            left.type_name(),
            right.type_name()
        ))),
    }
}

fn apply_ordering(op: &str, ordering: std::cmp::Ordering) -> bool {
    use std::cmp::Ordering::{Equal, Greater, Less};
    match (op, ordering) {
        ("<", Less) | (">", Greater) => true,
        ("<=", Less | Equal) | (">=", Greater | Equal) => true,
        _ => false,
    }
}

fn lexicographic_or_element_ordering(left: &Value, right: &Value) -> SolisResult<std::cmp::Ordering> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
        (Value::List(a), Value::List(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                let xv = force(x)?;
                let yv = force(y)?;
                let ord = match (as_numeric(&xv), as_numeric(&yv)) {
                    (Some(xn), Some(yn)) => compare_numeric(xn, yn),
                    _ => lexicographic_or_element_ordering(&xv, &yv)?,
                };
                if ord != std::cmp::Ordering::Equal {
                    return Ok(ord);
                }
            }
            Ok(a.len().cmp(&b.len()))
        }
        _ => Err(Error::type_mismatch(format!(
            "`<`/`>` comparisons need numeric, Str, or List operands, got {} and {}",
            left.type_name(),
            right.type_name()
        ))),
    }
}

fn compare_numeric(a: Numeric, b: Numeric) -> std::cmp::Ordering {
    match widen(a, b) {
        (Numeric::Int(x), Numeric::Int(y)) => x.cmp(&y),
        (Numeric::Float(x), Numeric::Float(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
        (Numeric::Big(x), Numeric::Big(y)) => x.cmp(&y),
        _ => unreachable!("widen always returns a matching pair"),
    }
}

fn eval_numeric_binop(op: &str, l: Numeric, r: Numeric) -> SolisResult<ValueRef> {
    if matches!(op, "<" | ">" | "<=" | ">=") {
        return Ok(Rc::new(Value::Bool(apply_ordering(op, compare_numeric(l, r)))));
    }
    match widen(l, r) {
        (Numeric::Int(a), Numeric::Int(b)) => match op {
            "+" => Ok(Rc::new(Value::Int(a + b))),
            "-" => Ok(Rc::new(Value::Int(a - b))),
            "*" => Ok(Rc::new(Value::Int(a * b))),
            "/" => {
                if b == 0 {
                    Err(Error::division_by_zero())
                } else {
                    Ok(Rc::new(Value::Int(a.div_floor(&b))))
                }
            }
            "%" => {
                if b == 0 {
                    Err(Error::division_by_zero())
                } else {
                    Ok(Rc::new(Value::Int(a.mod_floor(&b))))
                }
            }
            _ => Err(Error::type_mismatch(format!("unknown operator `{op}`"))),
        },
        (Numeric::Float(a), Numeric::Float(b)) => match op {
            "+" => Ok(Rc::new(Value::Float(a + b))),
            "-" => Ok(Rc::new(Value::Float(a - b))),
            "*" => Ok(Rc::new(Value::Float(a * b))),
            "/" => Ok(Rc::new(Value::Float(a / b))),
            "%" => Ok(Rc::new(Value::Float(a % b))),
            _ => Err(Error::type_mismatch(format!("unknown operator `{op}`"))),
        },
        (Numeric::Big(a), Numeric::Big(b)) => match op {
            "+" => Ok(Rc::new(Value::BigInt(&a + &b))),
            "-" => Ok(Rc::new(Value::BigInt(&a - &b))),
            "*" => Ok(Rc::new(Value::BigInt(&a * &b))),
            "/" => a.div_floor(&b).map(Value::BigInt).map(Rc::new).ok_or_else(Error::division_by_zero),
            "%" => a.mod_floor(&b).map(Value::BigInt).map(Rc::new).ok_or_else(Error::division_by_zero),
            _ => Err(Error::type_mismatch(format!("unknown operator `{op}`"))),
        },
        _ => unreachable!("widen always returns a matching pair"),
    }
}

/// Structural equality after forcing both sides; used by `==`/`!=` and
/// the `Lit` pattern-match rule.
fn structural_equal(a: &Value, b: &Value) -> SolisResult<bool> {
    Ok(match (a, b) {
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (x, y) if as_numeric(x).is_some() && as_numeric(y).is_some() => {
            compare_numeric(as_numeric(x).unwrap(), as_numeric(y).unwrap()) == std::cmp::Ordering::Equal
        }
        (Value::List(xs), Value::List(ys)) => {
            if xs.len() != ys.len() {
                false
            } else {
                for (x, y) in xs.iter().zip(ys.iter()) {
                    if !structural_equal(&force(x)?, &force(y)?)? {
                        return Ok(false);
                    }
                }
                true
            }
        }
        (Value::Record(xs), Value::Record(ys)) => {
            if xs.len() != ys.len() {
                false
            } else {
                for (k, xv) in xs {
                    match ys.get(k) {
                        Some(yv) if structural_equal(&force(xv)?, &force(yv)?)? => {}
                        _ => return Ok(false),
                    }
                }
                true
            }
        }
        (Value::Constructor(xn, xs), Value::Constructor(yn, ys)) => {
            if xn != yn || xs.len() != ys.len() {
                false
            } else {
                for (x, y) in xs.iter().zip(ys.iter()) {
                    if !structural_equal(&force(x)?, &force(y)?)? {
                        return Ok(false);
                    }
                }
                true
            }
        }
        _ => false,
    })
}

fn lit_matches(value: &Value, lit: &ExprLit) -> bool {
    match (value, lit) {
        (Value::Int(a), ExprLit::Int(b)) => a == b,
        (Value::Float(a), ExprLit::Float(b)) => a == b,
        (Value::Str(a), ExprLit::Str(b)) => a == b,
        (Value::Bool(a), ExprLit::Bool(b)) => a == b,
        (Value::BigInt(a), ExprLit::Big(b)) => a == b,
        _ => false,
    }
}

/// Matches `pat` against `val`, forcing only as much as each pattern kind
/// requires. On success, every binding introduced along the way is
/// installed into `env`; on failure, `env` is left untouched.
pub fn match_pattern(pat: &Pattern, val: &ValueRef, env: &Env) -> SolisResult<bool> {
    let mut bindings = Vec::new();
    if collect_bindings(pat, val, &mut bindings)? {
        for (name, value) in bindings {
            env.bind(name, value);
        }
        Ok(true)
    } else {
        Ok(false)
    }
}

fn collect_bindings(pat: &Pattern, val: &ValueRef, out: &mut Vec<(String, ValueRef)>) -> SolisResult<bool> {
    match pat {
        Pattern::Wildcard => Ok(true),
        Pattern::Var(name) => {
            out.push((name.clone(), Rc::clone(val)));
            Ok(true)
        }
        Pattern::Lit(lit) => {
            let forced = force(val)?;
            Ok(lit_matches(&forced, lit))
        }
        Pattern::List(pats) => {
            let forced = force(val)?;
            let Value::List(items) = &*forced else {
                return Ok(false);
            };
            if items.len() != pats.len() {
                return Ok(false);
            }
            for (p, item) in pats.iter().zip(items.iter()) {
                if !collect_bindings(p, item, out)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Pattern::Cons(name, args) if name == crate::ast::CONS_NAME && args.len() == 2 => {
            let forced = force(val)?;
            let Value::List(items) = &*forced else {
                return Ok(false);
            };
            let Some((head, tail)) = items.split_first() else {
                return Ok(false);
            };
            let tail_value = Rc::new(Value::List(tail.to_vec()));
            if !collect_bindings(&args[0], head, out)? {
                return Ok(false);
            }
            collect_bindings(&args[1], &tail_value, out)
        }
        Pattern::Cons(name, args) => {
            let forced = force(val)?;
            let Value::Constructor(cname, values) = &*forced else {
                return Ok(false);
            };
            if cname != name {
                return Ok(false);
            }
            if values.len() != args.len() {
                return Err(Error::arity_mismatch(format!(
                    "constructor `{name}` expects {} argument(s), pattern supplies {}",
                    values.len(),
                    args.len()
                )));
            }
            for (p, v) in args.iter().zip(values.iter()) {
                if !collect_bindings(p, v, out)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Pattern::Record(fields) => {
            let forced = force(val)?;
            let Value::Record(map) = &*forced else {
                return Ok(false);
            };
            for (name, fpat) in fields {
                let Some(fv) = map.get(name) else {
                    return Err(Error::no_such_field(name));
                };
                if !collect_bindings(fpat, fv, out)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
    }
}

/// Renders a value the way `show` and the CLI's result-printing do: not a
/// full pretty-printer, just a readable, forced rendition.
pub fn format_value(value: &ValueRef) -> SolisResult<String> {
    let v = force(value)?;
    Ok(match &*v {
        Value::Int(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Str(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::BigInt(b) => b.to_string(),
        Value::List(items) => {
            let parts = items.iter().map(format_value).collect::<SolisResult<Vec<_>>>()?;
            format!("[{}]", parts.join(", "))
        }
        Value::Record(fields) => {
            let parts = fields
                .iter()
                .map(|(k, v)| Ok(format!("{k} = {}", format_value(v)?)))
                .collect::<SolisResult<Vec<_>>>()?;
            format!("{{{}}}", parts.join(", "))
        }
        Value::Constructor(name, args) => {
            if args.is_empty() {
                name.clone()
            } else {
                let parts = args.iter().map(format_value).collect::<SolisResult<Vec<_>>>()?;
                format!("{name} {}", parts.join(" "))
            }
        }
        Value::Function(_) => "<function>".to_string(),
        Value::Thunk(_) => unreachable!("force always resolves past Thunk"),
    })
}

fn install_function(decl: &FunctionDecl, env: &Env) {
    if decl.params.is_empty() {
        // A zero-parameter declaration is a thunk installed before its own
        // body is evaluated, so self- and mutual recursion close over the
        // environment that already contains this very binding.
        let cell = Rc::new(std::cell::RefCell::new(ThunkState::Suspended(Rc::clone(env), Rc::new(decl.body.clone()))));
        env.bind(decl.name.clone(), Rc::new(Value::Thunk(cell)));
    } else {
        let value = make_closure(&decl.params, &decl.body, env);
        env.bind(decl.name.clone(), value);
    }
}

fn install_type(decl: &TypeDecl, env: &Env, constructors: &mut IndexMap<String, usize>) {
    if let TypeRhs::Variants(variants) = &decl.rhs {
        for (name, arg_types) in variants {
            let arity = arg_types.len();
            constructors.insert(name.clone(), arity);
            env.bind(name.clone(), make_constructor(name, arity));
        }
    }
}

/// Ties the pipeline together: a global environment of bindings, the
/// declarations installed into it (retained so thunks that close over
/// their `Expr` trees stay valid), the constructor arity registry, and the
/// two-field module/namespace seam described in [`crate::module`].
pub struct Interpreter {
    global: Env,
    declarations: Vec<Decl>,
    constructors: IndexMap<String, usize>,
    module_resolver: Option<Box<dyn ModuleResolver>>,
    namespace: NamespaceTable,
    current_directory: PathBuf,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            global: Environment::builtins(),
            declarations: Vec::new(),
            constructors: IndexMap::new(),
            module_resolver: None,
            namespace: NamespaceTable::new(),
            current_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Evaluates an expression against the global environment.
    pub fn eval(&self, expr: &Expr) -> SolisResult<ValueRef> {
        eval(expr, &self.global)
    }

    /// Evaluates an expression against an explicit environment, e.g. one
    /// produced while stepping through a `do`-block interactively.
    pub fn eval_in(&self, expr: &Expr, env: &Env) -> SolisResult<ValueRef> {
        eval(expr, env)
    }

    /// Installs a declaration's side effects (bindings, constructor
    /// registrations) without retaining the AST node.
    pub fn eval_decl(&mut self, decl: &Decl) -> SolisResult<()> {
        match decl {
            Decl::Function(f) => install_function(f, &self.global),
            Decl::Type(t) => install_type(t, &self.global, &mut self.constructors),
            // Trait and impl declarations contribute nothing a bare evaluator
            // can act on: method dispatch is a type-checker concern external
            // to this core.
            Decl::Trait(_) | Decl::Impl(_) => {}
        }
        Ok(())
    }

    /// As [`Self::eval_decl`], but takes ownership and retains the AST so
    /// thunks that close over it (e.g. a zero-parameter binding's body)
    /// remain valid for the interpreter's lifetime.
    pub fn eval_and_store(&mut self, decl: Decl) -> SolisResult<()> {
        self.eval_decl(&decl)?;
        self.declarations.push(decl);
        Ok(())
    }

    /// Installs every declaration in a parsed module, in order. Module
    /// headers and import declarations are recorded only insofar as the
    /// core's two-field seam requires; resolving an import to a file is the
    /// external module resolver's job.
    pub fn eval_module(&mut self, module: crate::ast::Module) -> SolisResult<()> {
        for decl in module.declarations {
            self.eval_and_store(decl)?;
        }
        Ok(())
    }

    pub fn add_binding(&self, name: impl Into<String>, value: ValueRef) {
        self.global.bind(name, value);
    }

    pub fn value_to_string(&self, value: &ValueRef) -> SolisResult<String> {
        format_value(value)
    }

    pub fn get_binding_names(&self) -> Vec<String> {
        self.global.local_names()
    }

    pub fn get_binding(&self, name: &str) -> Option<ValueRef> {
        self.global.lookup(name)
    }

    pub fn has_binding(&self, name: &str) -> bool {
        self.global.has(name)
    }

    pub fn get_declarations(&self) -> &[Decl] {
        &self.declarations
    }

    pub fn set_module_resolver(&mut self, resolver: Box<dyn ModuleResolver>) {
        self.module_resolver = Some(resolver);
    }

    pub fn get_module_resolver(&self) -> Option<&dyn ModuleResolver> {
        self.module_resolver.as_deref()
    }

    pub fn namespace(&self) -> &NamespaceTable {
        &self.namespace
    }

    pub fn namespace_mut(&mut self) -> &mut NamespaceTable {
        &mut self.namespace
    }

    pub fn set_current_directory(&mut self, dir: PathBuf) {
        self.current_directory = dir;
    }

    pub fn get_current_directory(&self) -> &Path {
        &self.current_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn eval_source(source: &str) -> ValueRef {
        let mut interpreter = Interpreter::new();
        let tokens = Lexer::new(source).tokenize();
        let mut parser = Parser::new(tokens);
        let module = parser.parse_module();
        interpreter.eval_module(module).expect("module installs cleanly");
        let main = interpreter.get_binding("main").expect("scenario defines `main`");
        force(&main).expect("main forces cleanly")
    }

    fn as_int(v: &ValueRef) -> i64 {
        match &**v {
            Value::Int(n) => *n,
            other => panic!("expected Int, got {:?}", other),
        }
    }

    fn as_bool(v: &ValueRef) -> bool {
        match &**v {
            Value::Bool(b) => *b,
            other => panic!("expected Bool, got {:?}", other),
        }
    }

    #[test]
    fn curried_addition() {
        let v = eval_source("let main = (\\x -> \\y -> x + y) 5 3");
        assert_eq!(as_int(&v), 8);
    }

    #[test]
    fn recursive_factorial() {
        let v = eval_source("let fact = \\n -> if n <= 1 then 1 else n * fact (n - 1)\nlet main = fact 5");
        assert_eq!(as_int(&v), 120);
    }

    #[test]
    fn list_cons_pattern_match() {
        let v = eval_source("let main = match [10,20,30] { (x:xs) => x }");
        assert_eq!(as_int(&v), 10);
    }

    #[test]
    fn record_update_preserves_other_fields() {
        let v = eval_source("let main = let p = { name = \"Alice\", age = 30 } in let p2 = { p | age = 31 } in p2.age");
        assert_eq!(as_int(&v), 31);
    }

    #[test]
    fn do_block_sequencing() {
        let v = eval_source("let main = do { let x = 10; let y = 20; x + y }");
        assert_eq!(as_int(&v), 30);
    }

    #[test]
    fn right_associative_operators_in_declarations() {
        let v = eval_source("let x = 10\nlet y = 20\nlet main = x * y + 5");
        assert_eq!(as_int(&v), 250);
    }

    #[test]
    fn data_constructor_pattern_match() {
        let v = eval_source("data Maybe a = Just a | Nothing\nlet main = match (Just 42) { Just n => n, Nothing => 0 }");
        assert_eq!(as_int(&v), 42);
    }

    #[test]
    fn short_circuit_and_skips_right_side() {
        let v = eval_source("let boom = \\_ -> match 1 { 2 => true }\nlet main = false && boom 0");
        assert!(!as_bool(&v));
    }

    #[test]
    fn mutual_recursion_either_order() {
        let v = eval_source(
            "let is_even = \\n -> if n == 0 then true else is_odd (n - 1)\nlet is_odd = \\n -> if n == 0 then false else is_even (n - 1)\nlet main = is_even 10",
        );
        assert!(as_bool(&v));
    }
}
