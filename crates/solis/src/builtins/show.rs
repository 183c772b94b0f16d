use std::rc::Rc;

use crate::interpreter::format_value;
use crate::value::{Env, Value};

use super::native1;

pub fn install(env: &Env) {
    env.bind("show", native1(|v| Ok(Rc::new(Value::Str(format_value(&v)?)))));
}
