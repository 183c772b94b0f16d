use std::rc::Rc;

use crate::error::Error;
use crate::interpreter::force;
use crate::value::{Env, Value};

use super::native1;

pub fn install(env: &Env) {
    env.bind(
        "length",
        native1(|v| {
            let forced = force(&v)?;
            let len = match &*forced {
                Value::List(items) => items.len(),
                Value::Str(s) => s.chars().count(),
                other => {
                    return Err(Error::type_mismatch(format!("`length` expects a List or Str, got {}", other.type_name())));
                }
            };
            Ok(Rc::new(Value::Int(len as i64)))
        }),
    );
}
