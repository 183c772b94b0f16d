use std::rc::Rc;

use crate::error::Error;
use crate::interpreter::force;
use crate::value::{Env, Value};

use super::native1;

pub fn install(env: &Env) {
    env.bind(
        "reverse",
        native1(|v| {
            let forced = force(&v)?;
            match &*forced {
                Value::List(items) => {
                    let mut reversed = items.clone();
                    reversed.reverse();
                    Ok(Rc::new(Value::List(reversed)))
                }
                Value::Str(s) => Ok(Rc::new(Value::Str(s.chars().rev().collect()))),
                other => Err(Error::type_mismatch(format!("`reverse` expects a List or Str, got {}", other.type_name()))),
            }
        }),
    );
}
