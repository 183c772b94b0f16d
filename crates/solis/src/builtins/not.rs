use std::rc::Rc;

use crate::error::Error;
use crate::interpreter::force;
use crate::value::{Env, Value};

use super::native1;

pub fn install(env: &Env) {
    env.bind(
        "not",
        native1(|v| {
            let forced = force(&v)?;
            match &*forced {
                Value::Bool(b) => Ok(Rc::new(Value::Bool(!b))),
                other => Err(Error::type_mismatch(format!("`not` expects a Bool, got {}", other.type_name()))),
            }
        }),
    );
}
