use std::rc::Rc;

use crate::error::Error;
use crate::interpreter::{apply, force};
use crate::value::{Env, Value};

use super::native1;

pub fn install(env: &Env) {
    env.bind(
        "filter",
        native1(|pred| {
            Ok(native1(move |xs| {
                let forced = force(&xs)?;
                let Value::List(items) = &*forced else {
                    return Err(Error::type_mismatch(format!("`filter` expects a List, got {}", forced.type_name())));
                };
                let mut out = Vec::new();
                for item in items {
                    let kept = apply(&pred, Rc::clone(item))?;
                    match &*force(&kept)? {
                        Value::Bool(true) => out.push(Rc::clone(item)),
                        Value::Bool(false) => {}
                        other => {
                            return Err(Error::type_mismatch(format!(
                                "`filter` predicate must return Bool, got {}",
                                other.type_name()
                            )));
                        }
                    }
                }
                Ok(Rc::new(Value::List(out)))
            }))
        }),
    );
}
