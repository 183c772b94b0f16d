use std::rc::Rc;

use crate::error::Error;
use crate::interpreter::{apply, force};
use crate::value::{Env, Value};

use super::native1;

pub fn install(env: &Env) {
    env.bind(
        "map",
        native1(|f| {
            Ok(native1(move |xs| {
                let forced = force(&xs)?;
                let Value::List(items) = &*forced else {
                    return Err(Error::type_mismatch(format!("`map` expects a List, got {}", forced.type_name())));
                };
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(apply(&f, Rc::clone(item))?);
                }
                Ok(Rc::new(Value::List(out)))
            }))
        }),
    );
}
