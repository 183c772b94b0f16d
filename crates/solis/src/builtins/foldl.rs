use std::rc::Rc;

use crate::error::Error;
use crate::interpreter::{apply, force};
use crate::value::{Env, Value};

use super::native1;

pub fn install(env: &Env) {
    env.bind(
        "foldl",
        native1(|f| {
            Ok(native1(move |z| {
                let f = Rc::clone(&f);
                Ok(native1(move |xs| {
                    let forced = force(&xs)?;
                    let Value::List(items) = &*forced else {
                        return Err(Error::type_mismatch(format!("`foldl` expects a List, got {}", forced.type_name())));
                    };
                    let mut acc = Rc::clone(&z);
                    for item in items {
                        let stepped = apply(&f, acc)?;
                        let applied = apply(&stepped, Rc::clone(item))?;
                        acc = force(&applied)?;
                    }
                    Ok(acc)
                }))
            }))
        }),
    );
}
