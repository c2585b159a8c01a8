use crate::request::{Builder, IntoInput, Request};

/// Set `key` to `value` only if the key does not exist.
pub fn setnx(key: impl Into<String>, value: impl IntoInput) -> Request {
    Builder::new("SETNX").arg(key.into()).input(value).build()
}
