use crate::request::{Builder, Request};

/// Rename `key` to `new_key` only if `new_key` does not exist.
pub fn renamenx(key: impl Into<String>, new_key: impl Into<String>) -> Request {
    Builder::new("RENAMENX")
        .arg(key.into())
        .arg(new_key.into())
        .build()
}
