use crate::request::{Builder, IntoInput, Request};

/// Atomically set `key` to `value` and return the old value.
pub fn getset(key: impl Into<String>, value: impl IntoInput) -> Request {
    Builder::new("GETSET").arg(key.into()).input(value).build()
}
