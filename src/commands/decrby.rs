use crate::request::{Builder, Request};

/// Decrement the integer value of `key` by `decrement`.
pub fn decrby(key: impl Into<String>, decrement: i64) -> Request {
    Builder::new("DECRBY").arg(key.into()).arg(decrement).build()
}
