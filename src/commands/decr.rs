use crate::request::{Builder, Request};

/// Decrement the integer value of `key` by one.
pub fn decr(key: impl Into<String>) -> Request {
    Builder::new("DECR").arg(key.into()).build()
}
