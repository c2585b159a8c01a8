use crate::request::{Builder, Request};

/// Increment the integer value of `key` by one.
pub fn incr(key: impl Into<String>) -> Request {
    Builder::new("INCR").arg(key.into()).build()
}
