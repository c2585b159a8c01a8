use crate::request::{Builder, Request};

/// Increment the integer value of `key` by `increment`.
pub fn incrby(key: impl Into<String>, increment: i64) -> Request {
    Builder::new("INCRBY").arg(key.into()).arg(increment).build()
}
