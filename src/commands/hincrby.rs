use crate::request::{Builder, Request};

/// Increment the integer value of `field` in the hash at `key`.
pub fn hincrby(key: impl Into<String>, field: impl Into<String>, increment: i64) -> Request {
    Builder::new("HINCRBY")
        .arg(key.into())
        .arg(field.into())
        .arg(increment)
        .build()
}
