use crate::request::{Builder, Request};

/// Get all fields and values of the hash stored at `key`.
pub fn hgetall(key: impl Into<String>) -> Request {
    Builder::new("HGETALL").arg(key.into()).build()
}
