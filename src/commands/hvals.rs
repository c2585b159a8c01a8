use crate::request::{Builder, Request};

/// Get all values of the hash stored at `key`.
pub fn hvals(key: impl Into<String>) -> Request {
    Builder::new("HVALS").arg(key.into()).build()
}
