use crate::request::{Builder, Request};

/// Get the value of `field` in the hash stored at `key`.
pub fn hget(key: impl Into<String>, field: impl Into<String>) -> Request {
    Builder::new("HGET").arg(key.into()).arg(field.into()).build()
}
