use crate::request::{Builder, Request};

/// List all keys matching `pattern`.
pub fn keys(pattern: impl Into<String>) -> Request {
    Builder::new("KEYS").arg(pattern.into()).build()
}
