use crate::request::{Builder, Request};

/// Remove the expiration from `key`.
pub fn persist(key: impl Into<String>) -> Request {
    Builder::new("PERSIST").arg(key.into()).build()
}
