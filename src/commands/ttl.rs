use crate::request::{Builder, Request};

/// Get the remaining time to live of `key`, in seconds.
pub fn ttl(key: impl Into<String>) -> Request {
    Builder::new("TTL").arg(key.into()).build()
}
