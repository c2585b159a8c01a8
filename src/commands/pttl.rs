use crate::request::{Builder, Request};

/// Get the remaining time to live of `key`, in milliseconds.
pub fn pttl(key: impl Into<String>) -> Request {
    Builder::new("PTTL").arg(key.into()).build()
}
