use crate::request::{Builder, Request};

/// Get the value of `key` and delete the key.
pub fn getdel(key: impl Into<String>) -> Request {
    Builder::new("GETDEL").arg(key.into()).build()
}
