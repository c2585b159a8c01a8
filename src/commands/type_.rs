use crate::request::{Builder, Request};

/// Get the type of the value stored at `key`.
pub fn type_(key: impl Into<String>) -> Request {
    Builder::new("TYPE").arg(key.into()).build()
}
