use crate::request::{Builder, Request};

/// Get the length of the string value stored at `key`.
pub fn strlen(key: impl Into<String>) -> Request {
    Builder::new("STRLEN").arg(key.into()).build()
}
