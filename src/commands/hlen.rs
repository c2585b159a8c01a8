use crate::request::{Builder, Request};

/// Get the number of fields in the hash stored at `key`.
pub fn hlen(key: impl Into<String>) -> Request {
    Builder::new("HLEN").arg(key.into()).build()
}
