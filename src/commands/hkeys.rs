use crate::request::{Builder, Request};

/// Get all field names of the hash stored at `key`.
pub fn hkeys(key: impl Into<String>) -> Request {
    Builder::new("HKEYS").arg(key.into()).build()
}
