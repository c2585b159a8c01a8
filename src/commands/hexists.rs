use crate::request::{Builder, Request};

/// Check whether `field` exists in the hash stored at `key`.
pub fn hexists(key: impl Into<String>, field: impl Into<String>) -> Request {
    Builder::new("HEXISTS")
        .arg(key.into())
        .arg(field.into())
        .build()
}
