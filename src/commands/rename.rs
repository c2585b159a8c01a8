use crate::request::{Builder, Request};

/// Rename `key` to `new_key`, overwriting any existing value.
pub fn rename(key: impl Into<String>, new_key: impl Into<String>) -> Request {
    Builder::new("RENAME")
        .arg(key.into())
        .arg(new_key.into())
        .build()
}
