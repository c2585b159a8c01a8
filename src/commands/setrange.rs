use crate::request::{Builder, IntoInput, Request};

/// Overwrite part of the string stored at `key`, starting at `offset`.
pub fn setrange(key: impl Into<String>, offset: u64, value: impl IntoInput) -> Request {
    Builder::new("SETRANGE")
        .arg(key.into())
        .arg(offset)
        .input(value)
        .build()
}
