use crate::request::{Builder, IntoInput, Request};

/// Set `key` to `value` with an expiration in seconds.
pub fn setex(key: impl Into<String>, seconds: u64, value: impl IntoInput) -> Request {
    Builder::new("SETEX")
        .arg(key.into())
        .arg(seconds)
        .input(value)
        .build()
}
