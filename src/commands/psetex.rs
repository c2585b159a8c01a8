use crate::request::{Builder, IntoInput, Request};

/// Set `key` to `value` with an expiration in milliseconds.
pub fn psetex(key: impl Into<String>, millis: u64, value: impl IntoInput) -> Request {
    Builder::new("PSETEX")
        .arg(key.into())
        .arg(millis)
        .input(value)
        .build()
}
