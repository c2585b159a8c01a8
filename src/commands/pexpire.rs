use crate::request::{Builder, Request};

/// Set a timeout on `key`, in milliseconds.
pub fn pexpire(key: impl Into<String>, millis: u64) -> Request {
    Builder::new("PEXPIRE").arg(key.into()).arg(millis).build()
}
