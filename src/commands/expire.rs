use crate::request::{Builder, Request};

/// Set a timeout on `key`, in seconds.
pub fn expire(key: impl Into<String>, seconds: u64) -> Request {
    Builder::new("EXPIRE").arg(key.into()).arg(seconds).build()
}
