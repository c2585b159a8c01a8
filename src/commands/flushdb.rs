use crate::request::{Builder, Request};

/// Remove all keys from the current database.
pub fn flushdb() -> Request {
    Builder::new("FLUSHDB").build()
}
