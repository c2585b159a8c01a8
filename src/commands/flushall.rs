use crate::request::{Builder, Request};

/// Remove all keys from all databases.
pub fn flushall() -> Request {
    Builder::new("FLUSHALL").build()
}
