use crate::request::{Builder, Request};

/// Get the number of keys in the current database.
pub fn dbsize() -> Request {
    Builder::new("DBSIZE").build()
}
