use crate::request::{Builder, Request};

/// Return a random key from the current database.
pub fn randomkey() -> Request {
    Builder::new("RANDOMKEY").build()
}
