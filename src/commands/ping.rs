use crate::request::{Builder, Request};

/// Test the connection.
pub fn ping() -> Request {
    Builder::new("PING").build()
}
