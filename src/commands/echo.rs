use crate::request::{Builder, IntoInput, Request};

/// Ask the server to echo `message` back.
pub fn echo(message: impl IntoInput) -> Request {
    Builder::new("ECHO").input(message).build()
}
