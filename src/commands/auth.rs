use crate::request::{Builder, Request};

/// Authenticate with the requirepass password.
pub fn auth(password: impl Into<String>) -> Request {
    Builder::new("AUTH").arg(password.into()).build()
}

/// Authenticate as a named user (ACL style).
pub fn auth_with_username(username: impl Into<String>, password: impl Into<String>) -> Request {
    Builder::new("AUTH")
        .arg(username.into())
        .arg(password.into())
        .build()
}
