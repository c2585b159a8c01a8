use crate::request::{Builder, Request};

/// Get the substring of the string value stored at `key`, inclusive on
/// both ends; negative offsets count from the end.
pub fn getrange(key: impl Into<String>, start: i64, end: i64) -> Request {
    Builder::new("GETRANGE")
        .arg(key.into())
        .arg(start)
        .arg(end)
        .build()
}
