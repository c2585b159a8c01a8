use crate::request::{Builder, Request};

/// Move `key` to another database.
pub fn move_(key: impl Into<String>, db: i64) -> Request {
    Builder::new("MOVE").arg(key.into()).arg(db).build()
}
