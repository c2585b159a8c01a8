use crate::request::{Builder, Request};

/// Switch the connection to database `db`.
pub fn select(db: i64) -> Request {
    Builder::new("SELECT").arg(db).build()
}
