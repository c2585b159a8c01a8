use crate::request::{Builder, Request};

/// Remove the given fields from the hash stored at `key`.
pub fn hdel<F: Into<String>>(key: impl Into<String>, fields: impl IntoIterator<Item = F>) -> Request {
    let mut builder = Builder::new("HDEL").arg(key.into());
    for field in fields {
        builder = builder.arg(field.into());
    }
    builder.build()
}
