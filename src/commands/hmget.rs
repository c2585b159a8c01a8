use crate::request::{Builder, Request};

/// Get the values of the given fields in the hash stored at `key`.
pub fn hmget<F: Into<String>>(
    key: impl Into<String>,
    fields: impl IntoIterator<Item = F>,
) -> Request {
    let mut builder = Builder::new("HMGET").arg(key.into());
    for field in fields {
        builder = builder.arg(field.into());
    }
    builder.build()
}
