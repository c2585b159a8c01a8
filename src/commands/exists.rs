use crate::request::{Builder, Request};

/// Check how many of the given keys exist.
pub fn exists<K: Into<String>>(keys: impl IntoIterator<Item = K>) -> Request {
    let mut builder = Builder::new("EXISTS");
    for key in keys {
        builder = builder.arg(key.into());
    }
    builder.build()
}
