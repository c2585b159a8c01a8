use crate::request::{Builder, Request};

/// Remove the given keys, reclaiming memory asynchronously.
pub fn unlink<K: Into<String>>(keys: impl IntoIterator<Item = K>) -> Request {
    let mut builder = Builder::new("UNLINK");
    for key in keys {
        builder = builder.arg(key.into());
    }
    builder.build()
}
