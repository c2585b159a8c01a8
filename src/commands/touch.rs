use crate::request::{Builder, Request};

/// Update the last-access time of the given keys.
pub fn touch<K: Into<String>>(keys: impl IntoIterator<Item = K>) -> Request {
    let mut builder = Builder::new("TOUCH");
    for key in keys {
        builder = builder.arg(key.into());
    }
    builder.build()
}
