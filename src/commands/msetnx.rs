use crate::request::{Builder, IntoInput, Request};

/// Set multiple keys to multiple values only if none of the keys exist.
pub fn msetnx<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Request
where
    K: Into<String>,
    V: IntoInput,
{
    let mut builder = Builder::new("MSETNX");
    for (key, value) in pairs {
        builder = builder.arg(key.into()).input(value);
    }
    builder.build()
}
