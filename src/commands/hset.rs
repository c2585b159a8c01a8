use crate::request::{Builder, IntoInput, Request};

/// Set fields of the hash stored at `key`.
pub fn hset<F, V>(key: impl Into<String>, pairs: impl IntoIterator<Item = (F, V)>) -> Request
where
    F: Into<String>,
    V: IntoInput,
{
    let mut builder = Builder::new("HSET").arg(key.into());
    for (field, value) in pairs {
        builder = builder.arg(field.into()).input(value);
    }
    builder.build()
}
