use crate::request::{Builder, IntoInput, Request};

/// Set multiple fields of the hash stored at `key`.
///
/// Ref: <https://redis.io/docs/latest/commands/hmset/>
pub fn hmset<F, V>(key: impl Into<String>, pairs: impl IntoIterator<Item = (F, V)>) -> Request
where
    F: Into<String>,
    V: IntoInput,
{
    let mut builder = Builder::new("HMSET").arg(key.into());
    for (field, value) in pairs {
        builder = builder.arg(field.into()).input(value);
    }
    builder.build()
}
