use crate::request::{Builder, IntoInput, Request};

/// Set `field` in the hash at `key` only if the field does not exist.
pub fn hsetnx(
    key: impl Into<String>,
    field: impl Into<String>,
    value: impl IntoInput,
) -> Request {
    Builder::new("HSETNX")
        .arg(key.into())
        .arg(field.into())
        .input(value)
        .build()
}
