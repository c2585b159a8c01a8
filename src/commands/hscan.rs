use crate::request::{Builder, Request};

/// Incrementally iterate the fields of the hash at `key`.
///
/// Ref: <https://redis.io/docs/latest/commands/hscan/>
pub fn hscan(key: impl Into<String>, cursor: u64, options: HscanOptions) -> Request {
    let mut builder = Builder::new("HSCAN").arg(key.into()).arg(cursor);

    if let Some(pattern) = &options.pattern {
        builder = builder.arg("MATCH").arg(pattern);
    }
    if let Some(count) = options.count {
        builder = builder.arg("COUNT").arg(count);
    }

    builder.build()
}

#[derive(Clone, Debug, Default)]
pub struct HscanOptions {
    pub pattern: Option<String>,
    pub count: Option<u64>,
}
