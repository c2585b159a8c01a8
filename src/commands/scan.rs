use crate::request::{Builder, Request};

/// Incrementally iterate the key space from `cursor`.
///
/// Ref: <https://redis.io/docs/latest/commands/scan>
pub fn scan(cursor: u64, options: ScanOptions) -> Request {
    let mut builder = Builder::new("SCAN").arg(cursor);

    if let Some(pattern) = &options.pattern {
        builder = builder.arg("MATCH").arg(pattern);
    }
    if let Some(count) = options.count {
        builder = builder.arg("COUNT").arg(count);
    }
    if let Some(type_filter) = &options.type_filter {
        builder = builder.arg("TYPE").arg(type_filter);
    }

    builder.build()
}

#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// MATCH: glob pattern keys must match.
    pub pattern: Option<String>,
    /// COUNT: iteration batch hint.
    pub count: Option<u64>,
    /// TYPE: only keys holding this value type.
    pub type_filter: Option<String>,
}
