use crate::request::{Builder, Request};

/// Sort the elements of the list, set or sorted set at `key`.
///
/// Ref: <https://redis.io/docs/latest/commands/sort/>
pub fn sort(key: impl Into<String>, options: SortOptions) -> Request {
    let mut builder = Builder::new("SORT").arg(key.into());

    if let Some(by) = &options.by {
        builder = builder.arg("BY").arg(by);
    }
    if let Some((offset, count)) = options.limit {
        builder = builder.arg("LIMIT").arg(offset).arg(count);
    }
    // One GET pair per pattern, order preserved.
    for pattern in &options.get {
        builder = builder.arg("GET").arg(pattern);
    }
    if let Some(order) = &options.order {
        builder = builder.arg(match order {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        });
    }
    if options.alpha {
        builder = builder.arg("ALPHA");
    }
    if let Some(store) = &options.store {
        builder = builder.arg("STORE").arg(store);
    }

    builder.build()
}

#[derive(Clone, Debug, Default)]
pub struct SortOptions {
    pub by: Option<String>,
    pub limit: Option<(i64, i64)>,
    pub get: Vec<String>,
    pub order: Option<Order>,
    pub alpha: bool,
    pub store: Option<String>,
}

#[derive(Clone, Debug)]
pub enum Order {
    Asc,
    Desc,
}
