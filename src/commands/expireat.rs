use std::time::{SystemTime, UNIX_EPOCH};

use crate::request::{Builder, Request};

/// Expire `key` at an absolute point in time, second precision.
///
/// Ref: <https://redis.io/docs/latest/commands/expireat/>
pub fn expireat(key: impl Into<String>, when: SystemTime) -> Request {
    let seconds = when
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);

    Builder::new("EXPIREAT").arg(key.into()).arg(seconds).build()
}
