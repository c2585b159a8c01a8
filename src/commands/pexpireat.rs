use std::time::{SystemTime, UNIX_EPOCH};

use crate::request::{Builder, Request};

/// Expire `key` at an absolute point in time, on the millisecond wire
/// unit (whole seconds scaled by 1000).
pub fn pexpireat(key: impl Into<String>, when: SystemTime) -> Request {
    let millis = when
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() * 1000)
        .unwrap_or(0);

    Builder::new("PEXPIREAT").arg(key.into()).arg(millis).build()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::codec::encode_request;

    #[test]
    fn timestamps_scale_seconds_by_one_thousand() {
        let when = UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        let encoded = encode_request(&pexpireat("hoge", when)).unwrap();

        assert_eq!(
            encoded.as_ref(),
            b"*3\r\n$9\r\nPEXPIREAT\r\n$4\r\nhoge\r\n$13\r\n1700000000000\r\n"
        );
    }
}
