use crate::request::{Builder, Request};

/// Get the value of `key` and optionally set its expiration.
///
/// Ref: <https://redis.io/docs/latest/commands/getex/>
pub fn getex(key: impl Into<String>, ttl: Option<Ttl>) -> Request {
    let mut builder = Builder::new("GETEX").arg(key.into());

    if let Some(ttl) = ttl {
        builder = match ttl {
            Ttl::Ex(seconds) => builder.arg("EX").arg(seconds),
            Ttl::Px(millis) => builder.arg("PX").arg(millis),
            Ttl::ExAt(timestamp) => builder.arg("EXAT").arg(timestamp),
            Ttl::PxAt(timestamp) => builder.arg("PXAT").arg(timestamp),
            Ttl::Persist => builder.arg("PERSIST"),
        };
    }

    builder.build()
}

#[derive(Clone, Debug, PartialEq)]
pub enum Ttl {
    Ex(u64),
    Px(u64),
    ExAt(u64),
    PxAt(u64),
    /// Remove the expiration.
    Persist,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_request;

    #[test]
    fn no_ttl_encodes_key_only() {
        let encoded = encode_request(&getex("hoge", None)).unwrap();

        assert_eq!(encoded.as_ref(), b"*2\r\n$5\r\nGETEX\r\n$4\r\nhoge\r\n");
    }

    #[test]
    fn ex_encodes_keyword_and_seconds() {
        let encoded = encode_request(&getex("hoge", Some(Ttl::Ex(10)))).unwrap();

        assert_eq!(
            encoded.as_ref(),
            b"*4\r\n$5\r\nGETEX\r\n$4\r\nhoge\r\n$2\r\nEX\r\n$2\r\n10\r\n"
        );
    }

    #[test]
    fn persist_is_a_bare_keyword() {
        let encoded = encode_request(&getex("hoge", Some(Ttl::Persist))).unwrap();

        assert_eq!(
            encoded.as_ref(),
            b"*3\r\n$5\r\nGETEX\r\n$4\r\nhoge\r\n$7\r\nPERSIST\r\n"
        );
    }
}
