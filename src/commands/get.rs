use crate::request::{Builder, Request};

/// Get the value of `key`.
///
/// Ref: <https://redis.io/docs/latest/commands/get/>
pub fn get(key: impl Into<String>) -> Request {
    Builder::new("GET").arg(key.into()).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_request;

    #[test]
    fn encodes_command_and_key() {
        let encoded = encode_request(&get("hoge")).unwrap();

        assert_eq!(encoded.as_ref(), b"*2\r\n$3\r\nGET\r\n$4\r\nhoge\r\n");
    }
}
