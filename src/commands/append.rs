use crate::request::{Builder, IntoInput, Request};

/// Append `value` to the string stored at `key`.
///
/// Ref: <https://redis.io/docs/latest/commands/append/>
pub fn append(key: impl Into<String>, value: impl IntoInput) -> Request {
    Builder::new("APPEND").arg(key.into()).input(value).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_request;
    use crate::request::Arg;

    #[test]
    fn binary_value_becomes_a_placeholder() {
        let request = append("hoge", &b"piyo"[..]);

        assert_eq!(request.arguments()[1], Arg::Placeholder);
        assert_eq!(
            encode_request(&request).unwrap().as_ref(),
            b"*3\r\n$6\r\nAPPEND\r\n$4\r\nhoge\r\n$4\r\npiyo\r\n"
        );
    }
}
