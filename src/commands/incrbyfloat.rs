use crate::request::{Builder, Request};

/// Increment the float value of `key` by `increment`.
///
/// Ref: <https://redis.io/docs/latest/commands/incrbyfloat/>
pub fn incrbyfloat(key: impl Into<String>, increment: f64) -> Request {
    Builder::new("INCRBYFLOAT")
        .arg(key.into())
        .arg(increment)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_request;

    #[test]
    fn floats_use_the_shortest_decimal_form() {
        let encoded = encode_request(&incrbyfloat("hoge", 0.1)).unwrap();
        assert_eq!(
            encoded.as_ref(),
            b"*3\r\n$11\r\nINCRBYFLOAT\r\n$4\r\nhoge\r\n$3\r\n0.1\r\n"
        );

        let encoded = encode_request(&incrbyfloat("hoge", 5000.0)).unwrap();
        assert_eq!(
            encoded.as_ref(),
            b"*3\r\n$11\r\nINCRBYFLOAT\r\n$4\r\nhoge\r\n$4\r\n5000\r\n"
        );
    }
}
