use crate::request::{Builder, IntoInput, Request};

/// Set multiple keys to multiple values in one command.
///
/// Ref: <https://redis.io/docs/latest/commands/mset/>
pub fn mset<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Request
where
    K: Into<String>,
    V: IntoInput,
{
    let mut builder = Builder::new("MSET");
    for (key, value) in pairs {
        builder = builder.arg(key.into()).input(value);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_request;

    #[test]
    fn binary_values_become_successive_payload_segments() {
        let request = mset([("hoge", &b"piyo"[..]), ("hogefuga", &b"fuga"[..])]);

        assert_eq!(request.payload().as_ref(), b"piyo\r\nfuga");
        assert_eq!(
            encode_request(&request).unwrap().as_ref(),
            b"*5\r\n$4\r\nMSET\r\n$4\r\nhoge\r\n$4\r\npiyo\r\n$8\r\nhogefuga\r\n$4\r\nfuga\r\n"
        );
    }

    #[test]
    fn textual_values_stay_in_the_argument_list() {
        let request = mset([("hoge", "piyo"), ("fuga", "hogera")]);

        assert!(request.payload().is_empty());
        assert_eq!(
            encode_request(&request).unwrap().as_ref(),
            b"*5\r\n$4\r\nMSET\r\n$4\r\nhoge\r\n$4\r\npiyo\r\n$4\r\nfuga\r\n$6\r\nhogera\r\n"
        );
    }
}
