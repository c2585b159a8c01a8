use crate::request::{Builder, Request};

/// Get the values of all given keys, in order.
pub fn mget<K: Into<String>>(keys: impl IntoIterator<Item = K>) -> Request {
    let mut builder = Builder::new("MGET");
    for key in keys {
        builder = builder.arg(key.into());
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_request;

    #[test]
    fn an_array_counts_as_the_full_key_list() {
        let encoded = encode_request(&mget(["hoge", "fuga"])).unwrap();

        assert_eq!(
            encoded.as_ref(),
            b"*3\r\n$4\r\nMGET\r\n$4\r\nhoge\r\n$4\r\nfuga\r\n"
        );
    }
}
