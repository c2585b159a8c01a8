use crate::request::{Builder, Request};

/// Remove the given keys.
pub fn del<K: Into<String>>(keys: impl IntoIterator<Item = K>) -> Request {
    let mut builder = Builder::new("DEL");
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
    fn accepts_any_key_collection() {
        let from_array = encode_request(&del(["hoge", "fuga"])).unwrap();
        let from_vec = encode_request(&del(vec!["hoge".to_string(), "fuga".to_string()])).unwrap();

        assert_eq!(from_array, from_vec);
        assert_eq!(
            from_array.as_ref(),
            b"*3\r\n$3\r\nDEL\r\n$4\r\nhoge\r\n$4\r\nfuga\r\n"
        );
    }
}
