use crate::request::{Builder, Request};

/// Copy the value at `source` to `destination`.
///
/// Ref: <https://redis.io/docs/latest/commands/copy/>
pub fn copy(
    source: impl Into<String>,
    destination: impl Into<String>,
    options: CopyOptions,
) -> Request {
    let mut builder = Builder::new("COPY")
        .arg(source.into())
        .arg(destination.into());

    if let Some(db) = options.db {
        builder = builder.arg("DB").arg(db);
    }
    if options.replace {
        builder = builder.arg("REPLACE");
    }

    builder.build()
}

#[derive(Clone, Debug, Default)]
pub struct CopyOptions {
    /// Copy into this database instead of the current one.
    pub db: Option<i64>,
    /// Overwrite the destination if it exists.
    pub replace: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_request;

    #[test]
    fn defaults_emit_no_flags() {
        let encoded = encode_request(&copy("hoge", "fuga", CopyOptions::default())).unwrap();

        assert_eq!(
            encoded.as_ref(),
            b"*3\r\n$4\r\nCOPY\r\n$4\r\nhoge\r\n$4\r\nfuga\r\n"
        );
    }

    #[test]
    fn flags_flatten_in_field_order() {
        let options = CopyOptions {
            db: Some(2),
            replace: true,
        };

        let encoded = encode_request(&copy("hoge", "fuga", options)).unwrap();

        assert_eq!(
            encoded.as_ref(),
            b"*6\r\n$4\r\nCOPY\r\n$4\r\nhoge\r\n$4\r\nfuga\r\n$2\r\nDB\r\n$1\r\n2\r\n$7\r\nREPLACE\r\n"
        );
    }
}
