use crate::request::{Builder, Request};

/// Operate on integer fields of the string stored at `key`.
///
/// Ref: <https://redis.io/docs/latest/commands/bitfield/>
pub fn bitfield(key: impl Into<String>, ops: impl IntoIterator<Item = BitfieldOp>) -> Request {
    let mut builder = Builder::new("BITFIELD").arg(key.into());

    for op in ops {
        builder = match op {
            BitfieldOp::Get { encoding, offset } => {
                builder.arg("GET").arg(encoding).arg(offset)
            }
            BitfieldOp::Set {
                encoding,
                offset,
                value,
            } => builder.arg("SET").arg(encoding).arg(offset).arg(value),
            BitfieldOp::IncrBy {
                encoding,
                offset,
                increment,
            } => builder.arg("INCRBY").arg(encoding).arg(offset).arg(increment),
            BitfieldOp::Overflow(behavior) => builder.arg("OVERFLOW").arg(match behavior {
                Overflow::Wrap => "WRAP",
                Overflow::Sat => "SAT",
                Overflow::Fail => "FAIL",
            }),
        };
    }

    builder.build()
}

/// One BITFIELD subcommand. Encodings are strings like `u8` or `i16`;
/// offsets are bit offsets (`100`) or typed indexes (`#1`).
#[derive(Clone, Debug)]
pub enum BitfieldOp {
    Get {
        encoding: String,
        offset: String,
    },
    Set {
        encoding: String,
        offset: String,
        value: i64,
    },
    IncrBy {
        encoding: String,
        offset: String,
        increment: i64,
    },
    Overflow(Overflow),
}

#[derive(Clone, Debug)]
pub enum Overflow {
    Wrap,
    Sat,
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_request;

    #[test]
    fn subcommands_keep_their_order() {
        let ops = vec![
            BitfieldOp::Overflow(Overflow::Sat),
            BitfieldOp::IncrBy {
                encoding: "u8".to_string(),
                offset: "#0".to_string(),
                increment: 10,
            },
            BitfieldOp::Get {
                encoding: "u8".to_string(),
                offset: "#0".to_string(),
            },
        ];

        let encoded = encode_request(&bitfield("hoge", ops)).unwrap();

        assert_eq!(
            encoded.as_ref(),
            b"*11\r\n$8\r\nBITFIELD\r\n$4\r\nhoge\r\n$8\r\nOVERFLOW\r\n$3\r\nSAT\r\n$6\r\nINCRBY\r\n$2\r\nu8\r\n$2\r\n#0\r\n$2\r\n10\r\n$3\r\nGET\r\n$2\r\nu8\r\n$2\r\n#0\r\n"
        );
    }
}
