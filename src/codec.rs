// https://redis.io/docs/reference/protocol-spec

use std::io::Cursor;

use bytes::{Buf, Bytes, BytesMut};
use tokio_util::codec::Decoder;

use crate::error::{Error, Result};
use crate::reply::Reply;
use crate::request::{Arg, Request};
use crate::value::Value;

pub(crate) static CRLF: &[u8; 2] = b"\r\n";

/// Serialize a request into its RESP wire form: an array of `k + 1` bulk
/// strings, the command name first.
///
/// Placeholder arguments consume the CRLF-separated segments of the
/// request payload left to right. The segment count must match the
/// placeholder count exactly; a mismatch is a [`Error::MalformedRequest`].
pub fn encode_request(request: &Request) -> Result<Bytes> {
    if request.command().is_empty() {
        return Err(Error::MalformedRequest("empty command name".to_string()));
    }

    let segments = split_segments(request.payload());
    let placeholders = request
        .arguments()
        .iter()
        .filter(|arg| matches!(arg, Arg::Placeholder))
        .count();

    if placeholders != segments.len() {
        return Err(Error::MalformedRequest(format!(
            "{} placeholder argument(s) for {} payload segment(s)",
            placeholders,
            segments.len()
        )));
    }

    // The output size is known in advance, so the buffer is allocated
    // exactly once.
    let bulk_count = request.arguments().len() + 1;
    let mut size = 1 + decimal_width(bulk_count as i64) + CRLF.len();
    size += bulk_size(request.command().len());
    let mut segment_sizes = segments.iter();
    for arg in request.arguments() {
        size += match arg {
            Arg::Text(text) => bulk_size(text.len()),
            Arg::Placeholder => bulk_size(segment_sizes.next().map(Bytes::len).unwrap_or(0)),
        };
    }

    let mut buf = BytesMut::with_capacity(size);
    buf.extend_from_slice(b"*");
    buf.extend_from_slice(bulk_count.to_string().as_bytes());
    buf.extend_from_slice(CRLF);
    put_bulk(&mut buf, request.command().as_bytes());

    let mut remaining_segments = segments.into_iter();
    for arg in request.arguments() {
        match arg {
            Arg::Text(text) => put_bulk(&mut buf, text.as_bytes()),
            // Counts were checked above, the iterator cannot run dry.
            Arg::Placeholder => match remaining_segments.next() {
                Some(segment) => put_bulk(&mut buf, &segment),
                None => unreachable!("segment count verified against placeholder count"),
            },
        }
    }

    Ok(buf.freeze())
}

// $<len>\r\n<bytes>\r\n
fn put_bulk(buf: &mut BytesMut, bytes: &[u8]) {
    buf.extend_from_slice(b"$");
    buf.extend_from_slice(bytes.len().to_string().as_bytes());
    buf.extend_from_slice(CRLF);
    buf.extend_from_slice(bytes);
    buf.extend_from_slice(CRLF);
}

fn bulk_size(len: usize) -> usize {
    1 + decimal_width(len as i64) + CRLF.len() + len + CRLF.len()
}

fn decimal_width(n: i64) -> usize {
    n.to_string().len()
}

/// Split a payload into its CRLF-separated segments, delimiters dropped.
///
/// An empty payload carries no segments. A trailing CRLF contributes an
/// explicit final empty segment.
fn split_segments(payload: &Bytes) -> Vec<Bytes> {
    if payload.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut start = 0;
    while let Some(offset) = find_crlf(&payload[start..]) {
        segments.push(payload.slice(start..start + offset));
        start += offset + CRLF.len();
    }
    segments.push(payload.slice(start..));
    segments
}

fn find_crlf(haystack: &[u8]) -> Option<usize> {
    haystack.windows(2).position(|window| window == CRLF)
}

/// Scan `src` for one complete reply, without copying.
///
/// Returns the reply's total byte length when it is fully buffered, or
/// `None` when more bytes are needed. Nested arrays are walked with a
/// pending-children counter rather than recursion, so nesting depth is
/// not bounded by the call stack.
fn check_reply(src: &[u8]) -> Result<Option<usize>> {
    let mut cursor = Cursor::new(src);
    let mut pending: usize = 1;

    while pending > 0 {
        if !cursor.has_remaining() {
            return Ok(None);
        }

        let sigil = cursor.get_u8();
        match sigil {
            b'+' | b'-' | b':' => {
                if read_line(&mut cursor).is_none() {
                    return Ok(None);
                }
            }
            b'$' => {
                let line = match read_line(&mut cursor) {
                    Some(line) => line,
                    None => return Ok(None),
                };
                let length = parse_length(line)?;
                if length >= 0 {
                    let need = length as usize + CRLF.len();
                    if cursor.remaining() < need {
                        return Ok(None);
                    }
                    let body_start = cursor.position() as usize;
                    if &src[body_start + length as usize..body_start + need] != CRLF {
                        return Err(Error::ProtocolViolation(
                            "bulk string missing terminating CRLF".to_string(),
                        ));
                    }
                    cursor.advance(need);
                }
            }
            b'*' => {
                let line = match read_line(&mut cursor) {
                    Some(line) => line,
                    None => return Ok(None),
                };
                let count = parse_length(line)?;
                if count > 0 {
                    pending += count as usize;
                }
            }
            other => {
                return Err(Error::ProtocolViolation(format!(
                    "unknown reply sigil {:?}",
                    other as char
                )))
            }
        }
        pending -= 1;
    }

    Ok(Some(cursor.position() as usize))
}

/// Pop one complete reply off the front of `src`, classified.
///
/// `Ok(None)` means the buffer does not yet hold a full reply.
pub(crate) fn parse_reply(src: &mut BytesMut) -> Result<Option<Reply>> {
    match check_reply(&src[..])? {
        Some(length) => Ok(Some(Reply::classify(src.split_to(length).freeze()))),
        None => Ok(None),
    }
}

/// Frame decoder over a byte stream of server replies, for use with
/// `tokio_util::codec::FramedRead`.
pub struct ReplyCodec;

impl Decoder for ReplyCodec {
    type Item = Reply;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        parse_reply(src)
    }
}

/// Decode a reply into a conventional in-memory value.
pub fn decode_reply(reply: &Reply) -> Result<Value> {
    let mut cursor = Cursor::new(reply.raw().as_ref());
    decode_value(&mut cursor)
}

fn decode_value(cursor: &mut Cursor<&[u8]>) -> Result<Value> {
    if !cursor.has_remaining() {
        return Err(Error::Truncated);
    }

    let sigil = cursor.get_u8();
    match sigil {
        b'+' => {
            let line = read_line(cursor).ok_or(Error::Truncated)?;
            Ok(Value::Text(String::from_utf8_lossy(line).into_owned()))
        }
        b'-' => {
            let line = read_line(cursor).ok_or(Error::Truncated)?;
            Ok(Value::Error(String::from_utf8_lossy(line).into_owned()))
        }
        b':' => {
            let line = read_line(cursor).ok_or(Error::Truncated)?;
            let integer = std::str::from_utf8(line)
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or_else(|| {
                    Error::ProtocolViolation("non-numeric integer reply".to_string())
                })?;
            Ok(Value::Integer(integer))
        }
        b'$' => {
            let line = read_line(cursor).ok_or(Error::Truncated)?;
            let length = parse_length(line)?;
            if length == -1 {
                return Ok(Value::Null);
            }

            let src: &[u8] = *cursor.get_ref();
            let start = cursor.position() as usize;
            let end = start + length as usize;
            if src.len() < end + CRLF.len() {
                return Err(Error::Truncated);
            }
            let body = &src[start..end];
            cursor.set_position((end + CRLF.len()) as u64);

            // Best effort: text when the body is valid UTF-8, raw bytes
            // otherwise.
            match std::str::from_utf8(body) {
                Ok(text) => Ok(Value::Text(text.to_string())),
                Err(_) => Ok(Value::Bytes(Bytes::copy_from_slice(body))),
            }
        }
        b'*' => {
            let line = read_line(cursor).ok_or(Error::Truncated)?;
            let count = parse_length(line)?;
            if count <= 0 {
                // A null array decodes like an empty one.
                return Ok(Value::List(Vec::new()));
            }

            let mut values = Vec::with_capacity(count as usize);
            for _ in 0..count {
                values.push(decode_value(cursor)?);
            }
            Ok(Value::List(values))
        }
        other => Err(Error::ProtocolViolation(format!(
            "unknown reply sigil {:?}",
            other as char
        ))),
    }
}

/// Flatten a reply into its scalar bodies, each followed by `\n`.
///
/// Null bulks and null arrays contribute nothing; array nesting is
/// flattened in order. Useful for writing replies to a sink without
/// decoding element by element.
pub fn reply_to_bytes(reply: &Reply) -> Bytes {
    let raw = reply.raw().as_ref();
    let mut cursor = Cursor::new(raw);
    let mut out = BytesMut::new();

    while cursor.has_remaining() {
        let sigil = cursor.get_u8();
        match sigil {
            b'+' | b'-' | b':' => match read_line(&mut cursor) {
                Some(line) => {
                    out.extend_from_slice(line);
                    out.extend_from_slice(b"\n");
                }
                None => break,
            },
            b'$' => {
                let length = match read_line(&mut cursor).map(parse_length) {
                    Some(Ok(length)) => length,
                    _ => break,
                };
                if length < 0 {
                    continue;
                }
                let start = cursor.position() as usize;
                let end = start + length as usize;
                if raw.len() < end + CRLF.len() {
                    break;
                }
                out.extend_from_slice(&raw[start..end]);
                out.extend_from_slice(b"\n");
                cursor.set_position((end + CRLF.len()) as u64);
            }
            // Array headers carry no bytes of their own.
            b'*' => {
                if read_line(&mut cursor).is_none() {
                    break;
                }
            }
            _ => break,
        }
    }

    out.freeze()
}

// One CRLF-terminated line, CRLF excluded, cursor left past it.
fn read_line<'a>(cursor: &mut Cursor<&'a [u8]>) -> Option<&'a [u8]> {
    let src: &'a [u8] = *cursor.get_ref();
    let start = cursor.position() as usize;

    let end = start + find_crlf(&src[start..])?;
    cursor.set_position((end + CRLF.len()) as u64);
    Some(&src[start..end])
}

fn parse_length(line: &[u8]) -> Result<i64> {
    let length = std::str::from_utf8(line)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| {
            Error::ProtocolViolation(format!(
                "non-numeric length prefix {:?}",
                String::from_utf8_lossy(line)
            ))
        })?;

    if length < -1 {
        return Err(Error::ProtocolViolation(format!(
            "negative length prefix {}",
            length
        )));
    }
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PLACEHOLDER;

    fn text_args(args: &[&str]) -> Vec<Arg> {
        args.iter().map(|a| Arg::from(*a)).collect()
    }

    #[test]
    fn encode_plain_text_request() {
        let request = Request::new("SET", Bytes::new(), text_args(&["hoge", "piyo"]));

        let encoded = encode_request(&request).unwrap();

        assert_eq!(
            encoded.as_ref(),
            b"*3\r\n$3\r\nSET\r\n$4\r\nhoge\r\n$4\r\npiyo\r\n"
        );
    }

    #[test]
    fn encode_substitutes_payload_for_placeholder() {
        let request = Request::new(
            "SET",
            &b"piyo"[..],
            vec![
                Arg::from("hoge"),
                PLACEHOLDER,
                Arg::from("EX"),
                Arg::from("60"),
            ],
        );

        let encoded = encode_request(&request).unwrap();

        assert_eq!(
            encoded.as_ref(),
            b"*5\r\n$3\r\nSET\r\n$4\r\nhoge\r\n$4\r\npiyo\r\n$2\r\nEX\r\n$2\r\n60\r\n"
        );
    }

    #[test]
    fn encode_consumes_multiple_segments_in_order() {
        let request = Request::new(
            "MSET",
            &b"piyo\r\nfuga"[..],
            vec![
                Arg::from("hoge"),
                PLACEHOLDER,
                Arg::from("hogefuga"),
                PLACEHOLDER,
            ],
        );

        let encoded = encode_request(&request).unwrap();

        assert_eq!(
            encoded.as_ref(),
            b"*5\r\n$4\r\nMSET\r\n$4\r\nhoge\r\n$4\r\npiyo\r\n$8\r\nhogefuga\r\n$4\r\nfuga\r\n"
        );
    }

    #[test]
    fn encode_matches_manual_substitution() {
        let with_payload = Request::new(
            "MSET",
            &b"piyo\r\nfuga"[..],
            vec![
                Arg::from("hoge"),
                PLACEHOLDER,
                Arg::from("hogefuga"),
                PLACEHOLDER,
            ],
        );
        let substituted = Request::new(
            "MSET",
            Bytes::new(),
            text_args(&["hoge", "piyo", "hogefuga", "fuga"]),
        );

        assert_eq!(
            encode_request(&with_payload).unwrap(),
            encode_request(&substituted).unwrap()
        );
    }

    #[test]
    fn encode_keeps_explicit_trailing_empty_segment() {
        let request = Request::new(
            "MSET",
            &b"piyo\r\n"[..],
            vec![
                Arg::from("hoge"),
                PLACEHOLDER,
                Arg::from("fuga"),
                PLACEHOLDER,
            ],
        );

        let encoded = encode_request(&request).unwrap();

        assert_eq!(
            encoded.as_ref(),
            b"*5\r\n$4\r\nMSET\r\n$4\r\nhoge\r\n$4\r\npiyo\r\n$4\r\nfuga\r\n$0\r\n\r\n"
        );
    }

    #[test]
    fn encode_rejects_segment_placeholder_mismatch() {
        let request = Request::new("SET", &b"piyo\r\nfuga"[..], vec![Arg::from("hoge"), PLACEHOLDER]);

        let result = encode_request(&request);

        assert!(matches!(result, Err(Error::MalformedRequest(_))));
    }

    #[test]
    fn encode_rejects_empty_command() {
        let result = encode_request(&Request::identity());

        assert!(matches!(result, Err(Error::MalformedRequest(_))));
    }

    #[test]
    fn parse_simple_string_reply() {
        let mut buf = BytesMut::from(&b"+OK\r\n"[..]);

        let reply = parse_reply(&mut buf).unwrap().unwrap();

        assert_eq!(reply, Reply::Success(Bytes::from_static(b"+OK\r\n")));
        assert!(buf.is_empty());
    }

    #[test]
    fn parse_incomplete_reply_returns_none() {
        for partial in [&b"$10\r\nhel"[..], b"*2\r\n:1\r\n", b"+OK", b"$4\r"] {
            let mut buf = BytesMut::from(partial);
            assert_eq!(parse_reply(&mut buf).unwrap(), None);
            assert_eq!(buf.len(), partial.len());
        }
    }

    #[test]
    fn parse_keeps_trailing_bytes_of_the_next_reply() {
        let mut buf = BytesMut::from(&b"+OK\r\n:42\r\n"[..]);

        let first = parse_reply(&mut buf).unwrap().unwrap();
        let second = parse_reply(&mut buf).unwrap().unwrap();

        assert_eq!(first.raw().as_ref(), b"+OK\r\n");
        assert_eq!(second.raw().as_ref(), b":42\r\n");
        assert!(buf.is_empty());
    }

    #[test]
    fn parse_nested_array_as_one_reply() {
        let raw = b"*2\r\n*3\r\n:1\r\n:2\r\n:3\r\n*2\r\n+Hello\r\n-World\r\n";
        let mut buf = BytesMut::from(&raw[..]);

        let reply = parse_reply(&mut buf).unwrap().unwrap();

        assert_eq!(reply.raw().as_ref(), &raw[..]);
    }

    #[test]
    fn parse_deeply_nested_arrays_without_overflowing() {
        // 10_000 levels of *1 nesting around a single integer.
        let mut raw = BytesMut::new();
        for _ in 0..10_000 {
            raw.extend_from_slice(b"*1\r\n");
        }
        raw.extend_from_slice(b":1\r\n");

        let reply = parse_reply(&mut raw.clone()).unwrap().unwrap();

        assert_eq!(reply.raw().len(), 10_000 * 4 + 4);
    }

    #[test]
    fn parse_rejects_unknown_sigil() {
        let mut buf = BytesMut::from(&b"@5\r\n"[..]);

        assert!(matches!(
            parse_reply(&mut buf),
            Err(Error::ProtocolViolation(_))
        ));
    }

    #[test]
    fn parse_rejects_non_numeric_length() {
        let mut buf = BytesMut::from(&b"$abc\r\nhello\r\n"[..]);

        assert!(matches!(
            parse_reply(&mut buf),
            Err(Error::ProtocolViolation(_))
        ));
    }

    #[test]
    fn reply_codec_decodes_like_parse_reply() {
        let mut codec = ReplyCodec;
        let mut buf = BytesMut::from(&b"$4\r\npiyo\r\n+OK"[..]);

        let first = codec.decode(&mut buf).unwrap();
        let second = codec.decode(&mut buf).unwrap();

        assert_eq!(first, Some(Reply::Success(Bytes::from_static(b"$4\r\npiyo\r\n"))));
        assert_eq!(second, None);
    }

    #[test]
    fn decode_simple_string() {
        let reply = Reply::classify(Bytes::from_static(b"+OK\r\n"));
        assert_eq!(decode_reply(&reply).unwrap(), Value::Text("OK".to_string()));
    }

    #[test]
    fn decode_integer() {
        let reply = Reply::classify(Bytes::from_static(b":42\r\n"));
        assert_eq!(decode_reply(&reply).unwrap(), Value::Integer(42));
    }

    #[test]
    fn decode_error() {
        let reply = Reply::classify(Bytes::from_static(b"-ERR boom\r\n"));
        assert_eq!(
            decode_reply(&reply).unwrap(),
            Value::Error("ERR boom".to_string())
        );
    }

    #[test]
    fn decode_null_bulk() {
        let reply = Reply::classify(Bytes::from_static(b"$-1\r\n"));
        assert_eq!(decode_reply(&reply).unwrap(), Value::Null);
    }

    #[test]
    fn decode_empty_bulk() {
        let reply = Reply::classify(Bytes::from_static(b"$0\r\n\r\n"));
        assert_eq!(decode_reply(&reply).unwrap(), Value::Text(String::new()));
    }

    #[test]
    fn decode_non_utf8_bulk_as_bytes() {
        let reply = Reply::classify(Bytes::from_static(b"$2\r\n\xff\xfe\r\n"));
        assert_eq!(
            decode_reply(&reply).unwrap(),
            Value::Bytes(Bytes::from_static(b"\xff\xfe"))
        );
    }

    #[test]
    fn decode_nested_array() {
        let reply = Reply::classify(Bytes::from_static(b"*2\r\n:42\r\n$4\r\nhoge\r\n"));
        assert_eq!(
            decode_reply(&reply).unwrap(),
            Value::List(vec![Value::Integer(42), Value::Text("hoge".to_string())])
        );
    }

    #[test]
    fn decode_null_array_as_empty_list() {
        let reply = Reply::classify(Bytes::from_static(b"*-1\r\n"));
        assert_eq!(decode_reply(&reply).unwrap(), Value::List(Vec::new()));
    }

    #[test]
    fn bytes_view_joins_scalars_with_newlines() {
        let reply = Reply::classify(Bytes::from_static(b"*2\r\n:42\r\n$4\r\nhoge\r\n"));
        assert_eq!(reply_to_bytes(&reply).as_ref(), b"42\nhoge\n");
    }

    #[test]
    fn bytes_view_of_null_bulk_is_empty() {
        let reply = Reply::classify(Bytes::from_static(b"$-1\r\n"));
        assert!(reply_to_bytes(&reply).is_empty());
    }

    #[test]
    fn bytes_view_of_bulk_is_its_body() {
        let reply = Reply::classify(Bytes::from_static(b"$4\r\npiyo\r\n"));
        assert_eq!(reply_to_bytes(&reply).as_ref(), b"piyo\n");
    }
}
