use bytes::Bytes;

/// A reply decoded into a conventional in-memory value.
///
/// Bulk strings decode to `Text` when their bytes are valid UTF-8 and to
/// `Bytes` otherwise. Lists may be heterogeneous and nested.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Bytes(Bytes),
    Null,
    Error(String),
    List(Vec<Value>),
}
