use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// The request cannot be put on the wire: empty command name, or the
    /// number of placeholder arguments does not match the number of
    /// CRLF-separated payload segments.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The stream reached EOF in the middle of a reply. The connection
    /// cannot be resynchronized and must be closed.
    #[error("truncated reply; stream ended mid-frame")]
    Truncated,

    /// The server sent bytes that are not valid RESP: unknown type sigil,
    /// non-numeric length prefix, and the like.
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    /// A write was started while replies from a previous write were still
    /// pending, or the connection was already closed.
    #[error("invalid connection state: {0}")]
    InvalidState(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
