use bytes::Bytes;

/// One complete server reply, classified from its leading bytes.
///
/// Both arms hold the raw reply exactly as received, sigils and CRLFs
/// included. A `Failure` is a valid outcome (the server answered), not a
/// transport error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Success(Bytes),
    Failure(Bytes),
}

impl Reply {
    /// Classify a complete raw reply.
    ///
    /// `Failure` for the `-` error sigil, for the null bulk `$-1\r\n`,
    /// and for a bulk string whose first body byte is `-`. The last rule
    /// over-matches values that merely start with a minus sign; it is
    /// kept for compatibility with existing callers.
    pub fn classify(raw: Bytes) -> Reply {
        if Self::is_failure_raw(&raw) {
            Reply::Failure(raw)
        } else {
            Reply::Success(raw)
        }
    }

    fn is_failure_raw(raw: &Bytes) -> bool {
        match raw.first() {
            Some(b'-') => true,
            Some(b'$') => raw.get(1) == Some(&b'-') || Self::bulk_body_starts_with_minus(raw),
            _ => false,
        }
    }

    // First body byte of `$<n>\r\n<body>\r\n`, if any.
    fn bulk_body_starts_with_minus(raw: &Bytes) -> bool {
        raw.windows(2)
            .position(|window| window == b"\r\n")
            .and_then(|header_end| raw.get(header_end + 2))
            == Some(&b'-')
    }

    pub fn raw(&self) -> &Bytes {
        match self {
            Reply::Success(raw) | Reply::Failure(raw) => raw,
        }
    }

    pub fn into_raw(self) -> Bytes {
        match self {
            Reply::Success(raw) | Reply::Failure(raw) => raw,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Reply::Failure(_))
    }
}
