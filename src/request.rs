use std::cmp::Ordering;

use bytes::{Bytes, BytesMut};

use crate::codec::CRLF;

/// One element of a request's argument list.
///
/// `Text` carries the argument verbatim. `Placeholder` stands in for the
/// next CRLF-separated segment of the request payload; the encoder
/// substitutes segments left to right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Arg {
    Text(String),
    Placeholder,
}

/// The reserved placeholder token.
pub const PLACEHOLDER: Arg = Arg::Placeholder;

impl From<&str> for Arg {
    fn from(s: &str) -> Arg {
        Arg::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Arg {
        Arg::Text(s)
    }
}

/// A caller-supplied value headed for an argument slot.
///
/// Textual inputs become plain arguments. Binary inputs are routed
/// through the request payload so their bytes are never coerced through
/// text: the value becomes a payload segment and the argument slot
/// becomes [`Arg::Placeholder`].
#[derive(Clone, Debug)]
pub enum Input {
    Text(String),
    Binary(Bytes),
}

pub trait IntoInput {
    fn into_input(self) -> Input;
}

impl IntoInput for &str {
    fn into_input(self) -> Input {
        Input::Text(self.to_string())
    }
}

impl IntoInput for String {
    fn into_input(self) -> Input {
        Input::Text(self)
    }
}

impl IntoInput for &String {
    fn into_input(self) -> Input {
        Input::Text(self.clone())
    }
}

macro_rules! impl_into_input_for_int {
    ($($t:ty),*) => {
        $(impl IntoInput for $t {
            fn into_input(self) -> Input {
                Input::Text(self.to_string())
            }
        })*
    };
}

impl_into_input_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

// Display already prints the shortest decimal form: 5000.0 -> "5000",
// 0.1 -> "0.1".
impl IntoInput for f64 {
    fn into_input(self) -> Input {
        Input::Text(self.to_string())
    }
}

impl IntoInput for f32 {
    fn into_input(self) -> Input {
        Input::Text(self.to_string())
    }
}

impl IntoInput for Bytes {
    fn into_input(self) -> Input {
        Input::Binary(self)
    }
}

impl IntoInput for Vec<u8> {
    fn into_input(self) -> Input {
        Input::Binary(Bytes::from(self))
    }
}

impl IntoInput for &[u8] {
    fn into_input(self) -> Input {
        Input::Binary(Bytes::copy_from_slice(self))
    }
}

impl<const N: usize> IntoInput for &[u8; N] {
    fn into_input(self) -> Input {
        Input::Binary(Bytes::copy_from_slice(self))
    }
}

/// One command invocation: a command name, an opaque binary payload and
/// an ordered argument list in which [`Arg::Placeholder`] marks where
/// payload segments are substituted at encode time.
///
/// Requests are plain values: built once, then only read. Equality and
/// ordering compare payloads alone (length first, then bytes), which is
/// what makes the concat/identity algebra observable.
#[derive(Clone, Debug, Default)]
pub struct Request {
    command: String,
    payload: Bytes,
    arguments: Vec<Arg>,
}

impl Request {
    pub fn new(
        command: impl Into<String>,
        payload: impl Into<Bytes>,
        arguments: Vec<Arg>,
    ) -> Request {
        Request {
            command: command.into(),
            payload: payload.into(),
            arguments,
        }
    }

    /// The identity element for [`Request::concat`]: empty command, empty
    /// payload, no arguments. Never sent to a server.
    pub fn identity() -> Request {
        Request::default()
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn arguments(&self) -> &[Arg] {
        &self.arguments
    }

    /// Combine two requests: the payload is the byte-wise concatenation
    /// of both payloads, command and arguments come from `self`.
    pub fn concat(&self, other: &Request) -> Request {
        let mut payload = BytesMut::with_capacity(self.payload.len() + other.payload.len());
        payload.extend_from_slice(&self.payload);
        payload.extend_from_slice(&other.payload);

        Request {
            command: self.command.clone(),
            payload: payload.freeze(),
            arguments: self.arguments.clone(),
        }
    }

    /// Transform the payload, leaving command and arguments untouched.
    pub fn map_payload(self, f: impl FnOnce(Bytes) -> Bytes) -> Request {
        Request {
            command: self.command,
            payload: f(self.payload),
            arguments: self.arguments,
        }
    }
}

impl PartialEq for Request {
    fn eq(&self, other: &Request) -> bool {
        self.payload == other.payload
    }
}

impl Eq for Request {}

impl PartialOrd for Request {
    fn partial_cmp(&self, other: &Request) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Request {
    fn cmp(&self, other: &Request) -> Ordering {
        self.payload
            .len()
            .cmp(&other.payload.len())
            .then_with(|| self.payload.cmp(&other.payload))
    }
}

/// Accumulates the canonical `(command, payload, arguments)` shape for
/// the command shorthands.
pub(crate) struct Builder {
    command: &'static str,
    payload: BytesMut,
    has_payload: bool,
    arguments: Vec<Arg>,
}

impl Builder {
    pub(crate) fn new(command: &'static str) -> Builder {
        Builder {
            command,
            payload: BytesMut::new(),
            has_payload: false,
            arguments: Vec::new(),
        }
    }

    /// Push a textual argument; numbers stringify through `ToString`.
    pub(crate) fn arg(mut self, arg: impl ToString) -> Builder {
        self.arguments.push(Arg::Text(arg.to_string()));
        self
    }

    /// Push a normalized value: text goes straight into the argument
    /// list, binary data becomes a payload segment plus a placeholder.
    pub(crate) fn input(mut self, value: impl IntoInput) -> Builder {
        match value.into_input() {
            Input::Text(s) => self.arguments.push(Arg::Text(s)),
            Input::Binary(b) => {
                if self.has_payload {
                    self.payload.extend_from_slice(CRLF);
                }
                self.payload.extend_from_slice(&b);
                self.has_payload = true;
                self.arguments.push(Arg::Placeholder);
            }
        }
        self
    }

    pub(crate) fn build(self) -> Request {
        Request {
            command: self.command.to_string(),
            payload: self.payload.freeze(),
            arguments: self.arguments,
        }
    }
}
