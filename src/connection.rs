use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, trace};

use crate::codec;
use crate::error::{Error, Result};
use crate::reply::Reply;
use crate::request::Request;

/// Options for the connect primitive.
#[derive(Clone, Debug)]
pub struct ConnectOptions {
    pub host: String,
    pub port: u16,
}

impl ConnectOptions {
    pub fn new(host: impl Into<String>, port: u16) -> ConnectOptions {
        ConnectOptions {
            host: host.into(),
            port,
        }
    }
}

impl Default for ConnectOptions {
    fn default() -> ConnectOptions {
        ConnectOptions {
            host: "127.0.0.1".to_string(),
            port: 6379,
        }
    }
}

/// Per-connection protocol state. Replies owed from a previous write
/// must be drained before the next write may start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Writing,
    AwaitingReply(usize),
    Closed,
}

/// One open connection to the server.
///
/// Owns the socket and a read buffer; replies are parsed out of the
/// buffer as the socket delivers them, whatever the chunk boundaries.
/// A connection is exclusively owned by the operation using it; there is
/// no internal locking.
pub struct Connection {
    stream: TcpStream,
    // Data is read from the socket into the read buffer. When a reply is
    // parsed, the corresponding bytes are removed from the buffer.
    buffer: BytesMut,
    state: State,
}

impl Connection {
    /// Open a TCP connection to the server.
    pub async fn connect(options: &ConnectOptions) -> Result<Connection> {
        let stream = TcpStream::connect((options.host.as_str(), options.port)).await?;
        debug!(host = %options.host, port = options.port, "connected");

        Ok(Connection::new(stream))
    }

    /// Wrap an already-open stream.
    pub fn new(stream: TcpStream) -> Connection {
        Connection {
            stream,
            // Allocate the buffer with 4kb of capacity.
            buffer: BytesMut::with_capacity(4096),
            state: State::Idle,
        }
    }

    /// Encode and write a single request without reading its reply,
    /// leaving one reply owed on the connection. The owed reply must be
    /// drained with [`Connection::read_reply`] before the next write.
    pub async fn write_request(&mut self, request: &Request) -> Result<()> {
        let encoded = codec::encode_request(request)?;
        debug!(command = %request.command(), "writing request");

        self.send(&encoded, 1).await
    }

    /// Write pre-encoded request bytes and record how many replies the
    /// write puts in flight.
    pub(crate) async fn send(&mut self, bytes: &[u8], expected: usize) -> Result<()> {
        match self.state {
            State::Closed => return Err(Error::InvalidState("connection is closed")),
            State::Writing => return Err(Error::InvalidState("write already in progress")),
            State::AwaitingReply(pending) if pending > 0 => {
                return Err(Error::InvalidState(
                    "replies from a previous write are still pending",
                ))
            }
            State::Idle | State::AwaitingReply(_) => {}
        }

        self.state = State::Writing;
        if let Err(err) = self.stream.write_all(bytes).await {
            self.state = State::Closed;
            return Err(err.into());
        }

        trace!(bytes = bytes.len(), expected, "request bytes flushed");
        self.state = State::AwaitingReply(expected);
        Ok(())
    }

    /// Read exactly one complete reply, suspending on the socket until
    /// the buffer holds it in full.
    pub async fn read_reply(&mut self) -> Result<Reply> {
        if self.state == State::Closed {
            return Err(Error::InvalidState("connection is closed"));
        }

        loop {
            match codec::parse_reply(&mut self.buffer) {
                Ok(Some(reply)) => {
                    self.state = match self.state {
                        State::AwaitingReply(pending) if pending > 1 => {
                            State::AwaitingReply(pending - 1)
                        }
                        _ => State::Idle,
                    };
                    trace!(bytes = reply.raw().len(), "reply read");
                    return Ok(reply);
                }
                Ok(None) => {}
                // The stream cannot be resynchronized mid-reply.
                Err(err) => {
                    self.state = State::Closed;
                    return Err(err);
                }
            }

            let read = match self.stream.read_buf(&mut self.buffer).await {
                Ok(read) => read,
                Err(err) => {
                    self.state = State::Closed;
                    return Err(err.into());
                }
            };
            if read == 0 {
                self.state = State::Closed;
                return Err(Error::Truncated);
            }
        }
    }

    /// Read exactly `n` replies, in arrival order.
    pub async fn read_replies(&mut self, n: usize) -> Result<Vec<Reply>> {
        let mut replies = Vec::with_capacity(n);
        for _ in 0..n {
            replies.push(self.read_reply().await?);
        }
        Ok(replies)
    }

    /// Shut the connection down. Idempotent; dropping the connection
    /// closes the socket as well.
    pub async fn close(&mut self) -> Result<()> {
        if self.state == State::Closed {
            return Ok(());
        }
        self.state = State::Closed;
        self.stream.shutdown().await?;
        debug!("connection closed");
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }
}
