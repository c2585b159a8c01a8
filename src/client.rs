use std::future::Future;
use std::pin::Pin;

use bytes::{Bytes, BytesMut};
use tracing::debug;

use crate::codec::{encode_request, reply_to_bytes};
use crate::connection::{ConnectOptions, Connection};
use crate::error::{Error, Result};
use crate::reply::Reply;
use crate::request::Request;

/// Execute one request as a round-trip: write it, read one reply.
pub async fn execute(request: &Request, conn: &mut Connection) -> Result<Reply> {
    conn.write_request(request).await?;
    conn.read_reply().await
}

/// Write all requests back-to-back, then read exactly as many replies.
///
/// Replies come back in the order their requests were written; the
/// request count is authoritative, completion is never inferred from
/// stream idleness.
pub async fn execute_pipeline(requests: &[Request], conn: &mut Connection) -> Result<Vec<Reply>> {
    if requests.is_empty() {
        return Ok(Vec::new());
    }

    let mut wire = BytesMut::new();
    for request in requests {
        wire.extend_from_slice(&encode_request(request)?);
    }
    debug!(requests = requests.len(), "executing pipeline");

    conn.send(&wire, requests.len()).await?;
    conn.read_replies(requests.len()).await
}

/// The future a session body hands back, borrowing the connection it
/// was given.
pub type SessionFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'c>>;

/// Scope a connection's lifetime around `body`: connect, run, close.
///
/// The connection is closed on every exit path. A close failure after a
/// successful body is reported; it never masks the body's own error.
/// If the returned future is dropped mid-flight, dropping the
/// connection closes the socket.
pub async fn with_session<T, F>(options: ConnectOptions, body: F) -> Result<T>
where
    F: for<'c> FnOnce(&'c mut Connection) -> SessionFuture<'c, T>,
{
    let mut conn = Connection::connect(&options).await?;

    let result = body(&mut conn).await;
    let closed = conn.close().await;

    let value = result?;
    closed?;
    Ok(value)
}

/// One step of a [`pipe`] sequence: a ready request, or a function that
/// builds its request from the bytes-view of the previous reply.
pub enum Step {
    Request(Request),
    Then(Box<dyn FnOnce(Bytes) -> Request + Send>),
}

impl Step {
    pub fn then(f: impl FnOnce(Bytes) -> Request + Send + 'static) -> Step {
        Step::Then(Box::new(f))
    }
}

impl From<Request> for Step {
    fn from(request: Request) -> Step {
        Step::Request(request)
    }
}

/// Run steps sequentially on one connection, each step waiting for its
/// reply before the next is constructed. Replies flow left to right: a
/// `Then` step receives the previous reply's bytes-view (without its
/// trailing newline). Returns the last step's reply.
pub async fn pipe(steps: Vec<Step>, conn: &mut Connection) -> Result<Reply> {
    let mut previous: Option<Reply> = None;

    for step in steps {
        let request = match step {
            Step::Request(request) => request,
            Step::Then(build) => {
                let view = previous.as_ref().map(step_view).unwrap_or_default();
                build(view)
            }
        };
        previous = Some(execute(&request, conn).await?);
    }

    previous.ok_or_else(|| Error::MalformedRequest("pipe requires at least one step".to_string()))
}

// The bytes-view terminates every scalar with '\n'; a step function
// wants the previous value itself, so the final newline is dropped.
fn step_view(reply: &Reply) -> Bytes {
    let mut view = reply_to_bytes(reply);
    if view.last() == Some(&b'\n') {
        view.truncate(view.len() - 1);
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_view_drops_the_trailing_newline() {
        let reply = Reply::classify(Bytes::from_static(b"$4\r\npiyo\r\n"));
        assert_eq!(step_view(&reply).as_ref(), b"piyo");
    }

    #[test]
    fn step_view_of_null_bulk_is_empty() {
        let reply = Reply::classify(Bytes::from_static(b"$-1\r\n"));
        assert!(step_view(&reply).is_empty());
    }

    #[test]
    fn step_view_keeps_interior_newlines() {
        let reply = Reply::classify(Bytes::from_static(b"*2\r\n:42\r\n$4\r\nhoge\r\n"));
        assert_eq!(step_view(&reply).as_ref(), b"42\nhoge");
    }
}
