pub mod client;
pub mod codec;
pub mod commands;
pub mod connection;
pub mod error;
pub mod reply;
pub mod request;
pub mod value;

pub use client::{execute, execute_pipeline, pipe, with_session, Step};
pub use codec::{decode_reply, encode_request, reply_to_bytes, ReplyCodec};
pub use connection::{ConnectOptions, Connection};
pub use error::{Error, Result};
pub use reply::Reply;
pub use request::{Arg, Input, IntoInput, Request, PLACEHOLDER};
pub use value::Value;
