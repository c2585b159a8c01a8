use crate::request::{Builder, IntoInput, Request};

/// Set `key` to hold `value`. Binary values travel in the request
/// payload; textual values go straight into the argument list.
///
/// Ref: <https://redis.io/docs/latest/commands/set/>
pub fn set(key: impl Into<String>, value: impl IntoInput) -> Request {
    Builder::new("SET").arg(key.into()).input(value).build()
}

/// SET with modifiers.
pub fn set_with(key: impl Into<String>, value: impl IntoInput, options: SetOptions) -> Request {
    options
        .append(Builder::new("SET").arg(key.into()).input(value))
        .build()
}

#[derive(Clone, Debug, Default)]
pub struct SetOptions {
    pub expiration: Option<Expiration>,
    pub condition: Option<Condition>,
    /// Return the old value stored at the key.
    pub get: bool,
}

#[derive(Clone, Debug)]
pub enum Expiration {
    /// EX: seconds.
    Ex(u64),
    /// PX: milliseconds.
    Px(u64),
    /// EXAT: UNIX timestamp in seconds.
    ExAt(u64),
    /// PXAT: UNIX timestamp in milliseconds.
    PxAt(u64),
    /// Keep the TTL the key already has.
    KeepTtl,
}

#[derive(Clone, Debug)]
pub enum Condition {
    /// Only set if the key does not exist.
    Nx,
    /// Only set if the key exists.
    Xx,
}

impl SetOptions {
    fn append(&self, mut builder: Builder) -> Builder {
        if let Some(expiration) = &self.expiration {
            builder = match expiration {
                Expiration::Ex(seconds) => builder.arg("EX").arg(seconds),
                Expiration::Px(millis) => builder.arg("PX").arg(millis),
                Expiration::ExAt(timestamp) => builder.arg("EXAT").arg(timestamp),
                Expiration::PxAt(timestamp) => builder.arg("PXAT").arg(timestamp),
                Expiration::KeepTtl => builder.arg("KEEPTTL"),
            };
        }
        if let Some(condition) = &self.condition {
            builder = builder.arg(match condition {
                Condition::Nx => "NX",
                Condition::Xx => "XX",
            });
        }
        if self.get {
            builder = builder.arg("GET");
        }
        builder
    }
}
