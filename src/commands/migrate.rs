use crate::request::{Builder, Request};

/// Transfer keys to another instance.
///
/// The argument order is fixed: host, port, the single key (or an empty
/// string when migrating several), destination db, timeout, flags,
/// credentials, and finally `KEYS k1 k2 …` when more than one key was
/// given.
///
/// Ref: <https://redis.io/docs/latest/commands/migrate/>
pub fn migrate<K: Into<String>>(
    host: impl Into<String>,
    port: u16,
    keys: impl IntoIterator<Item = K>,
    db: i64,
    timeout_millis: u64,
    options: MigrateOptions,
) -> Request {
    let keys: Vec<String> = keys.into_iter().map(Into::into).collect();

    let mut builder = Builder::new("MIGRATE").arg(host.into()).arg(port);
    builder = if keys.len() == 1 {
        builder.arg(&keys[0])
    } else {
        builder.arg("")
    };
    builder = builder.arg(db).arg(timeout_millis);

    if options.copy {
        builder = builder.arg("COPY");
    }
    if options.replace {
        builder = builder.arg("REPLACE");
    }
    match (&options.username, &options.password) {
        (Some(username), Some(password)) => {
            builder = builder.arg("AUTH2").arg(username).arg(password);
        }
        (None, Some(password)) => {
            builder = builder.arg("AUTH").arg(password);
        }
        _ => {}
    }

    if keys.len() > 1 {
        builder = builder.arg("KEYS");
        for key in &keys {
            builder = builder.arg(key);
        }
    }

    builder.build()
}

#[derive(Clone, Debug, Default)]
pub struct MigrateOptions {
    /// Keep the local copy instead of deleting it.
    pub copy: bool,
    /// Overwrite existing keys on the target instance.
    pub replace: bool,
    pub username: Option<String>,
    pub password: Option<String>,
}
