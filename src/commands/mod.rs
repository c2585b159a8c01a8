//! One constructor per server command.
//!
//! Every function here is pure sugar over [`Request::new`]: it
//! normalizes its inputs into the canonical `(command, payload,
//! arguments)` shape and performs no I/O. Commands without a shorthand
//! can always be sent through the generic constructor.
//!
//! [`Request::new`]: crate::request::Request::new

pub mod append;
pub mod auth;
pub mod bitfield;
pub mod copy;
pub mod dbsize;
pub mod decr;
pub mod decrby;
pub mod del;
pub mod echo;
pub mod exists;
pub mod expire;
pub mod expireat;
pub mod flushall;
pub mod flushdb;
pub mod get;
pub mod getdel;
pub mod getex;
pub mod getrange;
pub mod getset;
pub mod hdel;
pub mod hexists;
pub mod hget;
pub mod hgetall;
pub mod hincrby;
pub mod hkeys;
pub mod hlen;
pub mod hmget;
pub mod hmset;
pub mod hscan;
pub mod hset;
pub mod hsetnx;
pub mod hvals;
pub mod incr;
pub mod incrby;
pub mod incrbyfloat;
pub mod keys;
pub mod mget;
pub mod migrate;
pub mod move_;
pub mod mset;
pub mod msetnx;
pub mod persist;
pub mod pexpire;
pub mod pexpireat;
pub mod ping;
pub mod psetex;
pub mod pttl;
pub mod randomkey;
pub mod rename;
pub mod renamenx;
pub mod scan;
pub mod select;
pub mod set;
pub mod setex;
pub mod setnx;
pub mod setrange;
pub mod sort;
pub mod strlen;
pub mod touch;
pub mod ttl;
pub mod type_;
pub mod unlink;

pub use append::append;
pub use auth::{auth, auth_with_username};
pub use bitfield::{bitfield, BitfieldOp, Overflow};
pub use copy::{copy, CopyOptions};
pub use dbsize::dbsize;
pub use decr::decr;
pub use decrby::decrby;
pub use del::del;
pub use echo::echo;
pub use exists::exists;
pub use expire::expire;
pub use expireat::expireat;
pub use flushall::flushall;
pub use flushdb::flushdb;
pub use get::get;
pub use getdel::getdel;
pub use getex::{getex, Ttl};
pub use getrange::getrange;
pub use getset::getset;
pub use hdel::hdel;
pub use hexists::hexists;
pub use hget::hget;
pub use hgetall::hgetall;
pub use hincrby::hincrby;
pub use hkeys::hkeys;
pub use hlen::hlen;
pub use hmget::hmget;
pub use hmset::hmset;
pub use hscan::{hscan, HscanOptions};
pub use hset::hset;
pub use hsetnx::hsetnx;
pub use hvals::hvals;
pub use incr::incr;
pub use incrby::incrby;
pub use incrbyfloat::incrbyfloat;
pub use keys::keys;
pub use mget::mget;
pub use migrate::{migrate, MigrateOptions};
pub use move_::move_;
pub use mset::mset;
pub use msetnx::msetnx;
pub use persist::persist;
pub use pexpire::pexpire;
pub use pexpireat::pexpireat;
pub use ping::ping;
pub use psetex::psetex;
pub use pttl::pttl;
pub use randomkey::randomkey;
pub use rename::rename;
pub use renamenx::renamenx;
pub use scan::{scan, ScanOptions};
pub use select::select;
pub use set::{set, set_with, Condition, Expiration, SetOptions};
pub use setex::setex;
pub use setnx::setnx;
pub use setrange::setrange;
pub use sort::{sort, Order, SortOptions};
pub use strlen::strlen;
pub use touch::touch;
pub use ttl::ttl;
pub use type_::type_;
pub use unlink::unlink;
