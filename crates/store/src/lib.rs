//! Ordered embedded storage for the scuttle crawl frontier
//!
//! This crate is a thin adapter over Fjall. It exposes the handful of
//! primitives the frontier needs and nothing else:
//! - One storage environment (directory) per crawl, holding named tables
//! - Ascending-key cursor scans over a table
//! - Keyed puts, both direct (deferred-write) and transactional
//! - Atomic write transactions with commit-on-success and abort-on-drop
//! - An exact live-entry count
//!
//! Durability is fixed per store at open time. A durable store syncs every
//! committed transaction to disk; a non-durable store leaves writes in the
//! engine's journal buffer and flushes them opportunistically.

pub mod config;
pub mod error;
pub mod store;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use store::{Store, Table, WriteTxn};

/// Type alias for the boxed ordered-scan iterator
pub type ScanIter<'a> = Box<dyn Iterator<Item = Result<(Box<[u8]>, Box<[u8]>)>> + 'a>;
