//! Persistent, priority-ordered crawl frontier
//!
//! The frontier holds every discovered-but-not-yet-fetched URL and feeds
//! them to the worker pool in crawl order: priority ascending, ties broken
//! by depth, further ties by discovery order (docid). Ordering lives
//! entirely in a fixed 6-byte key whose byte-wise lexicographic order
//! equals crawl order, so an ascending cursor over the backing table *is*
//! the dispatch order.
//!
//! Two modes, fixed when the store is opened:
//! - Durable (resumable crawls): every mutation commits through an atomic
//!   transaction that is synced to disk, and the frontier survives
//!   process restart.
//! - Deferred-write (disposable crawls): writes are buffered and flushed
//!   opportunistically. A crash may lose recent entries but never leaves
//!   a torn record.
//!
//! Dequeue and delete are deliberately separate calls: a worker inspects
//! a batch, attempts the fetches, and removes only what it consumed. A
//! crash between the two redelivers the unconsumed tail, so consumers
//! must be idempotent with respect to redelivered items.

pub mod codec;
pub mod in_process;
pub mod item;
pub mod queue;

pub use in_process::InProcessQueue;
pub use item::WorkItem;
pub use queue::{FrontierEntry, FrontierQueue};

// Re-export the storage surface callers need to construct a queue
pub use scuttle_store::{Error, Result, Store, StoreConfig};
