//! Persisted set of items currently handed to workers
//!
//! A resumable crawl records every item scheduled for fetching here and
//! removes it once the fetch completes. After a crash, whatever is left
//! in this table was in flight and gets re-enqueued to the frontier by
//! the caller before workers start. Disposable crawls skip this table
//! entirely.

use crate::item::WorkItem;
use crate::queue::{FrontierEntry, FrontierQueue};
use scuttle_store::{Result, Store};

/// Table name shared across restarts
const IN_PROCESS_TABLE: &str = "in-process";

/// Queue of items handed to workers but not yet confirmed fetched
pub struct InProcessQueue {
    queue: FrontierQueue,
}

impl InProcessQueue {
    /// Open the in-process table on the given store
    pub fn open(store: &Store) -> Result<Self> {
        Ok(Self {
            queue: FrontierQueue::open(store, IN_PROCESS_TABLE)?,
        })
    }

    /// Record an item as handed to a worker
    pub fn enqueue(&self, item: &WorkItem) -> Result<()> {
        self.queue.enqueue(item)
    }

    /// Mark an item's fetch as complete. Returns `false` if it was not
    /// recorded (already removed, or never parked).
    pub fn remove(&self, item: &WorkItem) -> Result<bool> {
        self.queue.remove(item)
    }

    /// Items left over from a previous run, in crawl order
    pub fn drain_pending(&self, max: usize) -> Result<Vec<FrontierEntry>> {
        self.queue.dequeue_batch(max)
    }

    /// Advisory number of parked items (`-1` on engine failure)
    pub fn size(&self) -> i64 {
        self.queue.size()
    }

    /// Flush and release the table
    pub fn close(self) -> Result<()> {
        self.queue.close()
    }
}
