//! The frontier queue
//!
//! Composes the key/value codecs with the ordered store into the public
//! queue contract. One instance is shared by every worker thread; a
//! single instance-scoped mutex serializes all structural operations, so
//! at most one enqueue/dequeue/delete touches the table at a time and no
//! scan ever races a mutation of the same queue.
//!
//! Dequeueing is non-destructive. The caller inspects a batch, does the
//! work, then calls [`FrontierQueue::delete_batch`] for the entries it
//! actually consumed.

use crate::codec;
use crate::item::WorkItem;
use parking_lot::Mutex;
use scuttle_store::{Result, Store, Table};

/// One entry returned by a batched dequeue
#[derive(Clone, Debug, PartialEq)]
pub enum FrontierEntry {
    /// A fully decoded work item
    Item(WorkItem),

    /// A stored record whose value failed to decode. The raw ordering key
    /// is carried so the caller can quarantine or delete the record; it
    /// still occupies one slot of the requested batch.
    Corrupt { key: Box<[u8]>, reason: String },
}

/// Priority-ordered persistent queue of discovered URLs
///
/// Whether mutations are transactional and synced is fixed by the store
/// the queue is opened on: durable stores commit every mutation through
/// an atomic synced transaction, non-durable stores take the direct
/// deferred-write path.
pub struct FrontierQueue {
    store: Store,
    table: Table,
    name: String,
    mutex: Mutex<()>,
}

impl FrontierQueue {
    /// Open (or create) the named frontier table on the given store
    pub fn open(store: &Store, name: &str) -> Result<Self> {
        let table = store.open_table(name)?;
        tracing::debug!(
            "[{}] frontier queue opened (durable: {})",
            name,
            store.durable()
        );
        Ok(Self {
            store: store.clone(),
            table,
            name: name.to_string(),
            mutex: Mutex::new(()),
        })
    }

    /// Insert a discovered item
    ///
    /// No deduplication happens here: the docid source guarantees unique
    /// docids, and a duplicate docid silently overwrites the earlier
    /// entry.
    pub fn enqueue(&self, item: &WorkItem) -> Result<()> {
        let key = codec::ordering_key(item);
        let value = codec::encode_item(item)?;

        let _guard = self.mutex.lock();
        if self.store.durable() {
            let mut txn = self.store.transaction();
            txn.put(&self.table, &key, &value);
            txn.commit()?;
        } else {
            self.table.put(&key, &value)?;
        }
        Ok(())
    }

    /// Return up to `max` items in crawl order, smallest key first
    ///
    /// Non-destructive: entries stay stored until deleted. Tombstones
    /// (zero-length values) are skipped without consuming a slot. A value
    /// that fails to decode is surfaced as [`FrontierEntry::Corrupt`]
    /// rather than aborting the scan, and counts toward `max` so the
    /// batch stays aligned with the physical head of the queue.
    pub fn dequeue_batch(&self, max: usize) -> Result<Vec<FrontierEntry>> {
        let _guard = self.mutex.lock();

        let mut entries = Vec::with_capacity(max);
        for pair in self.table.scan() {
            if entries.len() >= max {
                break;
            }
            let (key, value) = pair?;
            if value.is_empty() {
                // Tombstone
                continue;
            }
            match codec::decode_item(&value) {
                Ok(item) => entries.push(FrontierEntry::Item(item)),
                Err(e) => entries.push(FrontierEntry::Corrupt {
                    key,
                    reason: e.to_string(),
                }),
            }
        }
        Ok(entries)
    }

    /// Delete the first `count` entries in key order
    ///
    /// Deleting from an empty queue, or asking for more entries than
    /// exist, removes whatever is there. Returns the number actually
    /// deleted. Tombstoned records are deleted like any other entry and
    /// count toward `count`.
    pub fn delete_batch(&self, count: usize) -> Result<usize> {
        let _guard = self.mutex.lock();

        let mut txn = self.store.transaction();
        let mut removed = 0;
        for pair in self.table.scan() {
            if removed >= count {
                break;
            }
            let (key, _value) = pair?;
            txn.delete(&self.table, &key);
            removed += 1;
        }
        txn.commit()?;
        Ok(removed)
    }

    /// Delete the entry for this exact item, if present
    ///
    /// Used by the in-process table when a fetch completes. Removing an
    /// absent key is a no-op returning `false`.
    pub fn remove(&self, item: &WorkItem) -> Result<bool> {
        let key = codec::ordering_key(item);

        let _guard = self.mutex.lock();
        if self.table.get(&key)?.is_none() {
            return Ok(false);
        }
        let mut txn = self.store.transaction();
        txn.delete(&self.table, &key);
        txn.commit()?;
        Ok(true)
    }

    /// Advisory number of stored entries
    ///
    /// Progress reporting must not take the crawl down, so an engine
    /// failure here is logged and reported as `-1` instead of propagated.
    pub fn size(&self) -> i64 {
        let _guard = self.mutex.lock();
        match self.table.count() {
            Ok(n) => n as i64,
            Err(e) => {
                tracing::error!("[{}] error counting frontier entries: {}", self.name, e);
                -1
            }
        }
    }

    /// Flush and release the queue
    ///
    /// Consumes the queue, so use-after-close is unrepresentable.
    pub fn close(self) -> Result<()> {
        self.store.persist()
    }
}
