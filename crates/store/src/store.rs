//! Store, tables, and write transactions
//!
//! A `Store` owns one Fjall keyspace rooted at the configured directory.
//! Each logical table (the frontier, the in-process set) is a named
//! partition inside that keyspace. Mutations either go through
//! `Table::put` (deferred-write path) or through a `WriteTxn`, which
//! stages operations in an atomic batch and commits them all or not at
//! all. A durable store additionally fsyncs the journal at commit.

use crate::ScanIter;
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};

/// One storage environment (a directory) per crawl
#[derive(Clone)]
pub struct Store {
    keyspace: Keyspace,
    compression: fjall::CompressionType,
    durable: bool,
}

impl Store {
    /// Open the store rooted at the config's data directory
    pub fn open(config: &StoreConfig) -> Result<Self> {
        // Ensure directory exists
        std::fs::create_dir_all(&config.data_dir)?;

        let keyspace = fjall::Config::new(&config.data_dir)
            .cache_size(config.block_cache_size)
            .open()?;

        Ok(Self {
            keyspace,
            compression: config.compression,
            durable: config.durable,
        })
    }

    /// Open or create a named table
    pub fn open_table(&self, name: &str) -> Result<Table> {
        let partition = self.keyspace.open_partition(
            name,
            PartitionCreateOptions::default()
                .block_size(32 * 1024)
                .compression(self.compression),
        )?;
        Ok(Table { partition })
    }

    /// Begin an atomic write transaction
    pub fn transaction(&self) -> WriteTxn<'_> {
        WriteTxn {
            batch: self.keyspace.batch(),
            store: self,
        }
    }

    /// Whether committed transactions are synced to disk
    pub fn durable(&self) -> bool {
        self.durable
    }

    /// Flush buffered writes; fsyncs everything when the store is durable
    pub fn persist(&self) -> Result<()> {
        let mode = if self.durable {
            PersistMode::SyncAll
        } else {
            PersistMode::Buffer
        };
        self.keyspace.persist(mode)?;
        Ok(())
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        // Best-effort flush; a durable store has already synced every commit
        let _ = self.keyspace.persist(PersistMode::Buffer);
    }
}

/// A named, key-ordered table within the store
#[derive(Clone)]
pub struct Table {
    partition: PartitionHandle,
}

impl Table {
    /// Direct keyed write, outside any transaction (deferred-write path)
    pub fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.partition.insert(key, value)?;
        Ok(())
    }

    /// Read a single value
    pub fn get(&self, key: &[u8]) -> Result<Option<Box<[u8]>>> {
        let value = self.partition.get(key)?;
        Ok(value.map(|v| v.to_vec().into_boxed_slice()))
    }

    /// Ascending-key cursor scan over all live entries
    pub fn scan(&self) -> ScanIter<'_> {
        Box::new(self.partition.iter().map(|result| {
            result
                .map(|(k, v)| {
                    let k_bytes: Box<[u8]> = k.to_vec().into_boxed_slice();
                    let v_bytes: Box<[u8]> = v.to_vec().into_boxed_slice();
                    (k_bytes, v_bytes)
                })
                .map_err(Error::from)
        }))
    }

    /// Exact number of live entries. Scans the whole table, so this is
    /// for advisory reporting, not hot paths.
    pub fn count(&self) -> Result<u64> {
        Ok(self.partition.len()? as u64)
    }

    pub(crate) fn partition(&self) -> &PartitionHandle {
        &self.partition
    }
}

/// An atomic write transaction
///
/// Operations are staged and become visible only at `commit`. Dropping an
/// uncommitted transaction aborts it with nothing observable.
pub struct WriteTxn<'a> {
    batch: fjall::Batch,
    store: &'a Store,
}

impl WriteTxn<'_> {
    /// Stage a keyed write
    pub fn put(&mut self, table: &Table, key: &[u8], value: &[u8]) {
        self.batch.insert(table.partition(), key, value);
    }

    /// Stage a keyed delete
    pub fn delete(&mut self, table: &Table, key: &[u8]) {
        self.batch.remove(table.partition(), key);
    }

    /// Commit every staged operation atomically. On a durable store the
    /// journal is synced before this returns.
    pub fn commit(self) -> Result<()> {
        self.batch.commit()?;
        if self.store.durable {
            self.store.keyspace.persist(PersistMode::SyncAll)?;
        }
        Ok(())
    }
}
