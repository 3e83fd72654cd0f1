//! Store configuration

use std::path::PathBuf;

/// Configuration for one crawl's storage environment
#[derive(Clone)]
pub struct StoreConfig {
    /// Directory for storage data
    pub data_dir: PathBuf,

    /// Block cache size for the engine (in bytes)
    pub block_cache_size: u64,

    /// Compression type for table data
    pub compression: fjall::CompressionType,

    /// When true, every committed transaction is synced to disk and the
    /// store survives process restart (resumable crawls). When false the
    /// store runs in deferred-write mode: writes are buffered in the
    /// journal and flushed opportunistically (disposable crawls).
    pub durable: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        // Use tempfile to create a proper temporary directory
        // Using .keep() to persist the directory (won't be auto-deleted)
        let temp_dir = tempfile::tempdir()
            .expect("Failed to create temporary directory")
            .keep();

        Self {
            data_dir: temp_dir,
            block_cache_size: 32 * 1024 * 1024, // 32 MB
            compression: fjall::CompressionType::Lz4,
            durable: false,
        }
    }
}

impl StoreConfig {
    /// Create a new config with the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Default::default()
        }
    }

    /// Set block cache size
    pub fn with_block_cache_size(mut self, size: u64) -> Self {
        self.block_cache_size = size;
        self
    }

    /// Set compression type
    pub fn with_compression(mut self, compression: fjall::CompressionType) -> Self {
        self.compression = compression;
        self
    }

    /// Set durability (true for resumable crawls)
    pub fn with_durable(mut self, durable: bool) -> Self {
        self.durable = durable;
        self
    }
}
