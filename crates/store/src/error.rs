//! Error types for the storage adapter

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the storage adapter
#[derive(Error, Debug)]
pub enum Error {
    /// Engine-level I/O, corruption, or transaction failure
    #[error("storage engine error: {0}")]
    Engine(#[from] fjall::Error),

    /// A key or value could not be encoded or decoded
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Filesystem error outside the engine
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
