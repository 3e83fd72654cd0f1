//! Key and value codecs for stored work items
//!
//! The key that is used for storing items determines the order they are
//! crawled. Keys are 6 bytes: the first byte is the priority, the second
//! is the depth at which the URL was first found (clamped, not wrapped),
//! and the remaining four are the docid in big-endian. Items with lower
//! priority numbers are crawled earlier; within a priority, those found
//! at lower depths; within a depth, those discovered first (smaller
//! docid). Docid uniqueness makes the key injective even when priority
//! and depth collide.
//!
//! Values are the bincode-serialized [`WorkItem`]. Keys are hand-packed
//! fixed-width bytes, never serde: byte-wise lexicographic order is the
//! contract.

use crate::item::WorkItem;
use scuttle_store::{Error, Result};

/// Length of the fixed ordering key
pub const KEY_LEN: usize = 6;

/// Depth saturates at this value inside the key. Deeper items still sort
/// after shallower ones in the same priority band, but no longer among
/// themselves by depth.
pub const MAX_KEY_DEPTH: u16 = 127;

/// Ordering attributes recovered from a stored key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyFields {
    pub priority: u8,
    pub depth: u8,
    pub docid: u32,
}

/// Encode the fixed-width ordering key for an item
pub fn ordering_key(item: &WorkItem) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    key[0] = item.priority;
    key[1] = item.depth.min(MAX_KEY_DEPTH) as u8;
    key[2..].copy_from_slice(&item.docid.to_be_bytes());
    key
}

/// Decode the ordering attributes from a stored key
pub fn decode_key(bytes: &[u8]) -> Result<KeyFields> {
    if bytes.len() != KEY_LEN {
        return Err(Error::Encoding(format!(
            "ordering key must be {} bytes, got {}",
            KEY_LEN,
            bytes.len()
        )));
    }
    let mut docid = [0u8; 4];
    docid.copy_from_slice(&bytes[2..]);
    Ok(KeyFields {
        priority: bytes[0],
        depth: bytes[1],
        docid: u32::from_be_bytes(docid),
    })
}

/// Serialize an item into its stored value
pub fn encode_item(item: &WorkItem) -> Result<Vec<u8>> {
    bincode::serialize(item).map_err(|e| Error::Encoding(e.to_string()))
}

/// Deserialize a stored value. Malformed input is an error, never a
/// partially populated item.
pub fn decode_item(bytes: &[u8]) -> Result<WorkItem> {
    bincode::deserialize(bytes).map_err(|e| Error::Encoding(e.to_string()))
}
