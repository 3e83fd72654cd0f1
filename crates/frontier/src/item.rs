//! The discovered-URL record stored in the frontier

use serde::{Deserialize, Serialize};

/// A discovered URL awaiting fetch
///
/// `priority`, `depth`, and `docid` determine crawl order; everything else
/// is opaque payload carried for the fetch/parse layer. `docid` is
/// assigned upstream by the docid source and must be unique and
/// monotonically increasing; the frontier performs no deduplication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// The URL to fetch
    pub url: String,

    /// Unique, monotonically increasing id of this URL
    pub docid: u32,

    /// Docid of the page this URL was discovered on (0 for seeds)
    pub parent_docid: u32,

    /// URL of the referring page
    pub parent_url: Option<String>,

    /// Anchor text of the referring link
    pub anchor: Option<String>,

    /// Crawl priority; lower values are crawled earlier
    pub priority: u8,

    /// Crawl distance from the seed set
    pub depth: u16,
}

impl WorkItem {
    /// A seed URL: depth 0, default priority, no parent
    pub fn seed(url: impl Into<String>, docid: u32) -> Self {
        Self {
            url: url.into(),
            docid,
            parent_docid: 0,
            parent_url: None,
            anchor: None,
            priority: 0,
            depth: 0,
        }
    }
}
