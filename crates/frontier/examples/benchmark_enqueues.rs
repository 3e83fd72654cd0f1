//! Benchmark for enqueuing and draining 1 million frontier items
//!
//! Measures enqueue throughput in deferred-write mode, then drains the
//! queue in worker-sized batches the way the crawler's worker pool does
//! (dequeue a batch, then delete what was consumed).

use scuttle_frontier::{FrontierEntry, FrontierQueue, Store, StoreConfig, WorkItem};
use std::io::{self, Write};
use std::time::Instant;

fn main() {
    println!("=== 1 Million Enqueue Benchmark ===\n");

    // Benchmark configuration
    const NUM_ITEMS: u32 = 1_000_000;
    const PROGRESS_INTERVAL: u32 = 100_000;
    const BATCH_SIZE: usize = 50;

    // StoreConfig::default() creates a unique temp directory per run
    let store = Store::open(&StoreConfig::default()).expect("Failed to open store");
    let queue = FrontierQueue::open(&store, "frontier").expect("Failed to open frontier");

    println!("Starting {} enqueues...", NUM_ITEMS);
    let start_time = Instant::now();

    for docid in 0..NUM_ITEMS {
        let item = WorkItem {
            url: format!("https://example.com/page/{}", docid),
            docid,
            parent_docid: docid / 10,
            parent_url: None,
            anchor: (docid % 4 == 0).then(|| format!("link {}", docid)),
            priority: (docid % 8) as u8,
            depth: (docid % 32) as u16,
        };

        queue.enqueue(&item).expect("Failed to enqueue");

        if (docid + 1) % PROGRESS_INTERVAL == 0 {
            print!("\r  {} enqueued", docid + 1);
            io::stdout().flush().unwrap();
        }
    }

    let elapsed = start_time.elapsed();
    println!(
        "\nEnqueued {} items in {:.2?} ({:.0} items/sec)\n",
        NUM_ITEMS,
        elapsed,
        NUM_ITEMS as f64 / elapsed.as_secs_f64()
    );

    println!("Draining in batches of {}...", BATCH_SIZE);
    let start_time = Instant::now();
    let mut drained = 0usize;

    loop {
        let batch = queue.dequeue_batch(BATCH_SIZE).expect("Failed to dequeue");
        if batch.is_empty() {
            break;
        }
        drained += batch
            .iter()
            .filter(|entry| matches!(entry, FrontierEntry::Item(_)))
            .count();
        queue.delete_batch(batch.len()).expect("Failed to delete");
    }

    let elapsed = start_time.elapsed();
    println!(
        "Drained {} items in {:.2?} ({:.0} items/sec)",
        drained,
        elapsed,
        drained as f64 / elapsed.as_secs_f64()
    );
}
