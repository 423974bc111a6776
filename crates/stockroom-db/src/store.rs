//! # Product Store
//!
//! Maps the whole product collection to and from one durable slot.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Writer                                      │
//! │                                                                         │
//! │  InventoryManager (caller)                                             │
//! │       │                                                                 │
//! │       │  handle.save_all(&products)   ◄── returns immediately          │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────┐                       │
//! │  │  unbounded mpsc queue (FIFO)                │                       │
//! │  │  Save(v1) Save(v2) Save(v3) Flush(ack) ...  │                       │
//! │  └───────────────────────┬─────────────────────┘                       │
//! │                          │                                              │
//! │                          ▼                                              │
//! │  ┌─────────────────────────────────────────────┐                       │
//! │  │  SnapshotWriter task (exactly one)          │                       │
//! │  │                                             │                       │
//! │  │  1. recv Save(v1)                           │                       │
//! │  │  2. drain queued Saves → keep newest (v3)   │                       │
//! │  │  3. serialize + slots().put(key, json)      │                       │
//! │  │  4. on error: log, drop, continue           │                       │
//! │  │  5. Flush(ack) → ack after prior writes     │                       │
//! │  └─────────────────────────────────────────────┘                       │
//! │                                                                         │
//! │  One writer, FIFO queue: an older snapshot can never land after a      │
//! │  newer one, so the slot converges to the last mutation.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read Path
//! [`ProductStore::load_all`] never fails: a missing slot, a read error or
//! an undecodable blob all yield an empty collection (errors are logged).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use stockroom_core::Product;

use crate::error::{DbError, DbResult};
use crate::pool::Database;

/// Default durable slot name for the product collection.
pub const DEFAULT_SLOT_KEY: &str = "products";

// =============================================================================
// Product Store
// =============================================================================

/// Reads and writes the product collection in one named slot.
#[derive(Debug, Clone)]
pub struct ProductStore {
    db: Database,
    slot_key: String,
}

impl ProductStore {
    /// Creates a store over the default `"products"` slot.
    pub fn new(db: Database) -> Self {
        Self::with_slot_key(db, DEFAULT_SLOT_KEY)
    }

    /// Creates a store over a custom slot.
    pub fn with_slot_key(db: Database, slot_key: impl Into<String>) -> Self {
        ProductStore {
            db,
            slot_key: slot_key.into(),
        }
    }

    /// The slot this store reads and writes.
    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    /// Loads the persisted collection, degrading to empty on any failure.
    pub async fn load_all(&self) -> Vec<Product> {
        match self.try_load_all().await {
            Ok(products) => {
                info!(slot = %self.slot_key, count = products.len(), "Loaded products");
                products
            }
            Err(e) => {
                error!(slot = %self.slot_key, error = %e, "Failed to load products, starting empty");
                Vec::new()
            }
        }
    }

    /// Loads the persisted collection, reporting failures.
    ///
    /// ## Returns
    /// * `Ok(vec![])` - Slot was never written
    /// * `Err(DbError::Serialization)` - Slot holds something that isn't a product list
    pub async fn try_load_all(&self) -> DbResult<Vec<Product>> {
        let Some(blob) = self.db.slots().get(&self.slot_key).await? else {
            debug!(slot = %self.slot_key, "Slot empty");
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&blob)?)
    }

    /// Serializes and writes the full collection, awaiting completion.
    ///
    /// The writer task uses this; callers that must not block use
    /// [`StoreHandle::save_all`].
    pub async fn try_save_all(&self, products: &[Product]) -> DbResult<()> {
        let blob = serde_json::to_string(products)?;
        self.db.slots().put(&self.slot_key, &blob).await
    }

    /// Starts the background snapshot writer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn_writer(&self) -> StoreHandle {
        let (tx, rx) = mpsc::unbounded_channel();

        let writer = SnapshotWriter {
            store: self.clone(),
            rx,
            written: 0,
        };
        tokio::spawn(writer.run());

        StoreHandle {
            tx,
            enqueued: Arc::new(AtomicU64::new(0)),
        }
    }
}

// =============================================================================
// Store Handle
// =============================================================================

enum WriterCommand {
    Save(Vec<Product>),
    Flush(oneshot::Sender<()>),
    Shutdown(oneshot::Sender<()>),
}

/// Handle for enqueueing snapshots to the writer.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    tx: mpsc::UnboundedSender<WriterCommand>,

    /// Snapshots accepted by the queue, shared between clones.
    enqueued: Arc<AtomicU64>,
}

impl StoreHandle {
    /// Enqueues a full snapshot and returns immediately (fire-and-forget).
    ///
    /// Failures are logged by the writer and never reported here.
    pub fn save_all(&self, products: &[Product]) {
        match self.tx.send(WriterCommand::Save(products.to_vec())) {
            Ok(()) => {
                self.enqueued.fetch_add(1, Ordering::Relaxed);
            }
            Err(_) => {
                warn!(count = products.len(), "Snapshot writer stopped, dropping snapshot");
            }
        }
    }

    /// Number of snapshots handed to the writer so far.
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    /// Waits until every snapshot enqueued before this call has been handled.
    pub async fn flush(&self) -> DbResult<()> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(WriterCommand::Flush(ack_tx))
            .map_err(|_| DbError::WriterStopped)?;
        ack_rx.await.map_err(|_| DbError::WriterStopped)
    }

    /// Drains pending snapshots, then stops the writer.
    pub async fn shutdown(&self) -> DbResult<()> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(WriterCommand::Shutdown(ack_tx))
            .map_err(|_| DbError::WriterStopped)?;
        ack_rx.await.map_err(|_| DbError::WriterStopped)
    }
}

// =============================================================================
// Snapshot Writer
// =============================================================================

struct SnapshotWriter {
    store: ProductStore,
    rx: mpsc::UnboundedReceiver<WriterCommand>,
    written: u64,
}

impl SnapshotWriter {
    async fn run(mut self) {
        info!(slot = %self.store.slot_key, "Snapshot writer starting");

        while let Some(command) = self.rx.recv().await {
            let stop = match command {
                WriterCommand::Save(snapshot) => {
                    let (latest, next) = self.coalesce(snapshot);
                    self.write(latest).await;
                    match next {
                        Some(control) => self.handle_control(control),
                        None => false,
                    }
                }
                control => self.handle_control(control),
            };

            if stop {
                break;
            }
        }

        info!(written = self.written, "Snapshot writer stopped");
    }

    /// Drains saves already queued behind `first`, keeping the newest.
    ///
    /// Stops at the first non-save command and hands it back so it is
    /// handled after the write, preserving queue order.
    fn coalesce(&mut self, first: Vec<Product>) -> (Vec<Product>, Option<WriterCommand>) {
        let mut latest = first;
        let mut skipped = 0usize;

        while let Ok(command) = self.rx.try_recv() {
            match command {
                WriterCommand::Save(snapshot) => {
                    latest = snapshot;
                    skipped += 1;
                }
                control => {
                    if skipped > 0 {
                        debug!(skipped, "Coalesced queued snapshots");
                    }
                    return (latest, Some(control));
                }
            }
        }

        if skipped > 0 {
            debug!(skipped, "Coalesced queued snapshots");
        }
        (latest, None)
    }

    async fn write(&mut self, snapshot: Vec<Product>) {
        match self.store.try_save_all(&snapshot).await {
            Ok(()) => {
                self.written += 1;
                debug!(count = snapshot.len(), "Snapshot written");
            }
            Err(e) => {
                error!(error = %e, count = snapshot.len(), "Failed to write snapshot, dropping");
            }
        }
    }

    /// Returns true when the writer should stop.
    fn handle_control(&mut self, command: WriterCommand) -> bool {
        match command {
            WriterCommand::Flush(ack) => {
                let _ = ack.send(());
                false
            }
            WriterCommand::Shutdown(ack) => {
                let _ = ack.send(());
                true
            }
            WriterCommand::Save(_) => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbConfig;

    async fn store() -> ProductStore {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        ProductStore::new(db)
    }

    fn sample() -> Vec<Product> {
        vec![Product::new("Apple", 5), Product::new("Banana", 3)]
    }

    #[tokio::test]
    async fn test_load_missing_slot_is_empty() {
        let store = store().await;
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_returns_same_products() {
        let store = store().await;
        let products = sample();

        store.try_save_all(&products).await.unwrap();

        assert_eq!(store.load_all().await, products);
    }

    #[tokio::test]
    async fn test_corrupt_blob_loads_empty() {
        let store = store().await;
        store.db.slots().put(DEFAULT_SLOT_KEY, "{not json").await.unwrap();

        assert!(store.load_all().await.is_empty());
        assert!(matches!(
            store.try_load_all().await,
            Err(DbError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_wrong_shape_loads_empty() {
        let store = store().await;
        store
            .db
            .slots()
            .put(DEFAULT_SLOT_KEY, r#"[{"id":"1","name":"Apple","quantity":-2}]"#)
            .await
            .unwrap();

        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_writer_converges_to_last_snapshot() {
        let store = store().await;
        let handle = store.spawn_writer();

        let mut products = Vec::new();
        for i in 0..50u32 {
            products.push(Product::new(format!("Item {i:02}"), i));
            handle.save_all(&products);
        }
        handle.flush().await.unwrap();

        assert_eq!(store.load_all().await, products);
    }

    #[tokio::test]
    async fn test_flush_with_nothing_queued() {
        let store = store().await;
        let handle = store.spawn_writer();

        handle.flush().await.unwrap();
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_is_swallowed() {
        let store = store().await;
        let handle = store.spawn_writer();

        store.db.close().await;
        handle.save_all(&sample());

        // The writer logs the failure and keeps serving the queue.
        handle.flush().await.unwrap();
        handle.save_all(&sample());
        handle.flush().await.unwrap();
        assert_eq!(handle.enqueued(), 2);
    }

    #[tokio::test]
    async fn test_shutdown_drains_then_stops() {
        let store = store().await;
        let handle = store.spawn_writer();
        let products = sample();

        handle.save_all(&products);
        handle.shutdown().await.unwrap();

        assert_eq!(store.load_all().await, products);
        assert!(handle.flush().await.is_err());

        // Saving after shutdown is logged and dropped, not a panic.
        handle.save_all(&[]);
        assert_eq!(store.load_all().await, products);
        assert_eq!(handle.enqueued(), 1);
    }

    #[tokio::test]
    async fn test_enqueued_counts_across_clones() {
        let store = store().await;
        let handle = store.spawn_writer();
        let clone = handle.clone();

        handle.save_all(&sample());
        clone.save_all(&[]);

        assert_eq!(handle.enqueued(), 2);
        assert_eq!(clone.enqueued(), 2);
        clone.flush().await.unwrap();
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_custom_slot_key() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = ProductStore::with_slot_key(db.clone(), "inventory");
        store.try_save_all(&sample()).await.unwrap();

        assert_eq!(store.slot_key(), "inventory");
        assert!(ProductStore::new(db).load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_reopen_file_database_keeps_products() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockroom.db");
        let products = sample();

        {
            let db = Database::new(DbConfig::new(&path)).await.unwrap();
            let store = ProductStore::new(db.clone());
            let handle = store.spawn_writer();
            handle.save_all(&products);
            handle.shutdown().await.unwrap();
            db.close().await;
        }

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        assert_eq!(ProductStore::new(db).load_all().await, products);
    }
}
