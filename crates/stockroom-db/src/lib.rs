//! # stockroom-db: Persistence Layer for Stockroom
//!
//! This crate keeps a durable copy of the product collection in a local
//! SQLite file, as a single JSON blob in one named slot.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  InventoryManager (add / edit / inc / dec / remove)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  ProductStore │    │ SlotRepository│    │  Database    │  │   │
//! │  │   │  (store.rs)   │───►│ (slot.rs)     │───►│  (pool.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ load_all      │    │ get / put     │    │ SqlitePool   │  │   │
//! │  │   │ StoreHandle   │    │ delete        │    │ migrations   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ~/.local/share/stockroom/stockroom.db   (kv_store table)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Slot repository
//! - [`store`] - Product collection load/save and the snapshot writer
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Database, DbConfig, ProductStore};
//!
//! let db = Database::new(DbConfig::new("stockroom.db")).await?;
//! let store = ProductStore::new(db);
//!
//! let products = store.load_all().await;   // never fails
//! let handle = store.spawn_writer();
//! handle.save_all(&products);              // fire-and-forget
//! handle.flush().await?;                   // wait for durability
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::slot::SlotRepository;
pub use store::{ProductStore, StoreHandle, DEFAULT_SLOT_KEY};
