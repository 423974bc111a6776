//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It holds the product model, the
//! always-sorted catalog and the input rules, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Command surface (apps/cli)                      │   │
//! │  │    add, edit, save, inc, dec, rm, list                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                InventoryManager (apps/cli)                      │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌────────▼──────────────────┐   │
//! │  │  ★ stockroom-core (THIS CRATE) ★ │  │  stockroom-db             │   │
//! │  │                                 │  │  durable slot + writer    │   │
//! │  │  types · catalog · collation    │  └───────────────────────────┘   │
//! │  │  validation · error             │                                   │
//! │  │                                 │                                   │
//! │  │  NO I/O • PURE FUNCTIONS        │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, EditDraft, RemovalRequest)
//! - [`catalog`] - The sorted product collection and its mutations
//! - [`collation`] - Locale-aware name ordering
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for name/quantity text
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Catalog, Product};
//!
//! let mut catalog = Catalog::new();
//! catalog.insert(Product::new("Banana", 3));
//! catalog.insert(Product::new("apple", 5));
//!
//! let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["apple", "Banana"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod collation;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;
