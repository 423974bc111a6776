//! # Commands
//!
//! The line-oriented command surface over [`InventoryManager`].
//!
//! [`InventoryManager`]: crate::state::InventoryManager

pub mod product;

pub use product::{execute, render_products, run_session, Command, Reply, HELP};
