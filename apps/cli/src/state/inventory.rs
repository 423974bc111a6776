//! # Inventory Manager
//!
//! Owns the live product collection and keeps the durable copy in step.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Command              Manager                 State Change              │
//! │  ───────              ───────                 ────────────              │
//! │                                                                         │
//! │  add ───────────────► add() ────────────────► insert + sort + save     │
//! │  edit ──────────────► begin_edit() ─────────► editing = Some(id)       │
//! │  save ──────────────► commit_edit() ────────► update + sort + save     │
//! │  cancel ────────────► cancel_edit() ────────► editing = None           │
//! │  rm ────────────────► request_removal() ────► (read only)              │
//! │  y ─────────────────► confirm_removal() ────► remove + save            │
//! │  inc / dec ─────────► increase/decrease() ──► quantity ± 1 + save      │
//! │                                                                         │
//! │  "save" = StoreHandle::save_all(snapshot): queued, never awaited.      │
//! │  The returned slice is already the new sorted list.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - The catalog is sorted by name after every operation
//! - A failed operation changes nothing and enqueues nothing
//! - Each successful mutation enqueues exactly one snapshot

use tracing::{debug, info, warn};

use stockroom_core::validation::validate_product_input;
use stockroom_core::{Catalog, CoreError, CoreResult, EditDraft, Product, RemovalRequest};
use stockroom_db::{ProductStore, StoreHandle};

/// The single owner of the product collection.
#[derive(Debug)]
pub struct InventoryManager {
    catalog: Catalog,

    /// Id of the product under edit, if any.
    editing: Option<String>,

    store: StoreHandle,
}

impl InventoryManager {
    /// Loads the persisted collection and takes ownership of the writer handle.
    ///
    /// Storage failures degrade to an empty collection.
    pub async fn load(store: &ProductStore, handle: StoreHandle) -> Self {
        let catalog = Catalog::from_products(store.load_all().await);
        info!(count = catalog.len(), "Inventory loaded");

        InventoryManager {
            catalog,
            editing: None,
            store: handle,
        }
    }

    /// The current collection, sorted by name.
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// The snapshot writer handle.
    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    // =========================================================================
    // Add / Edit
    // =========================================================================

    /// Adds a new product.
    ///
    /// ## Errors
    /// `Validation` if the name is empty or the quantity isn't a
    /// non-negative whole number. Nothing changes in that case.
    pub fn add(&mut self, name: &str, quantity_text: &str) -> CoreResult<&[Product]> {
        let (name, quantity) = validate_product_input(name, quantity_text)?;
        let product = Product::new(name, quantity);

        info!(id = %product.id, name = %product.name, quantity, "Product added");

        self.catalog.insert(product);
        self.editing = None;
        self.persist();

        Ok(self.catalog.products())
    }

    /// Marks a product as under edit and returns its current values.
    pub fn begin_edit(&mut self, id: &str) -> CoreResult<EditDraft> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        let draft = EditDraft::from(product);
        debug!(id = %id, "Edit started");

        self.editing = Some(id.to_string());
        Ok(draft)
    }

    /// Id of the product under edit.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Abandons the current edit, if any.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            debug!(id = %id, "Edit cancelled");
        }
    }

    /// Replaces the name and quantity of the product under edit.
    ///
    /// ## Errors
    /// - `NoEditInProgress` - no `begin_edit` before this
    /// - `Validation` - bad input; the edit stays open
    /// - `ProductNotFound` - the product was removed meanwhile; the edit is closed
    pub fn commit_edit(&mut self, name: &str, quantity_text: &str) -> CoreResult<&[Product]> {
        let id = self.editing.clone().ok_or(CoreError::NoEditInProgress)?;
        let (name, quantity) = validate_product_input(name, quantity_text)?;

        if !self.catalog.update(&id, name, quantity) {
            warn!(id = %id, "Product under edit no longer exists");
            self.editing = None;
            return Err(CoreError::ProductNotFound(id));
        }

        info!(id = %id, quantity, "Product updated");

        self.editing = None;
        self.persist();

        Ok(self.catalog.products())
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// First phase of removal: describes the product for confirmation.
    pub fn request_removal(&self, id: &str) -> CoreResult<RemovalRequest> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        debug!(id = %id, "Removal requested");
        Ok(RemovalRequest::from(product))
    }

    /// Second phase of removal: removes exactly the requested product.
    pub fn confirm_removal(&mut self, request: RemovalRequest) -> CoreResult<&[Product]> {
        let removed = self
            .catalog
            .remove(&request.id)
            .ok_or(CoreError::ProductNotFound(request.id))?;

        info!(id = %removed.id, name = %removed.name, "Product removed");

        if self.editing.as_deref() == Some(removed.id.as_str()) {
            self.editing = None;
        }
        self.persist();

        Ok(self.catalog.products())
    }

    /// Declines a removal. Nothing changes.
    pub fn decline_removal(&self, request: RemovalRequest) {
        debug!(id = %request.id, "Removal declined");
    }

    // =========================================================================
    // Quantity
    // =========================================================================

    /// Adds one unit.
    pub fn increase_quantity(&mut self, id: &str) -> CoreResult<&[Product]> {
        if !self.catalog.increase(id) {
            return Err(CoreError::ProductNotFound(id.to_string()));
        }

        info!(id = %id, "Quantity increased");
        self.persist();

        Ok(self.catalog.products())
    }

    /// Removes one unit. At zero this is a no-op and nothing is written.
    pub fn decrease_quantity(&mut self, id: &str) -> CoreResult<&[Product]> {
        match self.catalog.decrease(id) {
            None => return Err(CoreError::ProductNotFound(id.to_string())),
            Some(true) => {
                info!(id = %id, "Quantity decreased");
                self.persist();
            }
            Some(false) => debug!(id = %id, "Quantity already zero"),
        }

        Ok(self.catalog.products())
    }

    fn persist(&self) {
        self.store.save_all(self.catalog.products());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
