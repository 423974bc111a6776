//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   EditDraft     │   │ RemovalRequest  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  name           │       │
//! │  │  quantity (u32) │   │  quantity_text  │   │  quantity       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │     stored record        begin-edit result     confirm token           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Durable Shape
//! `Product` serializes to exactly `{"id": "...", "name": "...", "quantity": N}`.
//! The durable slot holds a JSON array of these records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Product
// =============================================================================

/// A tracked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4), immutable after creation.
    pub id: String,

    /// Display name, also the sort key.
    pub name: String,

    /// Units on hand. Never negative.
    pub quantity: u32,
}

impl Product {
    /// Creates a product with a freshly generated id.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Product {
            id: generate_product_id(),
            name: name.into(),
            quantity,
        }
    }
}

/// Generates a new product id.
///
/// UUID v4 rather than a creation timestamp: two products created within the
/// same clock tick still get distinct ids.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Edit Draft
// =============================================================================

/// The would-be input values when an edit begins.
///
/// The command surface pre-fills its name/quantity inputs from this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditDraft {
    pub id: String,
    pub name: String,
    /// Quantity rendered as decimal text, ready for a text input.
    pub quantity_text: String,
}

impl From<&Product> for EditDraft {
    fn from(p: &Product) -> Self {
        EditDraft {
            id: p.id.clone(),
            name: p.name.clone(),
            quantity_text: p.quantity.to_string(),
        }
    }
}

// =============================================================================
// Removal Request
// =============================================================================

/// First phase of a two-phase removal.
///
/// Describes the product so the caller can ask for confirmation. Passing it
/// back to the manager confirms the removal; dropping it declines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalRequest {
    pub id: String,
    pub name: String,
    pub quantity: u32,
}

impl RemovalRequest {
    /// Human-readable confirmation prompt.
    pub fn prompt(&self) -> String {
        format!("Remove \"{}\" (quantity {})?", self.name, self.quantity)
    }
}

impl From<&Product> for RemovalRequest {
    fn from(p: &Product) -> Self {
        RemovalRequest {
            id: p.id.clone(),
            name: p.name.clone(),
            quantity: p.quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_products_get_distinct_ids() {
        let a = Product::new("Apple", 1);
        let b = Product::new("Apple", 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: "p-1".to_string(),
            name: "Apple".to_string(),
            quantity: 5,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "p-1", "name": "Apple", "quantity": 5 })
        );
    }

    #[test]
    fn test_negative_quantity_is_rejected_on_decode() {
        let result: Result<Product, _> =
            serde_json::from_str(r#"{"id":"p-1","name":"Apple","quantity":-1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_edit_draft_renders_quantity_text() {
        let product = Product::new("Apple", 12);
        let draft = EditDraft::from(&product);
        assert_eq!(draft.id, product.id);
        assert_eq!(draft.quantity_text, "12");
    }

    #[test]
    fn test_removal_prompt() {
        let product = Product::new("Apple", 3);
        let request = RemovalRequest::from(&product);
        assert_eq!(request.prompt(), "Remove \"Apple\" (quantity 3)?");
    }
}
