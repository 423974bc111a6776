//! # Catalog
//!
//! The in-memory product collection, always materialized sorted by name.
//!
//! ## Sort Invariant
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Mutation Flow                                │
//! │                                                                         │
//! │  insert / update / remove / increase / decrease                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  mutate Vec<Product> by id                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stable sort_by(compare_names)  ◄── after EVERY mutation               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  products() is sorted ascending at every observation point             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog knows nothing about persistence; the inventory manager
//! snapshots [`Catalog::products`] after each mutation.

use crate::collation::compare_names;
use crate::types::Product;

/// Sorted collection of products, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Builds a catalog from an arbitrary list, sorting it.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut catalog = Catalog { products };
        catalog.sort();
        catalog
    }

    /// The products, sorted by name.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when there are no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Inserts a product and re-sorts.
    pub fn insert(&mut self, product: Product) {
        self.products.push(product);
        self.sort();
    }

    /// Replaces a product's name and quantity, keeping its id.
    ///
    /// ## Returns
    /// `false` when no product has this id.
    pub fn update(&mut self, id: &str, name: String, quantity: u32) -> bool {
        let Some(product) = self.get_mut(id) else {
            return false;
        };
        product.name = name;
        product.quantity = quantity;
        self.sort();
        true
    }

    /// Removes a product by id.
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let idx = self.products.iter().position(|p| p.id == id)?;
        let removed = self.products.remove(idx);
        self.sort();
        Some(removed)
    }

    /// Adds one unit. Saturates at `u32::MAX`.
    ///
    /// ## Returns
    /// `false` when no product has this id.
    pub fn increase(&mut self, id: &str) -> bool {
        let Some(product) = self.get_mut(id) else {
            return false;
        };
        product.quantity = product.quantity.saturating_add(1);
        self.sort();
        true
    }

    /// Removes one unit, clamped at zero.
    ///
    /// ## Returns
    /// - `None` - no product has this id
    /// - `Some(true)` - quantity went down by one
    /// - `Some(false)` - quantity was already zero, nothing changed
    pub fn decrease(&mut self, id: &str) -> Option<bool> {
        let product = self.get_mut(id)?;
        let changed = match product.quantity.checked_sub(1) {
            Some(q) => {
                product.quantity = q;
                true
            }
            None => false,
        };
        self.sort();
        Some(changed)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    fn sort(&mut self) {
        // Vec::sort_by is stable: equal names keep their relative order.
        self.products.sort_by(|a, b| compare_names(&a.name, &b.name));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.products().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_insert_keeps_sorted() {
        let mut catalog = Catalog::new();
        catalog.insert(Product::new("Cherry", 1));
        catalog.insert(Product::new("apple", 2));
        catalog.insert(Product::new("Banana", 3));
        assert_eq!(names(&catalog), ["apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_from_products_sorts() {
        let catalog = Catalog::from_products(vec![
            Product::new("Pão", 1),
            Product::new("Arroz", 1),
            Product::new("Feijão", 1),
        ]);
        assert_eq!(names(&catalog), ["Arroz", "Feijão", "Pão"]);
    }

    #[test]
    fn test_equal_names_keep_insertion_order() {
        let first = Product::new("Apple", 1);
        let second = Product::new("Apple", 2);
        let mut catalog = Catalog::new();
        catalog.insert(first.clone());
        catalog.insert(second.clone());
        catalog.insert(Product::new("Aardvark", 0));

        let ids: Vec<&str> = catalog.products()[1..].iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, [first.id.as_str(), second.id.as_str()]);
    }

    #[test]
    fn test_update_resorts_and_keeps_id() {
        let apple = Product::new("Apple", 5);
        let mut catalog = Catalog::from_products(vec![apple.clone(), Product::new("Banana", 3)]);

        assert!(catalog.update(&apple.id, "Zucchini".to_string(), 9));
        assert_eq!(names(&catalog), ["Banana", "Zucchini"]);

        let updated = catalog.get(&apple.id).unwrap();
        assert_eq!(updated.quantity, 9);
        assert!(!catalog.update("missing", "X".to_string(), 1));
    }

    #[test]
    fn test_remove_only_target() {
        let apple = Product::new("Apple", 5);
        let banana = Product::new("Banana", 3);
        let mut catalog = Catalog::from_products(vec![apple.clone(), banana.clone()]);

        let removed = catalog.remove(&apple.id).unwrap();
        assert_eq!(removed, apple);
        assert_eq!(catalog.products(), [banana]);
        assert!(catalog.remove(&apple.id).is_none());
    }

    #[test]
    fn test_decrease_clamps_at_zero() {
        let p = Product::new("Apple", 1);
        let mut catalog = Catalog::from_products(vec![p.clone()]);

        assert_eq!(catalog.decrease(&p.id), Some(true));
        assert_eq!(catalog.get(&p.id).unwrap().quantity, 0);
        assert_eq!(catalog.decrease(&p.id), Some(false));
        assert_eq!(catalog.get(&p.id).unwrap().quantity, 0);
        assert_eq!(catalog.decrease("missing"), None);
    }

    #[test]
    fn test_increase_then_decrease_round_trips() {
        let p = Product::new("Apple", 4);
        let mut catalog = Catalog::from_products(vec![p.clone()]);

        assert!(catalog.increase(&p.id));
        assert_eq!(catalog.decrease(&p.id), Some(true));
        assert_eq!(catalog.get(&p.id).unwrap().quantity, 4);
        assert!(!catalog.increase("missing"));
    }

    #[test]
    fn test_increase_saturates() {
        let mut p = Product::new("Apple", 0);
        p.quantity = u32::MAX;
        let mut catalog = Catalog::from_products(vec![p.clone()]);
        assert!(catalog.increase(&p.id));
        assert_eq!(catalog.get(&p.id).unwrap().quantity, u32::MAX);
    }
}
