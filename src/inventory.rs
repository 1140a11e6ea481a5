//! The shop's product list and the operations the menu drives.
//!
//! Every operation here takes ids in their one-based [`DisplayId`] form and
//! translates through [`DisplayId::internal`] before comparing against stored ids.

use crate::domain::{DisplayId, IdSequence, NewProduct, Product, ProductId};
use crate::error::InventoryError;

/// Insertion-ordered collection of products plus the id sequence that numbers them.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: Vec<Product>,
    ids: IdSequence,
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_ids(IdSequence::new())
    }

    /// Starts numbering from a caller-supplied sequence.
    pub fn with_ids(ids: IdSequence) -> Self {
        Self {
            products: Vec::new(),
            ids,
        }
    }

    /// Creates a product with the next id and appends it.
    pub fn add(&mut self, payload: NewProduct) -> &Product {
        let product = Product::create(&mut self.ids, payload);
        let index = self.products.len();
        self.products.push(product);
        &self.products[index]
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn position(&self, id: DisplayId) -> Option<usize> {
        let internal = id.internal()?;
        self.products.iter().position(|p| p.id() == internal)
    }

    pub fn find_by_id(&self, id: DisplayId) -> Result<&Product, InventoryError> {
        self.position(id)
            .map(|index| &self.products[index])
            .ok_or(InventoryError::NotFound(id))
    }

    /// Products whose name equals `name` exactly, in insertion order.
    pub fn find_all_by_name(&self, name: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.name == name).collect()
    }

    /// Removes and returns the product. Remaining products keep their ids.
    pub fn delete_by_id(&mut self, id: DisplayId) -> Result<Product, InventoryError> {
        let index = self.position(id).ok_or(InventoryError::NotFound(id))?;
        Ok(self.products.remove(index))
    }

    pub fn update_price_by_id(&mut self, id: DisplayId, price: f64) -> Result<(), InventoryError> {
        let index = self.position(id).ok_or(InventoryError::NotFound(id))?;
        self.products[index].update_price(price);
        Ok(())
    }

    pub fn update_quantity_by_id(&mut self, id: DisplayId, quantity: i64) -> Result<(), InventoryError> {
        let index = self.position(id).ok_or(InventoryError::NotFound(id))?;
        self.products[index].update_quantity(quantity);
        Ok(())
    }

    pub fn average_price(&self) -> f64 {
        Product::average_price(&self.products)
    }

    /// Average over the listed products; a repeated id is counted once per repeat.
    pub fn average_price_by_ids(&self, ids: &[DisplayId]) -> f64 {
        Product::average_price_by_ids(&self.products, &internal_ids(ids))
    }

    pub fn average_price_by_distinct_ids(&self, ids: &[DisplayId]) -> f64 {
        Product::average_price_by_distinct_ids(&self.products, &internal_ids(ids))
    }
}

// Display ids that were never issuable (zero or negative) are dropped here.
fn internal_ids(ids: &[DisplayId]) -> Vec<ProductId> {
    ids.iter().filter_map(|id| id.internal()).collect()
}
