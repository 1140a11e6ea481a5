use super::ids::{DisplayId, IdSequence, ProductId};

/// Represents a product in the inventory.
///
/// Price and quantity are stored as given; negative values are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    pub brand: String,
    pub supplier: String,
    /// Stored verbatim, never parsed.
    pub expiration_date: String,
}

/// Payload for creating a new product. The id is assigned on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    pub brand: String,
    pub supplier: String,
    pub expiration_date: String,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
        brand: impl Into<String>,
        supplier: impl Into<String>,
        expiration_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
            brand: brand.into(),
            supplier: supplier.into(),
            expiration_date: expiration_date.into(),
        }
    }
}

impl Product {
    /// Builds a product from `payload`, drawing its id from `ids`.
    pub fn create(ids: &mut IdSequence, payload: NewProduct) -> Self {
        Self {
            id: ids.next_id(),
            name: payload.name,
            category: payload.category,
            price: payload.price,
            quantity: payload.quantity,
            brand: payload.brand,
            supplier: payload.supplier,
            expiration_date: payload.expiration_date,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn display_id(&self) -> DisplayId {
        DisplayId::from(self.id)
    }

    pub fn update_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn update_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    /// Full record with the id leading, as shown when looking up by id.
    pub fn describe(&self) -> String {
        format!(
            "ID: {} - Name: {} - Category: {} - Quantity: {} - Price: ${} - Brand: {} - Supplier: {} - Expiration Date: {}",
            self.display_id(),
            self.name,
            self.category,
            self.quantity,
            self.price,
            self.brand,
            self.supplier,
            self.expiration_date,
        )
    }

    /// Full record with the name leading, as shown when searching by name.
    pub fn describe_name_first(&self) -> String {
        format!(
            "Name: {} - ID: {} - Category: {} - Quantity: {} - Price: ${} - Brand: {} - Supplier: {} - Expiration Date: {}",
            self.name,
            self.display_id(),
            self.category,
            self.quantity,
            self.price,
            self.brand,
            self.supplier,
            self.expiration_date,
        )
    }

    /// Mean price over `products`, or `0.0` when there are none.
    pub fn average_price(products: &[Product]) -> f64 {
        if products.is_empty() {
            return 0.0;
        }
        let total: f64 = products.iter().map(|p| p.price).sum();
        total / products.len() as f64
    }

    /// Mean price over the products whose id appears in `ids`.
    ///
    /// Ids with no matching product are skipped. An id listed more than once
    /// counts its product once per occurrence. Returns `0.0` when nothing matches.
    pub fn average_price_by_ids(products: &[Product], ids: &[ProductId]) -> f64 {
        if products.is_empty() || ids.is_empty() {
            return 0.0;
        }

        let mut total = 0.0;
        let mut counted = 0usize;
        for product in products {
            let hits = ids.iter().filter(|id| **id == product.id).count();
            total += product.price * hits as f64;
            counted += hits;
        }

        if counted == 0 {
            0.0
        } else {
            total / counted as f64
        }
    }

    /// Like [`average_price_by_ids`](Self::average_price_by_ids) but each
    /// matching product counts once regardless of repeats in `ids`.
    pub fn average_price_by_distinct_ids(products: &[Product], ids: &[ProductId]) -> f64 {
        let matching: Vec<Product> = products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect();
        Self::average_price(&matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(ids: &mut IdSequence, name: &str, price: f64) -> Product {
        Product::create(ids, NewProduct::new(name, "Grocery", price, 1, "Brand", "Supplier", "2026-12-31"))
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut ids = IdSequence::new();
        let milk = priced(&mut ids, "Milk", 1.0);
        let bread = priced(&mut ids, "Bread", 2.0);

        assert_eq!(milk.id(), ProductId(0));
        assert_eq!(milk.display_id(), DisplayId(1));
        assert_eq!(bread.id(), ProductId(1));
        assert_eq!(bread.display_id(), DisplayId(2));
    }

    #[test]
    fn test_updates_overwrite_without_validation() {
        let mut ids = IdSequence::new();
        let mut milk = priced(&mut ids, "Milk", 1.0);

        milk.update_price(-4.25);
        milk.update_quantity(-2);

        assert_eq!(milk.price, -4.25);
        assert_eq!(milk.quantity, -2);
        assert_eq!(milk.id(), ProductId(0));
    }

    #[test]
    fn test_describe_shows_display_id_and_all_fields() {
        let mut ids = IdSequence::new();
        let milk = Product::create(
            &mut ids,
            NewProduct::new("Milk", "Dairy", 5.5, 12, "Lala", "Norte", "2026-11-01"),
        );

        assert_eq!(
            milk.describe(),
            "ID: 1 - Name: Milk - Category: Dairy - Quantity: 12 - Price: $5.5 - Brand: Lala - Supplier: Norte - Expiration Date: 2026-11-01"
        );
        assert!(milk.describe_name_first().starts_with("Name: Milk - ID: 1 - "));
    }

    #[test]
    fn test_average_price() {
        let mut ids = IdSequence::new();
        assert_eq!(Product::average_price(&[]), 0.0);

        let products = vec![priced(&mut ids, "A", 10.0), priced(&mut ids, "B", 20.0)];
        assert_eq!(Product::average_price(&products), 15.0);
    }

    #[test]
    fn test_average_price_by_ids_counts_repeats() {
        let mut ids = IdSequence::new();
        let products = vec![priced(&mut ids, "A", 10.0), priced(&mut ids, "B", 30.0)];

        assert_eq!(Product::average_price_by_ids(&products, &[ProductId(0), ProductId(0)]), 10.0);
        // 10 + 10 + 30 over three hits
        let avg = Product::average_price_by_ids(&products, &[ProductId(0), ProductId(0), ProductId(1)]);
        assert!((avg - 50.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            Product::average_price_by_distinct_ids(&products, &[ProductId(0), ProductId(0), ProductId(1)]),
            20.0
        );
    }

    #[test]
    fn test_average_price_by_ids_without_matches_is_zero() {
        let mut ids = IdSequence::new();
        let products = vec![priced(&mut ids, "A", 10.0)];

        assert_eq!(Product::average_price_by_ids(&products, &[]), 0.0);
        assert_eq!(Product::average_price_by_ids(&[], &[ProductId(0)]), 0.0);
        assert_eq!(Product::average_price_by_ids(&products, &[ProductId(9)]), 0.0);
        assert_eq!(Product::average_price_by_distinct_ids(&products, &[ProductId(9)]), 0.0);
    }
}
