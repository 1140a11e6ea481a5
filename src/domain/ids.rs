use std::fmt;

/// Zero-based identifier stored on every [`Product`](super::Product).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u64);

/// One-based identifier shown to and typed by the operator.
///
/// Signed so that `0` and negative input from the menu can be represented;
/// such ids never address a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayId(pub i64);

impl DisplayId {
    /// Translates back to the stored id, or `None` when the display id
    /// cannot have been issued.
    pub fn internal(self) -> Option<ProductId> {
        if self.0 <= 0 {
            return None;
        }
        Some(ProductId(self.0 as u64 - 1))
    }
}

impl From<ProductId> for DisplayId {
    fn from(id: ProductId) -> Self {
        DisplayId(id.0 as i64 + 1)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source owned by an inventory. Ids are never handed out twice.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn starting_at(first: ProductId) -> Self {
        Self { next: first.0 }
    }

    pub fn next_id(&mut self) -> ProductId {
        let id = ProductId(self.next);
        self.next += 1;
        id
    }
}
