//! Cart state and line item types.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use shopfront_catalog::{Product, ProductId};

/// One product entry in the cart.
///
/// Display fields are snapshot copies taken when the product was added, not
/// live references; the line stays displayable even if the catalog changes
/// mid-session. `subtotal` is derived from `unit_price * quantity` and is
/// never set independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product this line refers to. Unique within the cart.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Product image at add time.
    pub image_url: String,
    /// Unit price at add time.
    pub unit_price: Money,
    /// Quantity, always in `[1, MAX_QUANTITY_PER_LINE]`.
    pub quantity: i64,
    /// Derived `unit_price * quantity`.
    pub subtotal: Money,
}

impl CartLine {
    /// Snapshot a product's display fields into a new line.
    pub fn snapshot(product: &Product, quantity: i64) -> Self {
        let unit_price = Money::new(product.price_in_cents, Currency::TWD);
        Self {
            product_id: product.id,
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            unit_price,
            quantity,
            subtotal: unit_price.multiply(quantity),
        }
    }

    /// Copy of this line with a new quantity and recomputed subtotal.
    pub(crate) fn with_quantity(&self, quantity: i64) -> Self {
        Self {
            quantity,
            subtotal: self.unit_price.multiply(quantity),
            ..self.clone()
        }
    }
}

/// The full cart snapshot at a point in time.
///
/// `total` and `item_count` are cached derivations of `items`, recomputed
/// atomically by the same transition that changes the lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Lines in insertion order, unique by `product_id`.
    pub items: Vec<CartLine>,
    /// Sum of all line subtotals.
    pub total: Money,
    /// Sum of all line quantities.
    pub item_count: i64,
}

impl CartState {
    /// The empty cart.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Money::zero(Currency::TWD),
            item_count: 0,
        }
    }

    /// Build a state from lines, recomputing both derived fields.
    pub(crate) fn from_lines(items: Vec<CartLine>) -> Self {
        let total = Money::sum(items.iter().map(|l| &l.subtotal), Currency::TWD);
        let item_count = items.iter().map(|l| l.quantity).sum();
        Self {
            items,
            total,
            item_count,
        }
    }

    /// Look up the line for a product, if present.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.items.iter().find(|l| l.product_id == product_id)
    }

    /// Check if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price_in_cents: cents,
            image_url: format!("https://example.com/{}.jpg", id),
            description: None,
            category: None,
            in_stock: None,
            stock: None,
        }
    }

    #[test]
    fn test_snapshot_copies_display_fields() {
        let mut p = product(1, 1000);
        let line = CartLine::snapshot(&p, 2);

        // Mutating the source record does not touch the snapshot.
        p.name = "Renamed".to_string();
        assert_eq!(line.name, "Product 1");
        assert_eq!(line.unit_price.amount_cents, 1000);
        assert_eq!(line.subtotal.amount_cents, 2000);
    }

    #[test]
    fn test_from_lines_recomputes_derived_fields() {
        let lines = vec![
            CartLine::snapshot(&product(1, 1000), 2),
            CartLine::snapshot(&product(2, 2500), 1),
        ];
        let state = CartState::from_lines(lines);
        assert_eq!(state.total.amount_cents, 4500);
        assert_eq!(state.item_count, 3);
    }

    #[test]
    fn test_empty_state() {
        let state = CartState::empty();
        assert!(state.is_empty());
        assert!(state.total.is_zero());
        assert_eq!(state.item_count, 0);
    }
}
