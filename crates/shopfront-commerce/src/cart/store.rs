//! The cart store and its transition reducer.

use crate::cart::state::{CartLine, CartState};
use shopfront_catalog::{Product, ProductId};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: i64 = 10;

/// The closed set of sanctioned cart mutations.
///
/// Every transition is a total function over well-formed input: unknown ids
/// and non-positive quantities are normalized to no-ops rather than errors.
#[derive(Debug, Clone)]
pub enum Transition {
    /// Merge a product into the cart, snapshotting its display fields.
    AddItem { product: Product, quantity: i64 },
    /// Delete the line for a product, if present.
    RemoveItem { product_id: ProductId },
    /// Set a line's quantity; `quantity <= 0` removes the line.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Discard all lines.
    Clear,
}

/// Apply a transition to a state, producing a new fully-consistent state.
///
/// Pure and side-effect free. The returned state always satisfies the cart
/// invariants: derived totals match the lines, no duplicate product ids, all
/// quantities in `[1, MAX_QUANTITY_PER_LINE]`.
pub fn apply(state: &CartState, transition: Transition) -> CartState {
    match transition {
        Transition::AddItem { product, quantity } => {
            if quantity <= 0 || !product.is_available() {
                return state.clone();
            }
            let mut lines = state.items.clone();
            if let Some(line) = lines.iter_mut().find(|l| l.product_id == product.id) {
                let merged = line
                    .quantity
                    .saturating_add(quantity)
                    .min(MAX_QUANTITY_PER_LINE);
                *line = line.with_quantity(merged);
            } else {
                lines.push(CartLine::snapshot(
                    &product,
                    quantity.min(MAX_QUANTITY_PER_LINE),
                ));
            }
            CartState::from_lines(lines)
        }

        Transition::RemoveItem { product_id } => {
            let lines: Vec<CartLine> = state
                .items
                .iter()
                .filter(|l| l.product_id != product_id)
                .cloned()
                .collect();
            CartState::from_lines(lines)
        }

        Transition::UpdateQuantity {
            product_id,
            quantity,
        } => {
            if quantity <= 0 {
                return apply(state, Transition::RemoveItem { product_id });
            }
            let clamped = quantity.min(MAX_QUANTITY_PER_LINE);
            let lines: Vec<CartLine> = state
                .items
                .iter()
                .map(|l| {
                    if l.product_id == product_id {
                        l.with_quantity(clamped)
                    } else {
                        l.clone()
                    }
                })
                .collect();
            CartState::from_lines(lines)
        }

        Transition::Clear => CartState::empty(),
    }
}

/// Holds the authoritative [`CartState`] and applies transitions to it.
///
/// One store exists per browsing session; it is created empty and mutated
/// only through [`CartStore::dispatch`].
#[derive(Debug, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new() -> Self {
        Self {
            state: CartState::empty(),
        }
    }

    /// The current state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply a transition and return the new state.
    pub fn dispatch(&mut self, transition: Transition) -> &CartState {
        self.state = apply(&self.state, transition);
        &self.state
    }
}
