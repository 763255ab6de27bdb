//! Cart state management and checkout flow for the shopfront storefront.
//!
//! The heart of this crate is the cart store: a reducer over a closed set of
//! transitions (add, remove, update quantity, clear) that keeps the cart's
//! line items and derived totals consistent after every step. Consumers never
//! touch the store directly; all reads and writes go through the
//! [`CartHandle`](cart::CartHandle) facade handed out by an active
//! [`CartScope`](cart::CartScope).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_commerce::prelude::*;
//!
//! let scope = CartScope::new();
//! let cart = scope.handle();
//!
//! cart.add_item(&product, 2)?;
//! println!("{} items, {}", cart.item_count()?, cart.total()?);
//!
//! let order = place_order(&cart, form)?;
//! println!("Order {} placed", order.id);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;

pub use error::CommerceError;
pub use ids::OrderId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::OrderId;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        CartHandle, CartLine, CartScope, CartState, CartStore, Transition, MAX_QUANTITY_PER_LINE,
    };

    // Checkout
    pub use crate::checkout::{
        place_order, CheckoutForm, Order, OrderStatus, PaymentMethod, SHIPPING_FEE_CENTS,
    };

    // Catalog types re-exported for consumers of the cart API.
    pub use shopfront_catalog::{Catalog, CatalogError, Product, ProductId};
}
