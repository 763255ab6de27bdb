//! Checkout flow.
//!
//! There is no order backend: placing an order validates the form, snapshots
//! the cart into an [`Order`] with a client-generated order number, and
//! clears the cart.

mod form;
mod order;

pub use form::{CheckoutForm, PaymentMethod};
pub use order::{Order, OrderStatus};

use crate::cart::CartHandle;
use crate::error::CommerceError;
use crate::money::Money;

/// Flat shipping fee for store pickup, in cents (NT$60).
pub const SHIPPING_FEE_CENTS: i64 = 6000;

/// Place an order from the current cart.
///
/// Rejects an empty cart and an invalid form without touching cart state.
/// On success the cart is cleared and the returned order carries a snapshot
/// of the lines and totals as they were at placement.
pub fn place_order(cart: &CartHandle, form: CheckoutForm) -> Result<Order, CommerceError> {
    let state = cart.state()?;
    if state.is_empty() {
        return Err(CommerceError::EmptyCart);
    }
    form.validate()?;

    let subtotal = state.total;
    let shipping_total = Money::new(SHIPPING_FEE_CENTS, subtotal.currency);
    let grand_total = subtotal
        .try_add(&shipping_total)
        .ok_or(CommerceError::Overflow)?;

    let order = Order::new(state.items, subtotal, shipping_total, grand_total, form);
    cart.clear_cart()?;
    tracing::info!(
        order = %order.id,
        total_cents = order.grand_total.amount_cents,
        "order placed"
    );
    Ok(order)
}
