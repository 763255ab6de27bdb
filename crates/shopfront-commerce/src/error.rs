//! Commerce error types.
//!
//! The cart store itself has no error taxonomy: unknown ids and non-positive
//! quantities are normalized to no-ops inside the transition function. Errors
//! here cover misuse of the facade and the checkout flow.

use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A cart handle was used after its owning scope was dropped. This is a
    /// programming error, not a recoverable runtime condition.
    #[error("Cart scope has ended; cart operations require an active scope")]
    CartScopeEnded,

    /// Checkout was attempted with no items in the cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// A checkout form field failed validation.
    #[error("Invalid {field}: {message}")]
    InvalidForm {
        field: &'static str,
        message: &'static str,
    },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
